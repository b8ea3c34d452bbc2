//! # Scenarios and Their Execution
//!
//! A [`TestScenario`] is one (input, expected outcome) pair for one
//! variable. Scenarios are read-only values; [`run_scenario`] executes
//! one against its descriptor and reports a structured
//! [`ScenarioFailure`] on mismatch.

use serde_yaml::Value;
use thiserror::Error;

use confvar_core::ErrorKind;
use confvar_schema::{ConfigVar, Registry};

/// The outcome a scenario expects from `resolve`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expected {
    /// Resolution succeeds with exactly this value.
    Accept(Value),
    /// Resolution fails with this error kind.
    Reject(ErrorKind),
}

/// One generated test case: an input for a named variable and the
/// outcome resolving it must produce.
#[derive(Debug, Clone, PartialEq)]
pub struct TestScenario {
    /// Name of the variable under test.
    pub var_name: String,
    /// Short description of what the scenario exercises.
    pub label: String,
    /// The raw document value, or `None` for an absent key.
    pub input: Option<Value>,
    /// The required outcome.
    pub expected: Expected,
}

/// A scenario whose actual outcome did not match its expectation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{var_name}: scenario '{label}' failed: {detail}")]
pub struct ScenarioFailure {
    /// Name of the variable under test.
    pub var_name: String,
    /// Label of the failing scenario.
    pub label: String,
    /// What happened instead of the expectation.
    pub detail: String,
}

/// Execute one scenario against its descriptor.
///
/// # Errors
///
/// [`ScenarioFailure`] describing the mismatch: an unexpected rejection,
/// an unexpected acceptance, a wrong accepted value, or a wrong error
/// kind.
pub fn run_scenario(var: &ConfigVar, scenario: &TestScenario) -> Result<(), ScenarioFailure> {
    let fail = |detail: String| ScenarioFailure {
        var_name: scenario.var_name.clone(),
        label: scenario.label.clone(),
        detail,
    };

    match (&scenario.expected, var.resolve(scenario.input.as_ref())) {
        (Expected::Accept(want), Ok(got)) => {
            if *want == got {
                Ok(())
            } else {
                Err(fail(format!("accepted with {got:?}, expected {want:?}")))
            }
        }
        (Expected::Accept(_), Err(error)) => Err(fail(format!("unexpectedly rejected: {error}"))),
        (Expected::Reject(kind), Err(error)) => {
            if error.kind == *kind {
                Ok(())
            } else {
                Err(fail(format!(
                    "rejected with {}, expected {kind}",
                    error.kind
                )))
            }
        }
        (Expected::Reject(kind), Ok(got)) => Err(fail(format!(
            "unexpectedly accepted with {got:?}, expected {kind}"
        ))),
    }
}

/// Run the full generated battery for one variable.
///
/// # Errors
///
/// Every failing scenario, in generation order.
pub fn verify_var(var: &ConfigVar) -> Result<(), Vec<ScenarioFailure>> {
    let failures: Vec<ScenarioFailure> = crate::generate::scenarios_for(var)
        .iter()
        .filter_map(|scenario| run_scenario(var, scenario).err())
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures)
    }
}

/// Run the generated batteries for every variable in a registry.
///
/// # Errors
///
/// Every failing scenario across all variables, in registry order.
pub fn verify_registry(registry: &Registry) -> Result<(), Vec<ScenarioFailure>> {
    let failures: Vec<ScenarioFailure> = registry
        .iter()
        .filter_map(|var| verify_var(var).err())
        .flatten()
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures)
    }
}
