//! # confvar-testgen — Generated Test Scenarios
//!
//! Derives property tests directly from a variable's declaration: given a
//! [`ConfigVar`](confvar_schema::ConfigVar), [`scenarios_for`] synthesizes
//! a fixed battery of positive (valid value accepted) and negative
//! (wrong-shape value rejected) scenarios exercising the declared kind's
//! negative space.
//!
//! Generation is a pure mapping from descriptor to scenario set: no I/O,
//! no state across calls, deterministic and repeatable for a given
//! descriptor. Execution is separate — [`run_scenario`] plays one scenario
//! through `resolve` and compares the outcome to the expectation, giving
//! the test-execution collaborator one executable case per scenario.
//!
//! Scenarios exercise the declared kind only. A variable carrying an
//! extra validator may legitimately reject a generated sample; such
//! variables need hand-written cases for the validator's rules.

pub mod generate;
pub mod scenario;

// Re-export primary types for ergonomic imports.
pub use generate::scenarios_for;
pub use scenario::{
    run_scenario, verify_registry, verify_var, Expected, ScenarioFailure, TestScenario,
};
