//! # Scenario Generation
//!
//! [`scenarios_for`] maps one descriptor to its fixed battery of
//! scenarios, dispatching on the declared [`ValueKind`] tag. Each kind
//! contributes positive scenarios for representative well-formed inputs
//! and negative scenarios for each wrong shape the kind rejects.
//!
//! Every battery also exercises the absent-input path: required variables
//! must reject with `MissingRequired`, optional variables must yield
//! exactly their declared default.

use serde_yaml::{Mapping, Value};

use confvar_core::{ErrorKind, ValueKind};
use confvar_schema::ConfigVar;

use crate::scenario::{Expected, TestScenario};

/// Derive the scenario battery for one declared variable.
///
/// Pure and deterministic: the same descriptor always yields the same
/// scenarios in the same order.
pub fn scenarios_for(var: &ConfigVar) -> Vec<TestScenario> {
    let mut scenarios = Vec::new();

    if var.required() {
        push(&mut scenarios, var, "absent input", None, Expected::Reject(ErrorKind::MissingRequired));
    } else if let Some(default) = var.default() {
        push(
            &mut scenarios,
            var,
            "absent input yields default",
            None,
            Expected::Accept(default.clone()),
        );
    }

    match var.kind() {
        ValueKind::Bool => {
            accept(&mut scenarios, var, "accept true", Value::Bool(true));
            accept(&mut scenarios, var, "accept false", Value::Bool(false));
            reject(&mut scenarios, var, "reject string", text("a string"), ErrorKind::NotBool);
            reject(&mut scenarios, var, "reject integer", Value::from(1234), ErrorKind::NotBool);
            reject(&mut scenarios, var, "reject sequence", int_list(), ErrorKind::NotBool);
        }

        ValueKind::Int => {
            accept(&mut scenarios, var, "accept positive integer", Value::from(1234));
            accept(&mut scenarios, var, "accept zero", Value::from(0));
            accept(&mut scenarios, var, "accept negative integer", Value::from(-1));
            reject(&mut scenarios, var, "reject string", text("a string"), ErrorKind::NotInt);
            reject(&mut scenarios, var, "reject boolean", Value::Bool(true), ErrorKind::NotInt);
            reject(&mut scenarios, var, "reject float", Value::from(3.5), ErrorKind::NotInt);
        }

        ValueKind::Str => {
            accept(&mut scenarios, var, "accept text", text("a string"));
            if var.required() {
                reject(
                    &mut scenarios,
                    var,
                    "reject empty string",
                    text(""),
                    ErrorKind::MissingRequired,
                );
            } else {
                accept(&mut scenarios, var, "accept empty string", text(""));
            }
            reject(&mut scenarios, var, "reject integer", Value::from(1234), ErrorKind::NotStr);
            reject(&mut scenarios, var, "reject boolean", Value::Bool(true), ErrorKind::NotStr);
            reject(&mut scenarios, var, "reject sequence", str_list(), ErrorKind::NotStr);
        }

        ValueKind::List(elem) => {
            let well_formed = Value::Sequence(element_samples(elem));
            accept(&mut scenarios, var, "accept well-formed sequence", well_formed);
            accept(&mut scenarios, var, "accept empty sequence", Value::Sequence(vec![]));
            reject(&mut scenarios, var, "reject string", text("a string"), ErrorKind::NotList);
            reject(&mut scenarios, var, "reject integer", Value::from(1234), ErrorKind::NotList);

            let (bad_element, element_kind) = wrong_element(elem);
            let mut tainted = element_samples(elem);
            tainted.push(bad_element);
            reject(
                &mut scenarios,
                var,
                "reject sequence with malformed element",
                Value::Sequence(tainted),
                element_kind,
            );
        }

        ValueKind::Dict => {
            let mut sample = Mapping::new();
            sample.insert(text("username"), text("domdfcoding"));
            accept(&mut scenarios, var, "accept mapping", Value::Mapping(sample));
            accept(&mut scenarios, var, "accept empty mapping", Value::Mapping(Mapping::new()));
            reject(&mut scenarios, var, "reject string", text("a string"), ErrorKind::NotDict);
            reject(&mut scenarios, var, "reject integer", Value::from(1234), ErrorKind::NotDict);
            reject(&mut scenarios, var, "reject sequence", int_list(), ErrorKind::NotDict);
        }

        ValueKind::Enum(choices) => {
            for choice in choices {
                accept(
                    &mut scenarios,
                    var,
                    &format!("accept choice '{choice}'"),
                    text(choice),
                );
            }
            reject(
                &mut scenarios,
                var,
                "reject value outside choices",
                text(&outside_choice(choices)),
                ErrorKind::NotInEnum,
            );
            reject(&mut scenarios, var, "reject integer", Value::from(1234), ErrorKind::NotInEnum);
        }

        ValueKind::Path => {
            accept(&mut scenarios, var, "accept path string", text("path/to/dir"));
            reject(&mut scenarios, var, "reject integer", Value::from(1234), ErrorKind::NotStr);
            reject(&mut scenarios, var, "reject sequence", int_list(), ErrorKind::NotStr);
        }
    }

    scenarios
}

/// Representative well-formed elements for a sequence of the given kind.
fn element_samples(kind: &ValueKind) -> Vec<Value> {
    match kind {
        ValueKind::Bool => vec![Value::Bool(true), Value::Bool(false)],
        ValueKind::Int => vec![Value::from(1), Value::from(2), Value::from(3), Value::from(4)],
        ValueKind::Str => vec![text("a"), text("b"), text("c"), text("d")],
        ValueKind::List(inner) => vec![Value::Sequence(element_samples(inner))],
        ValueKind::Dict => vec![Value::Mapping(Mapping::new())],
        ValueKind::Enum(choices) => choices.iter().map(|c| text(c)).collect(),
        ValueKind::Path => vec![text("path/one"), text("path/two")],
    }
}

/// One value that fails the element check, and the kind it fails with.
fn wrong_element(kind: &ValueKind) -> (Value, ErrorKind) {
    match kind {
        ValueKind::Bool => (text("a string"), ErrorKind::NotBool),
        ValueKind::Int => (text("a string"), ErrorKind::NotInt),
        ValueKind::Str => (Value::from(1234), ErrorKind::NotStr),
        ValueKind::List(_) => (text("a string"), ErrorKind::NotList),
        ValueKind::Dict => (Value::from(1234), ErrorKind::NotDict),
        ValueKind::Enum(choices) => (text(&outside_choice(choices)), ErrorKind::NotInEnum),
        ValueKind::Path => (Value::from(1234), ErrorKind::NotStr),
    }
}

/// A string guaranteed not to be one of the allowed choices.
fn outside_choice(choices: &[String]) -> String {
    let mut candidate = "not-a-choice".to_string();
    while choices.iter().any(|c| c == &candidate) {
        candidate.push('!');
    }
    candidate
}

fn text(s: &str) -> Value {
    Value::String(s.to_string())
}

fn int_list() -> Value {
    Value::Sequence(vec![Value::from(1), Value::from(2), Value::from(3), Value::from(4)])
}

fn str_list() -> Value {
    Value::Sequence(vec![text("a"), text("b"), text("c"), text("d")])
}

fn push(
    scenarios: &mut Vec<TestScenario>,
    var: &ConfigVar,
    label: &str,
    input: Option<Value>,
    expected: Expected,
) {
    scenarios.push(TestScenario {
        var_name: var.name().to_string(),
        label: label.to_string(),
        input,
        expected,
    });
}

fn accept(scenarios: &mut Vec<TestScenario>, var: &ConfigVar, label: &str, input: Value) {
    let expected = Expected::Accept(input.clone());
    push(scenarios, var, label, Some(input), expected);
}

fn reject(
    scenarios: &mut Vec<TestScenario>,
    var: &ConfigVar,
    label: &str,
    input: Value,
    kind: ErrorKind,
) {
    push(scenarios, var, label, Some(input), Expected::Reject(kind));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enum_var() -> ConfigVar {
        ConfigVar::builder(
            "enum_setting",
            ValueKind::Enum(vec!["a".to_string(), "b".to_string()]),
        )
        .required()
        .build()
        .unwrap()
    }

    #[test]
    fn test_generation_is_deterministic() {
        let var = enum_var();
        assert_eq!(scenarios_for(&var), scenarios_for(&var));
    }

    #[test]
    fn test_enum_battery_covers_every_choice() {
        let scenarios = scenarios_for(&enum_var());
        let accepts = scenarios
            .iter()
            .filter(|s| matches!(s.expected, Expected::Accept(_)))
            .count();
        assert_eq!(accepts, 2);
        assert!(scenarios
            .iter()
            .any(|s| s.expected == Expected::Reject(ErrorKind::NotInEnum)));
        assert!(scenarios
            .iter()
            .any(|s| s.expected == Expected::Reject(ErrorKind::MissingRequired)));
    }

    #[test]
    fn test_optional_battery_leads_with_default() {
        let var = ConfigVar::builder("enable_tests", ValueKind::Bool)
            .default(true)
            .build()
            .unwrap();
        let scenarios = scenarios_for(&var);
        assert_eq!(scenarios[0].input, None);
        assert_eq!(scenarios[0].expected, Expected::Accept(Value::Bool(true)));
    }

    #[test]
    fn test_required_string_battery_rejects_empty() {
        let var = ConfigVar::builder("author", ValueKind::Str)
            .required()
            .build()
            .unwrap();
        let scenarios = scenarios_for(&var);
        assert!(scenarios.iter().any(|s| {
            s.input == Some(Value::String(String::new()))
                && s.expected == Expected::Reject(ErrorKind::MissingRequired)
        }));
    }

    #[test]
    fn test_list_battery_includes_malformed_element() {
        let var = ConfigVar::builder("versions", ValueKind::List(Box::new(ValueKind::Int)))
            .default(Value::Sequence(vec![]))
            .build()
            .unwrap();
        let scenarios = scenarios_for(&var);
        let malformed = scenarios
            .iter()
            .find(|s| s.label.contains("malformed element"))
            .unwrap();
        assert_eq!(malformed.expected, Expected::Reject(ErrorKind::NotInt));
    }

    #[test]
    fn test_outside_choice_avoids_collisions() {
        let choices = vec!["not-a-choice".to_string(), "not-a-choice!".to_string()];
        let outside = outside_choice(&choices);
        assert!(!choices.contains(&outside));
    }
}
