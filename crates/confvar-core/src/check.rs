//! # Shape Checks
//!
//! Pure predicate/coercion functions deciding whether a raw YAML value
//! conforms to a [`ValueKind`]. One total function per kind: no panics,
//! no exceptions for control flow — every call returns a result the
//! caller interprets.
//!
//! Checks are shape-only. Required/default handling belongs to the
//! descriptor, and on-disk existence for `Path` values belongs to an
//! optional extra validator.

use serde_yaml::Value;

use crate::error::ErrorKind;
use crate::kind::ValueKind;

/// A failed shape check: the error class plus a message fragment.
///
/// The message does not name the variable; the descriptor owning the
/// check prepends its own name when it builds a `LoadError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    /// Machine-readable error classification.
    pub kind: ErrorKind,
    /// Human-readable description of what was expected and what arrived.
    pub message: String,
}

impl CheckFailure {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Check a raw YAML value against a kind, returning the accepted value.
///
/// Accepted values pass through unchanged (list order preserved, mapping
/// keys untouched); the only transformation performed is structural
/// recursion into sequences.
///
/// # Errors
///
/// Returns a [`CheckFailure`] classifying the mismatch: `NotBool`,
/// `NotInt`, `NotStr`, `NotList`, `NotDict`, or `NotInEnum`. For
/// sequences, an element-level failure is surfaced with the element's
/// index in the message.
pub fn check(kind: &ValueKind, raw: &Value) -> Result<Value, CheckFailure> {
    match kind {
        ValueKind::Bool => match raw {
            Value::Bool(_) => Ok(raw.clone()),
            other => Err(CheckFailure::new(
                ErrorKind::NotBool,
                format!("must be a Boolean, got {}", describe(other)),
            )),
        },

        ValueKind::Int => match raw {
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(raw.clone()),
            other => Err(CheckFailure::new(
                ErrorKind::NotInt,
                format!("must be an Integer, got {}", describe(other)),
            )),
        },

        ValueKind::Str => match raw {
            Value::String(_) => Ok(raw.clone()),
            other => Err(CheckFailure::new(
                ErrorKind::NotStr,
                format!("must be a String, got {}", describe(other)),
            )),
        },

        ValueKind::List(elem) => match raw {
            Value::Sequence(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    match check(elem, item) {
                        Ok(value) => out.push(value),
                        Err(failure) => {
                            return Err(CheckFailure::new(
                                failure.kind,
                                format!("element {index}: {}", failure.message),
                            ));
                        }
                    }
                }
                Ok(Value::Sequence(out))
            }
            other => Err(CheckFailure::new(
                ErrorKind::NotList,
                format!(
                    "must be a Sequence of {}, got {}",
                    elem.label(),
                    describe(other)
                ),
            )),
        },

        ValueKind::Dict => match raw {
            Value::Mapping(_) => Ok(raw.clone()),
            other => Err(CheckFailure::new(
                ErrorKind::NotDict,
                format!("must be a Mapping, got {}", describe(other)),
            )),
        },

        ValueKind::Enum(choices) => match raw {
            Value::String(s) if choices.iter().any(|c| c == s) => Ok(raw.clone()),
            Value::String(s) => Err(CheckFailure::new(
                ErrorKind::NotInEnum,
                format!("got '{s}', allowed {}", kind.label()),
            )),
            other => Err(CheckFailure::new(
                ErrorKind::NotInEnum,
                format!("got {}, allowed {}", describe(other), kind.label()),
            )),
        },

        ValueKind::Path => match raw {
            Value::String(_) => Ok(raw.clone()),
            other => Err(CheckFailure::new(
                ErrorKind::NotStr,
                format!("must be a Directory path, got {}", describe(other)),
            )),
        },
    }
}

/// Short description of a YAML value's shape, for error messages.
fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "an integer",
        Value::Number(_) => "a float",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_bool_accepts_literals_only() {
        assert_eq!(check(&ValueKind::Bool, &yaml("true")).unwrap(), Value::Bool(true));
        assert_eq!(check(&ValueKind::Bool, &yaml("false")).unwrap(), Value::Bool(false));

        // No string coercion: "yes"/"no"/"True" are strings in YAML 1.2.
        for text in ["\"yes\"", "\"no\"", "\"True\"", "1", "0", "[true]"] {
            let err = check(&ValueKind::Bool, &yaml(text)).unwrap_err();
            assert_eq!(err.kind, ErrorKind::NotBool, "input: {text}");
        }
    }

    #[test]
    fn test_int_rejects_floats_and_strings() {
        assert_eq!(check(&ValueKind::Int, &yaml("42")).unwrap(), yaml("42"));
        assert_eq!(check(&ValueKind::Int, &yaml("-7")).unwrap(), yaml("-7"));

        assert_eq!(
            check(&ValueKind::Int, &yaml("3.5")).unwrap_err().kind,
            ErrorKind::NotInt
        );
        assert_eq!(
            check(&ValueKind::Int, &yaml("\"42\"")).unwrap_err().kind,
            ErrorKind::NotInt
        );
        assert_eq!(
            check(&ValueKind::Int, &yaml("true")).unwrap_err().kind,
            ErrorKind::NotInt
        );
    }

    #[test]
    fn test_str_shape() {
        assert_eq!(
            check(&ValueKind::Str, &yaml("\"hello\"")).unwrap(),
            Value::String("hello".to_string())
        );
        // Emptiness is a descriptor concern, not a shape concern.
        assert!(check(&ValueKind::Str, &yaml("\"\"")).is_ok());

        assert_eq!(
            check(&ValueKind::Str, &yaml("1234")).unwrap_err().kind,
            ErrorKind::NotStr
        );
    }

    #[test]
    fn test_list_preserves_order() {
        let kind = ValueKind::List(Box::new(ValueKind::Str));
        let input = yaml("[Windows, macOS, Linux]");
        assert_eq!(check(&kind, &input).unwrap(), input);

        assert_eq!(check(&kind, &yaml("[]")).unwrap(), Value::Sequence(vec![]));
    }

    #[test]
    fn test_list_rejects_non_sequence() {
        let kind = ValueKind::List(Box::new(ValueKind::Str));
        // A string is not a sequence of strings.
        let err = check(&kind, &yaml("\"Windows\"")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotList);
        assert!(err.message.contains("Sequence of String"));
    }

    #[test]
    fn test_list_element_error_names_index() {
        let kind = ValueKind::List(Box::new(ValueKind::Int));
        let err = check(&kind, &yaml("[1, 2, \"three\", 4]")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotInt);
        assert!(err.message.contains("element 2"), "message: {}", err.message);
    }

    #[test]
    fn test_nested_list_element_error() {
        let kind = ValueKind::List(Box::new(ValueKind::List(Box::new(ValueKind::Int))));
        let err = check(&kind, &yaml("[[1], [2, \"x\"]]")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotInt);
        assert!(err.message.contains("element 1: element 1:"));
    }

    #[test]
    fn test_dict_shape() {
        assert!(check(&ValueKind::Dict, &yaml("{a: 1, b: 2}")).is_ok());
        assert!(check(&ValueKind::Dict, &yaml("{}")).is_ok());

        assert_eq!(
            check(&ValueKind::Dict, &yaml("[a, b]")).unwrap_err().kind,
            ErrorKind::NotDict
        );
        assert_eq!(
            check(&ValueKind::Dict, &yaml("\"a\"")).unwrap_err().kind,
            ErrorKind::NotDict
        );
    }

    #[test]
    fn test_enum_case_sensitive_membership() {
        let kind = ValueKind::Enum(vec!["a".to_string(), "b".to_string()]);
        assert!(check(&kind, &yaml("\"a\"")).is_ok());
        assert!(check(&kind, &yaml("\"b\"")).is_ok());

        let err = check(&kind, &yaml("\"A\"")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotInEnum);
        assert!(err.message.contains("'A'"));
        assert!(err.message.contains("'a' or 'b'"));

        // Wrong type is still an enum-membership failure.
        assert_eq!(
            check(&kind, &yaml("1234")).unwrap_err().kind,
            ErrorKind::NotInEnum
        );
    }

    #[test]
    fn test_path_is_shape_only() {
        // No filesystem access here: a non-existent path is still a valid shape.
        assert!(check(&ValueKind::Path, &yaml("\"/no/such/dir\"")).is_ok());
        assert_eq!(
            check(&ValueKind::Path, &yaml("[1, 2]")).unwrap_err().kind,
            ErrorKind::NotStr
        );
    }
}
