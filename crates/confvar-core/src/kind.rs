//! # Value Kinds
//!
//! The closed set of value shapes a configuration variable can declare.
//! A kind describes what a raw YAML value must look like; whether a value
//! is required, and what it defaults to, belongs to the descriptor in
//! `confvar-schema`.
//!
//! Kinds render themselves two ways for external collaborators: a
//! human-readable label for documentation entries, and a JSON Schema
//! type fragment for schema export.

use serde::{Deserialize, Serialize};

/// The shape a configuration value must have in the YAML document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    /// A boolean literal (`true`/`false`). No string coercion: `"yes"` is
    /// not a boolean.
    Bool,
    /// An integral number. Floats and numeric strings are rejected.
    Int,
    /// A string.
    Str,
    /// An ordered sequence whose every element conforms to the inner kind.
    List(Box<ValueKind>),
    /// A mapping with string keys. Values are unconstrained.
    Dict,
    /// A string equal to one of the allowed choices (case-sensitive).
    Enum(Vec<String>),
    /// A filesystem path, carried as a string. Shape only: on-disk
    /// existence is an optional extra validator, never part of the kind.
    Path,
}

impl ValueKind {
    /// Human-readable YAML-style label for documentation output.
    ///
    /// Mirrors how the types read in a config file reference:
    /// `Sequence of String`, `Mapping`, `'a' or 'b'`, ...
    pub fn label(&self) -> String {
        match self {
            Self::Bool => "Boolean".to_string(),
            Self::Int => "Integer".to_string(),
            Self::Str => "String".to_string(),
            Self::List(elem) => format!("Sequence of {}", elem.label()),
            Self::Dict => "Mapping".to_string(),
            Self::Enum(choices) => choices
                .iter()
                .map(|c| format!("'{c}'"))
                .collect::<Vec<_>>()
                .join(" or "),
            Self::Path => "Directory".to_string(),
        }
    }

    /// JSON Schema type fragment for this kind.
    ///
    /// Used by the schema export in `confvar-schema` to emit one property
    /// per variable.
    pub fn json_type(&self) -> serde_json::Value {
        match self {
            Self::Bool => serde_json::json!({ "type": "boolean" }),
            Self::Int => serde_json::json!({ "type": "integer" }),
            Self::Str | Self::Path => serde_json::json!({ "type": "string" }),
            Self::List(elem) => {
                serde_json::json!({ "type": "array", "items": elem.json_type() })
            }
            Self::Dict => serde_json::json!({ "type": "object" }),
            Self::Enum(choices) => serde_json::json!({ "enum": choices }),
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_labels() {
        assert_eq!(ValueKind::Bool.label(), "Boolean");
        assert_eq!(ValueKind::Int.label(), "Integer");
        assert_eq!(ValueKind::Str.label(), "String");
        assert_eq!(ValueKind::Dict.label(), "Mapping");
        assert_eq!(ValueKind::Path.label(), "Directory");
    }

    #[test]
    fn test_list_label_nests() {
        let kind = ValueKind::List(Box::new(ValueKind::Str));
        assert_eq!(kind.label(), "Sequence of String");

        let nested = ValueKind::List(Box::new(kind));
        assert_eq!(nested.label(), "Sequence of Sequence of String");
    }

    #[test]
    fn test_enum_label_lists_choices() {
        let kind = ValueKind::Enum(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(kind.label(), "'a' or 'b'");
    }

    #[test]
    fn test_json_type_fragments() {
        assert_eq!(
            ValueKind::Bool.json_type(),
            serde_json::json!({ "type": "boolean" })
        );
        assert_eq!(
            ValueKind::List(Box::new(ValueKind::Int)).json_type(),
            serde_json::json!({ "type": "array", "items": { "type": "integer" } })
        );
        assert_eq!(
            ValueKind::Enum(vec!["x".to_string()]).json_type(),
            serde_json::json!({ "enum": ["x"] })
        );
        assert_eq!(
            ValueKind::Path.json_type(),
            serde_json::json!({ "type": "string" })
        );
    }
}
