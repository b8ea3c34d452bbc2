//! # Documentation Output
//!
//! The exact contract the external documentation directive consumes: one
//! [`DocEntry`] per declared variable, grouped and ordered by category.
//! Rendering (reStructuredText, HTML, ...) is the collaborator's job;
//! this module only assembles the metadata.

use serde_yaml::Value;

use crate::descriptor::ConfigVar;
use crate::registry::Registry;

/// Documentation metadata for one configuration variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEntry {
    /// Variable name.
    pub name: String,
    /// Category the entry is grouped under.
    pub category: String,
    /// Human-readable type label (e.g. `Sequence of String`).
    pub type_label: String,
    /// Whether the variable is required.
    pub required: bool,
    /// Rendering of the default, or `None` for required variables.
    pub default_repr: Option<String>,
    /// Description supplied at declaration time.
    pub description: String,
    /// Example YAML snippet supplied at declaration time.
    pub example: String,
}

impl DocEntry {
    fn from_var(var: &ConfigVar) -> Self {
        Self {
            name: var.name().to_string(),
            category: var.category().to_string(),
            type_label: var.kind().label(),
            required: var.required(),
            default_repr: var.default().map(render_default),
            description: var.description().to_string(),
            example: var.example().to_string(),
        }
    }
}

/// Produce one entry per declared variable, in registry order
/// (categories in first-seen order, insertion order within each).
pub fn doc_entries(registry: &Registry) -> Vec<DocEntry> {
    registry.iter().map(DocEntry::from_var).collect()
}

/// Render a default value the way it should read in documentation.
fn render_default(value: &Value) -> String {
    match value {
        Value::Sequence(items) if items.is_empty() => "[ ]".to_string(),
        Value::Mapping(map) if map.is_empty() => "{ }".to_string(),
        Value::String(s) if s.is_empty() => "<blank>".to_string(),
        other => render_inline(other),
    }
}

/// Flow-style, single-line YAML rendering. Also used by the loader to
/// name non-string document keys in unknown-key reports.
pub(crate) fn render_inline(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{s}'"),
        Value::Sequence(items) => {
            let inner: Vec<String> = items.iter().map(render_inline).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Mapping(map) => {
            let inner: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", render_inline(k), render_inline(v)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
        Value::Tagged(tagged) => render_inline(&tagged.value),
    }
}
