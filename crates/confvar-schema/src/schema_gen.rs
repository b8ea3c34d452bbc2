//! # JSON Schema Export
//!
//! Emits a draft-07 JSON Schema describing the declared variables: one
//! property per variable, a `required` array, and `additionalProperties`
//! controlled by the caller's unknown-key policy. External tooling
//! (editor completion, pre-validation) can consume this document; the
//! loader itself never does.

use serde_json::json;

use crate::registry::Registry;

/// Build the JSON Schema for a frozen registry.
///
/// `allow_unknown` becomes the schema's `additionalProperties`, mirroring
/// the loader's lenient/strict unknown-key modes.
pub fn json_schema(registry: &Registry, allow_unknown: bool) -> serde_json::Value {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();

    for var in registry.iter() {
        let mut property = var.kind().json_type();
        if let Some(description) = first_paragraph(var.description()) {
            property["description"] = json!(description);
        }
        properties.insert(var.name().to_string(), property);

        if var.required() {
            required.push(json!(var.name()));
        }
    }

    json!({
        "$schema": "http://json-schema.org/draft-07/schema",
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": allow_unknown,
    })
}

/// First paragraph of a description, collapsed to a single line.
fn first_paragraph(description: &str) -> Option<String> {
    description.split("\n\n").find_map(|paragraph| {
        let line = paragraph
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if line.is_empty() {
            None
        } else {
            Some(line)
        }
    })
}
