//! # Extra Validators
//!
//! Ready-made validation hooks for [`ConfigVarBuilder::validator`].
//! These run after the shape check, on the coerced value; their error
//! strings surface as `ValidatorFailed`.
//!
//! [`ConfigVarBuilder::validator`]: crate::descriptor::ConfigVarBuilder::validator

use serde_yaml::Value;

/// Require that a `Path`-kind value names an existing directory.
///
/// The shape check only establishes that the value is a string; attach
/// this hook to variables whose directory must exist at load time. The
/// filesystem is consulted synchronously, once, and a missing directory
/// is reported as a validation failure, never retried.
pub fn directory_exists(value: Value) -> Result<Value, String> {
    match &value {
        Value::String(path) if std::path::Path::new(path).is_dir() => Ok(value),
        Value::String(path) => Err(format!("directory '{path}' does not exist")),
        _ => Err("expected a directory path string".to_string()),
    }
}
