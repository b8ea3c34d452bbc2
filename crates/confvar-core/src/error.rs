//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout confvar. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Declaration errors (schema author mistakes) are fatal at construction
//!   time and never surface during loading.
//! - Value errors carry the variable name, a machine-readable [`ErrorKind`],
//!   and a human-readable message.
//! - A failed load reports *every* violated variable via [`LoadErrors`],
//!   not just the first one.

use thiserror::Error;

/// Error raised while a schema is being declared.
///
/// These are schema *author* errors. They abort registry construction
/// immediately; no partial registry is ever produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    /// The declaration is internally inconsistent (e.g., a required
    /// variable carrying a default).
    #[error("invalid declaration for '{name}': {reason}")]
    InvalidDeclaration {
        /// Name of the variable being declared.
        name: String,
        /// Why the declaration was rejected.
        reason: String,
    },

    /// Two variables with the same name were registered in one schema.
    #[error("duplicate config variable '{name}'")]
    DuplicateConfigVar {
        /// The name that was registered twice.
        name: String,
    },
}

/// Machine-readable classification of a single value error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required variable was absent (or a required string was empty).
    MissingRequired,
    /// Expected a boolean literal.
    NotBool,
    /// Expected an integral number.
    NotInt,
    /// Expected a string.
    NotStr,
    /// Expected a sequence.
    NotList,
    /// Expected a mapping.
    NotDict,
    /// The value is not one of the allowed enum choices.
    NotInEnum,
    /// The extra validator rejected the coerced value.
    ValidatorFailed,
    /// A key in the document has no declared variable.
    UnknownKey,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::MissingRequired => "MISSING_REQUIRED",
            Self::NotBool => "NOT_BOOL",
            Self::NotInt => "NOT_INT",
            Self::NotStr => "NOT_STR",
            Self::NotList => "NOT_LIST",
            Self::NotDict => "NOT_DICT",
            Self::NotInEnum => "NOT_IN_ENUM",
            Self::ValidatorFailed => "VALIDATOR_FAILED",
            Self::UnknownKey => "UNKNOWN_KEY",
        };
        f.write_str(s)
    }
}

/// One violated variable: its name, the error class, and a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{name}: [{kind}] {message}")]
pub struct LoadError {
    /// Name of the variable (or offending key, for `UnknownKey`).
    pub name: String,
    /// Machine-readable error classification.
    pub kind: ErrorKind,
    /// Human-readable description of the violation.
    pub message: String,
}

impl LoadError {
    /// Construct a load error for a named variable.
    pub fn new(name: impl Into<String>, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Ordered aggregate of every violation found in one loading pass.
///
/// Loading never short-circuits: each variable is resolved independently
/// and all failures are surfaced together, one per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadErrors {
    errors: Vec<LoadError>,
}

impl std::error::Error for LoadErrors {}

impl LoadErrors {
    /// Wrap an ordered list of violations. Callers must not pass an empty
    /// list; an empty aggregate would claim failure without a cause.
    pub fn new(errors: Vec<LoadError>) -> Self {
        debug_assert!(!errors.is_empty(), "LoadErrors must carry at least one violation");
        Self { errors }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns a slice of all violations, in registry order.
    pub fn errors(&self) -> &[LoadError] {
        &self.errors
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<LoadError> {
        self.errors
    }

    /// Whether any violation has the given kind.
    pub fn contains_kind(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }
}

impl std::fmt::Display for LoadErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {e}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display() {
        let e = LoadError::new("enum_setting", ErrorKind::NotInEnum, "got 'c', allowed 'a' or 'b'");
        assert_eq!(
            e.to_string(),
            "enum_setting: [NOT_IN_ENUM] got 'c', allowed 'a' or 'b'"
        );
    }

    #[test]
    fn test_aggregate_display_one_per_line() {
        let agg = LoadErrors::new(vec![
            LoadError::new("a", ErrorKind::MissingRequired, "a value for 'a' is required"),
            LoadError::new("b", ErrorKind::NotBool, "'b' must be a Boolean"),
        ]);
        let rendered = agg.to_string();
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains("MISSING_REQUIRED"));
        assert!(rendered.contains("NOT_BOOL"));
    }

    #[test]
    #[should_panic(expected = "at least one violation")]
    fn test_empty_aggregate_rejected() {
        let _ = LoadErrors::new(vec![]);
    }

    #[test]
    fn test_contains_kind() {
        let agg = LoadErrors::new(vec![LoadError::new("x", ErrorKind::NotInt, "nope")]);
        assert!(agg.contains_kind(ErrorKind::NotInt));
        assert!(!agg.contains_kind(ErrorKind::NotDict));
    }

    #[test]
    fn test_declaration_error_display() {
        let e = DeclarationError::InvalidDeclaration {
            name: "platforms".to_string(),
            reason: "required variables cannot declare a default".to_string(),
        };
        assert!(e.to_string().contains("platforms"));

        let d = DeclarationError::DuplicateConfigVar {
            name: "author".to_string(),
        };
        assert_eq!(d.to_string(), "duplicate config variable 'author'");
    }
}
