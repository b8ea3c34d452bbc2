//! # Configuration Variable Descriptors
//!
//! A [`ConfigVar`] is the per-variable contract: name, category, value
//! kind, default, required flag, optional extra validator, and the
//! description/example pair consumed by the documentation collaborator.
//!
//! Descriptors are constructed through [`ConfigVarBuilder`], which
//! validates the declaration itself. An inconsistent declaration (a
//! required variable carrying a default, an enum default outside its
//! choices) fails with `DeclarationError` when the schema is built,
//! never at load time. Once built, a descriptor is immutable for the
//! lifetime of the owning registry.

use std::sync::Arc;

use serde_yaml::Value;

use confvar_core::{check, DeclarationError, ErrorKind, LoadError, ValueKind};

/// Extra validation hook run on the coerced value.
///
/// May transform the value (e.g. lowercase it) before returning it.
/// The error string becomes the `ValidatorFailed` message.
pub type ValidatorFn = dyn Fn(Value) -> Result<Value, String> + Send + Sync;

/// A declared configuration variable.
///
/// Immutable after construction. Shared-read by the loader, the test
/// generator, and the documentation output; none of them mutate it.
#[derive(Clone)]
pub struct ConfigVar {
    name: String,
    category: String,
    kind: ValueKind,
    default: Option<Value>,
    required: bool,
    validator: Option<Arc<ValidatorFn>>,
    description: String,
    example: String,
}

impl std::fmt::Debug for ConfigVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigVar")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("kind", &self.kind)
            .field("default", &self.default)
            .field("required", &self.required)
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .finish_non_exhaustive()
    }
}

impl ConfigVar {
    /// Start declaring a variable with the given name and kind.
    ///
    /// Category defaults to `"other"`, matching the behaviour expected
    /// for uncategorised variables.
    pub fn builder(name: impl Into<String>, kind: ValueKind) -> ConfigVarBuilder {
        ConfigVarBuilder {
            name: name.into(),
            category: "other".to_string(),
            kind,
            default: None,
            required: false,
            validator: None,
            description: String::new(),
            example: String::new(),
        }
    }

    /// The variable name, unique within its schema.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The category tag this variable is grouped under.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The declared value kind.
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    /// The declared default, or `None` for required variables.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Whether a value must be supplied in the document.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Whether an extra validator is attached.
    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    /// Human-readable description, for documentation output.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Example YAML snippet, for documentation output.
    pub fn example(&self) -> &str {
        &self.example
    }

    /// Resolve this variable against the raw value from the document.
    ///
    /// - Absent and required: `MissingRequired`.
    /// - Absent and optional: the declared default.
    /// - Present: the shape check for the declared kind, then the
    ///   required-string emptiness rule, then the extra validator.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] naming this variable with the violated
    /// [`ErrorKind`]. The extra validator's error surfaces as
    /// `ValidatorFailed` with the caller-supplied message.
    pub fn resolve(&self, raw: Option<&Value>) -> Result<Value, LoadError> {
        let raw = match raw {
            None => {
                return match &self.default {
                    // The default was vetted at build time; the extra
                    // validator does not run on it.
                    Some(default) if !self.required => Ok(default.clone()),
                    _ => Err(self.missing()),
                };
            }
            Some(raw) => raw,
        };

        let coerced = check(&self.kind, raw)
            .map_err(|failure| LoadError::new(&self.name, failure.kind, failure.message))?;

        // A required string must carry actual text.
        if self.required
            && self.kind == ValueKind::Str
            && matches!(&coerced, Value::String(s) if s.is_empty())
        {
            return Err(self.missing());
        }

        match &self.validator {
            Some(validator) => validator(coerced).map_err(|message| {
                LoadError::new(&self.name, ErrorKind::ValidatorFailed, message)
            }),
            None => Ok(coerced),
        }
    }

    fn missing(&self) -> LoadError {
        LoadError::new(
            &self.name,
            ErrorKind::MissingRequired,
            format!("a value for '{}' is required", self.name),
        )
    }
}

/// Builder for [`ConfigVar`]. `build()` validates the declaration.
pub struct ConfigVarBuilder {
    name: String,
    category: String,
    kind: ValueKind,
    default: Option<Value>,
    required: bool,
    validator: Option<Arc<ValidatorFn>>,
    description: String,
    example: String,
}

impl ConfigVarBuilder {
    /// Set the category tag used for grouping and iteration order.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Declare the default returned when the document omits the variable.
    pub fn default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Mark the variable as required. Required variables cannot declare
    /// a default.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach an extra validation hook, run on the coerced value.
    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(Value) -> Result<Value, String> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Human-readable description, consumed by documentation output only.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Example YAML snippet, consumed by documentation output only.
    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    /// Validate the declaration and produce the immutable descriptor.
    ///
    /// # Errors
    ///
    /// `InvalidDeclaration` when:
    /// - the name is empty;
    /// - an `Enum` kind declares no choices;
    /// - the variable is required and declares a default;
    /// - the variable is optional and declares no default;
    /// - the declared default does not itself pass the shape check for
    ///   the declared kind (this covers an enum default outside its
    ///   choices).
    pub fn build(self) -> Result<ConfigVar, DeclarationError> {
        if self.name.is_empty() {
            return Err(DeclarationError::InvalidDeclaration {
                name: self.name,
                reason: "variable name must not be empty".to_string(),
            });
        }

        if let ValueKind::Enum(choices) = &self.kind {
            if choices.is_empty() {
                return Err(DeclarationError::InvalidDeclaration {
                    name: self.name,
                    reason: "enum variables must declare at least one choice".to_string(),
                });
            }
        }

        match (&self.default, self.required) {
            (Some(_), true) => {
                return Err(DeclarationError::InvalidDeclaration {
                    name: self.name,
                    reason: "required variables cannot declare a default".to_string(),
                });
            }
            (None, false) => {
                return Err(DeclarationError::InvalidDeclaration {
                    name: self.name,
                    reason: "optional variables must declare a default".to_string(),
                });
            }
            _ => {}
        }

        if let Some(default) = &self.default {
            if let Err(failure) = check(&self.kind, default) {
                return Err(DeclarationError::InvalidDeclaration {
                    name: self.name,
                    reason: format!("default {}", failure.message),
                });
            }
        }

        Ok(ConfigVar {
            name: self.name,
            category: self.category,
            kind: self.kind,
            default: self.default,
            required: self.required,
            validator: self.validator,
            description: self.description,
            example: self.example,
        })
    }
}
