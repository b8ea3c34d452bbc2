//! # Configuration Loader
//!
//! Resolves a parsed YAML mapping against a frozen [`Registry`], applying
//! defaults, shape checks, and required-field enforcement.
//!
//! Loading does not short-circuit: every variable is resolved and every
//! violation is collected, then the load fails atomically with the full
//! list if anything failed. A configuration author sees all problems in
//! one pass.
//!
//! Unknown keys (present in the document, absent from the registry) are
//! warnings by default — logged via `tracing` and recorded on the result —
//! and escalate into the aggregated failure in strict mode.

use std::collections::BTreeMap;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use thiserror::Error;
use tracing::{debug, warn};

use confvar_core::{ErrorKind, LoadError, LoadErrors};

use crate::registry::Registry;

/// Error from the document-level conveniences ([`ConfigLoader::load_str`],
/// [`ConfigLoader::load_file`]).
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        /// Path to the document that failed to load.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not valid YAML.
    #[error("invalid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The document parsed, but its top level is not a mapping.
    #[error("top-level YAML value must be a mapping")]
    NotAMapping,

    /// The document parsed but did not validate.
    #[error("configuration is invalid:\n{0}")]
    Invalid(#[from] LoadErrors),
}

/// The resolved, type-checked values for one loaded document.
///
/// A value object: independent across loads, no shared mutable state, and
/// comparable field-by-field (loading the same document against the same
/// registry twice yields equal results).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    values: BTreeMap<String, Value>,
    warnings: Vec<LoadError>,
}

impl ValidatedConfig {
    /// The resolved value for a variable, if it was declared.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// All resolved values, keyed by variable name.
    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    /// Non-fatal findings (unknown keys in lenient mode).
    pub fn warnings(&self) -> &[LoadError] {
        &self.warnings
    }

    /// Number of resolved variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no variables were resolved.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Loader for YAML configuration documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigLoader {
    strict: bool,
}

impl ConfigLoader {
    /// A lenient loader: unknown keys are warnings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set strict mode: unknown keys join the aggregated failure.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Resolve a parsed YAML mapping against the registry.
    ///
    /// Iterates the registry in its stable (category, name) order,
    /// resolving each variable independently. Successes are committed
    /// only if every variable resolved; otherwise the full ordered list
    /// of violations is returned.
    ///
    /// # Errors
    ///
    /// [`LoadErrors`] aggregating every violated variable, in registry
    /// order, followed by unknown-key errors (strict mode only) in
    /// document order.
    pub fn load(&self, registry: &Registry, doc: &Mapping) -> Result<ValidatedConfig, LoadErrors> {
        debug!(
            variables = registry.len(),
            strict = self.strict,
            "resolving configuration document"
        );

        let mut values = BTreeMap::new();
        let mut errors = Vec::new();

        for var in registry.iter() {
            let key = Value::String(var.name().to_string());
            match var.resolve(doc.get(&key)) {
                Ok(value) => {
                    values.insert(var.name().to_string(), value);
                }
                Err(error) => errors.push(error),
            }
        }

        let mut warnings = Vec::new();
        for key in doc.keys() {
            let name = render_key(key);
            if !registry.contains(&name) {
                warn!(key = %name, "unknown configuration key");
                let finding = LoadError::new(
                    &name,
                    ErrorKind::UnknownKey,
                    format!("'{name}' is not a declared configuration variable"),
                );
                if self.strict {
                    errors.push(finding);
                } else {
                    warnings.push(finding);
                }
            }
        }

        if errors.is_empty() {
            Ok(ValidatedConfig { values, warnings })
        } else {
            debug!(violations = errors.len(), "configuration document rejected");
            Err(LoadErrors::new(errors))
        }
    }

    /// Parse YAML text and resolve it against the registry.
    ///
    /// An empty document is treated as an empty mapping, so a schema
    /// whose variables are all optional loads to its defaults.
    ///
    /// # Errors
    ///
    /// [`DocumentError::Parse`] for malformed YAML,
    /// [`DocumentError::NotAMapping`] when the top level is not a mapping,
    /// and [`DocumentError::Invalid`] wrapping the aggregated violations.
    pub fn load_str(
        &self,
        registry: &Registry,
        text: &str,
    ) -> Result<ValidatedConfig, DocumentError> {
        let parsed: Value = serde_yaml::from_str(text)?;
        let mapping = match parsed {
            Value::Mapping(mapping) => mapping,
            Value::Null => Mapping::new(),
            _ => return Err(DocumentError::NotAMapping),
        };
        Ok(self.load(registry, &mapping)?)
    }

    /// Read a YAML file and resolve it against the registry.
    ///
    /// # Errors
    ///
    /// [`DocumentError::Io`] when the file cannot be read, plus every
    /// error [`ConfigLoader::load_str`] can return.
    pub fn load_file(
        &self,
        registry: &Registry,
        path: &Path,
    ) -> Result<ValidatedConfig, DocumentError> {
        let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.load_str(registry, &text)
    }
}

/// Render a mapping key for an unknown-key report. String keys pass
/// through bare; anything else is rendered as flow-style YAML.
fn render_key(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => crate::docs::render_inline(other),
    }
}
