//! # confvar-schema — Declared Variables, Registry, and Loader
//!
//! The schema layer of confvar. A consumer declares each configuration
//! variable through [`ConfigVarBuilder`], registers the resulting
//! [`ConfigVar`]s into a [`RegistryBuilder`], and freezes the builder into
//! an immutable, category-grouped [`Registry`]. The [`ConfigLoader`] then
//! resolves a parsed YAML mapping against that registry, applying defaults
//! and shape checks and aggregating every violation into one failure.
//!
//! ## Declaring a schema
//!
//! ```
//! use confvar_core::ValueKind;
//! use confvar_schema::{ConfigVar, RegistryBuilder};
//!
//! let mut builder = RegistryBuilder::new();
//! builder.register(
//!     ConfigVar::builder("enable_tests", ValueKind::Bool)
//!         .category("testing")
//!         .default(true)
//!         .description("Whether to run the test suite.")
//!         .example("enable_tests: false")
//!         .build()
//!         .unwrap(),
//! ).unwrap();
//! let registry = builder.freeze();
//! assert_eq!(registry.len(), 1);
//! ```
//!
//! ## Crate Policy
//!
//! - Registration happens exactly once per schema; the frozen [`Registry`]
//!   is the only artifact consumers depend on.
//! - Declaration errors abort construction; no partial registry exists.
//! - Loading never short-circuits: every violated variable is reported.

pub mod descriptor;
pub mod docs;
pub mod loader;
pub mod registry;
pub mod schema_gen;
pub mod validators;

// Re-export primary types for ergonomic imports.
pub use descriptor::{ConfigVar, ConfigVarBuilder};
pub use docs::{doc_entries, DocEntry};
pub use loader::{ConfigLoader, DocumentError, ValidatedConfig};
pub use registry::{Registry, RegistryBuilder};
pub use schema_gen::json_schema;
