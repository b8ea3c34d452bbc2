//! # confvar-core — Foundational Types for confvar
//!
//! This crate is the bedrock of the confvar workspace. It defines the value
//! kinds a configuration variable may declare, the pure shape checks that
//! decide whether a raw YAML value conforms to a kind, and the structured
//! error taxonomy shared by every other crate. `confvar-schema` and
//! `confvar-testgen` both depend on it; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Tagged kinds, not reflection.** [`ValueKind`] is a closed enum
//!    (`Bool | Int | Str | List | Dict | Enum | Path`). Adding a kind forces
//!    every consumer to handle it through exhaustive `match`.
//!
//! 2. **Total checks.** [`check`] never panics and never uses errors for
//!    control flow: every call returns a success/failure result the caller
//!    interprets.
//!
//! 3. **Declaration errors are fatal, value errors are aggregated.**
//!    [`DeclarationError`] aborts schema construction; [`LoadError`]s are
//!    collected into a [`LoadErrors`] aggregate so a configuration author
//!    sees every problem in one pass.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `confvar-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod check;
pub mod error;
pub mod kind;

// Re-export primary types for ergonomic imports.
pub use check::{check, CheckFailure};
pub use error::{DeclarationError, ErrorKind, LoadError, LoadErrors};
pub use kind::ValueKind;
