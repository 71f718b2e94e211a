//! Validator subsystem
//!
//! The validator is the only gate a point passes through. It compares a
//! data mapping against a space and either accepts it or returns a
//! `SchemaError` describing every mismatch.
//!
//! # Design Principles
//!
//! - Exact key set: no missing and no undeclared keys
//! - Exact kinds: no nulls, defaults or coercion
//! - Deterministic and side-effect free apart from an optional log line

mod config;
mod errors;
mod validator;

pub use config::{ValidationMode, ValidatorConfig};
pub use errors::{SchemaError, SchemaResult, Violation};
pub use validator::{json_kind_name, Validator, ROOT_PATH};
pub(crate) use validator::root_mismatch;
