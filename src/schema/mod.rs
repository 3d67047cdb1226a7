//! Schema validation subsystem for docshape
//!
//! A schema is a declarative mapping from field name to constraint set;
//! the validator turns a candidate document into a sanitized copy or a
//! failure.
//!
//! # Design Principles
//!
//! - Schemas are immutable once constructed
//! - Defaults are injected before any other check
//! - Violations abort the whole validation (fail fast, no aggregation)
//! - No coercion: values are accepted or rejected, never converted
//! - Deterministic validation

mod errors;
pub mod predicates;
mod registry;
mod types;
mod validator;

pub use errors::{ValidationError, ValidationErrorCode, ValidationResult};
pub use registry::SchemaRegistry;
pub use types::{Bound, FieldRule, FieldType, Predicate, Requirement, Schema};
pub use validator::Validator;
