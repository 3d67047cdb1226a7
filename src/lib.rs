//! docshape - A strict, deterministic document validation library
//!
//! Validates plain data records against declarative schemas: field types,
//! required-ness, defaults, bounds, and custom predicates.

pub mod keyset;
pub mod schema;
