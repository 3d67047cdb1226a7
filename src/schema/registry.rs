//! In-memory schema registry.
//!
//! Maps a model name to its registered schema. Registrations are immutable:
//! a name is bound once for the lifetime of the registry.

use std::collections::HashMap;

use tracing::debug;

use super::errors::{ValidationError, ValidationResult};
use super::types::Schema;
use super::validator::Validator;

/// Registry of named schemas.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    /// Registered schemas indexed by model name
    schemas: HashMap<String, Schema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            schemas: HashMap::new(),
        }
    }

    /// Registers a schema under a model name.
    ///
    /// # Errors
    ///
    /// Returns `SHAPE_SCHEMA_EXISTS` when the name is already bound.
    pub fn register(&mut self, name: impl Into<String>, schema: Schema) -> ValidationResult<()> {
        let name = name.into();
        if self.schemas.contains_key(&name) {
            return Err(ValidationError::schema_exists(&name));
        }

        debug!(schema = %name, fields = schema.len(), "registered schema");
        self.schemas.insert(name, schema);
        Ok(())
    }

    /// Gets a schema by model name.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Checks whether a model name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Returns a validator bound to the named schema.
    ///
    /// # Errors
    ///
    /// Returns `SHAPE_UNKNOWN_SCHEMA` when the name is not registered.
    pub fn validator(&self, name: &str) -> ValidationResult<Validator<'_>> {
        self.get(name)
            .map(Validator::new)
            .ok_or_else(|| ValidationError::unknown_schema(name))
    }

    /// Returns the number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// True when no schema is registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
