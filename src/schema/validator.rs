//! Document validator.
//!
//! Validation semantics:
//! - Defaults are injected before any other check
//! - Unknown document fields are dropped, never errors
//! - Declared type must match the classified value category exactly
//! - Text constraints run in a fixed order: min length, max length, predicate
//! - Number bounds run min, then max
//! - Required fields still absent after defaulting abort validation
//!
//! The validator never mutates the caller's document, produces no partial
//! results, and is deterministic.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::errors::{ValidationError, ValidationResult};
use super::types::{FieldRule, FieldType, Schema};
use crate::keyset;

/// Validates documents against a single schema.
///
/// The schema is borrowed, read-only state: one schema may back any number
/// of validators and concurrent validation calls.
#[derive(Debug)]
pub struct Validator<'a> {
    schema: &'a Schema,
}

impl<'a> Validator<'a> {
    /// Creates a validator bound to the given schema.
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validates a document and returns the sanitized copy.
    ///
    /// The sanitized document contains only schema-recognized fields, with
    /// declared defaults applied for absent keys. Document keys are checked
    /// in their insertion order; the first violation aborts the whole call.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if:
    /// - the document is not an object (SHAPE_TYPE_MISMATCH at `$root`)
    /// - a value's category disagrees with its declared type
    /// - a text or numeric bound, or a custom predicate, is violated
    /// - a required field is absent after default injection
    pub fn validate_document(&self, document: &Value) -> ValidationResult<Value> {
        let doc_obj = document.as_object().ok_or_else(|| {
            ValidationError::type_mismatch(
                "$root",
                FieldType::Object,
                FieldType::of_value(document),
            )
        })?;

        // Working copy: default injection must be visible to every
        // subsequent check.
        let mut working = doc_obj.clone();
        let mut sanitized = Map::new();

        let schema_keys = self.schema.field_names();
        self.inject_defaults(&schema_keys, &mut working, &mut sanitized);

        // Schema fields with no key in the post-default document.
        let mut doc_keys: Vec<String> = working.keys().cloned().collect();
        doc_keys.sort();
        let missing = keyset::diff(&schema_keys, &doc_keys).only_in_first;

        for (name, value) in &working {
            let Some(rule) = self.schema.field(name) else {
                trace!(field = %name, "dropping unknown field");
                continue;
            };
            self.check_field(name, value, rule)?;
            sanitized.insert(name.clone(), value.clone());
        }

        for name in &missing {
            if let Some(requirement) = self.schema.field(name).and_then(|r| r.required.as_ref()) {
                if requirement.required {
                    debug!(field = %name, "required field missing");
                    return Err(ValidationError::missing_required(name, &requirement.message));
                }
            }
        }

        Ok(Value::Object(sanitized))
    }

    /// Validates a document and deserializes the sanitized copy into a
    /// caller-specified target shape.
    pub fn validate_into<T: DeserializeOwned>(&self, document: &Value) -> ValidationResult<T> {
        let sanitized = self.validate_document(document)?;
        serde_json::from_value(sanitized)
            .map_err(|e| ValidationError::type_mismatch("$root", "target shape", e))
    }

    /// Writes declared defaults for keys the document does not contain.
    ///
    /// The absence test is explicit key presence: a field present with any
    /// value, including `0`, `""`, `false`, and `null`, keeps that value.
    fn inject_defaults(
        &self,
        schema_keys: &[String],
        working: &mut Map<String, Value>,
        sanitized: &mut Map<String, Value>,
    ) {
        for name in schema_keys {
            let Some(default) = self.schema.field(name).and_then(|r| r.default.as_ref()) else {
                continue;
            };
            if !working.contains_key(name) {
                debug!(field = %name, "injecting default value");
                working.insert(name.clone(), default.clone());
                sanitized.insert(name.clone(), default.clone());
            }
        }
    }

    /// Runs the type check and the applicable constraints for one field.
    fn check_field(&self, name: &str, value: &Value, rule: &FieldRule) -> ValidationResult<()> {
        let actual = FieldType::of_value(value);
        if actual != rule.field_type {
            debug!(field = %name, expected = %rule.field_type, actual = %actual, "type mismatch");
            return Err(ValidationError::type_mismatch(name, rule.field_type, actual));
        }

        match value {
            Value::String(text) => self.check_text(name, text, rule),
            Value::Number(number) => self.check_number(name, number.as_f64(), rule),
            // Boolean, object, list, and null carry no further constraints
            // beyond the type match.
            _ => Ok(()),
        }
    }

    /// Text constraints in fixed order: min length, max length, predicate.
    ///
    /// Length is measured in Unicode scalar values.
    fn check_text(&self, name: &str, text: &str, rule: &FieldRule) -> ValidationResult<()> {
        let length = text.chars().count();

        if let Some(bound) = &rule.min_length {
            if length < bound.limit {
                debug!(field = %name, length, limit = bound.limit, "below min length");
                return Err(ValidationError::length_out_of_bounds(name, &bound.message));
            }
        }

        if let Some(bound) = &rule.max_length {
            if length > bound.limit {
                debug!(field = %name, length, limit = bound.limit, "above max length");
                return Err(ValidationError::length_out_of_bounds(name, &bound.message));
            }
        }

        if let Some(predicate) = &rule.validate {
            if !predicate.check(text) {
                debug!(field = %name, "predicate rejected value");
                return Err(ValidationError::custom_validation_failed(
                    name,
                    predicate.message(),
                ));
            }
        }

        Ok(())
    }

    /// Numeric bounds in fixed order: min, then max.
    fn check_number(
        &self,
        name: &str,
        candidate: Option<f64>,
        rule: &FieldRule,
    ) -> ValidationResult<()> {
        let Some(candidate) = candidate else {
            return Ok(());
        };

        if let Some(bound) = &rule.min {
            if candidate < bound.limit {
                debug!(field = %name, candidate, limit = bound.limit, "below min");
                return Err(ValidationError::range_out_of_bounds(name, &bound.message));
            }
        }

        if let Some(bound) = &rule.max {
            if candidate > bound.limit {
                debug!(field = %name, candidate, limit = bound.limit, "above max");
                return Err(ValidationError::range_out_of_bounds(name, &bound.message));
            }
        }

        Ok(())
    }
}
