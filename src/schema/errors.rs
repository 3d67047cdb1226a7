//! Validation error types for the schema subsystem.
//!
//! Error codes:
//! - SHAPE_TYPE_MISMATCH
//! - SHAPE_LENGTH_OUT_OF_BOUNDS
//! - SHAPE_RANGE_OUT_OF_BOUNDS
//! - SHAPE_CUSTOM_VALIDATION_FAILED
//! - SHAPE_MISSING_REQUIRED
//! - SHAPE_UNKNOWN_SCHEMA
//! - SHAPE_SCHEMA_EXISTS
//!
//! Every violation aborts the whole validation call. Bound, predicate, and
//! required failures carry the schema author's message verbatim; type
//! mismatches carry an engine-generated message naming the field.

use std::fmt;

/// Machine-readable validation error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorCode {
    /// Document value's category disagrees with the schema-declared type
    TypeMismatch,
    /// Text value shorter than `min_length` or longer than `max_length`
    LengthOutOfBounds,
    /// Number value below `min` or above `max`
    RangeOutOfBounds,
    /// User-supplied predicate returned false
    CustomValidationFailed,
    /// Required schema field absent from the document with no usable default
    MissingRequired,
    /// Registry lookup for an unregistered schema name
    UnknownSchema,
    /// Attempt to register a schema name twice
    SchemaExists,
}

impl ValidationErrorCode {
    /// Returns the stable string code.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorCode::TypeMismatch => "SHAPE_TYPE_MISMATCH",
            ValidationErrorCode::LengthOutOfBounds => "SHAPE_LENGTH_OUT_OF_BOUNDS",
            ValidationErrorCode::RangeOutOfBounds => "SHAPE_RANGE_OUT_OF_BOUNDS",
            ValidationErrorCode::CustomValidationFailed => "SHAPE_CUSTOM_VALIDATION_FAILED",
            ValidationErrorCode::MissingRequired => "SHAPE_MISSING_REQUIRED",
            ValidationErrorCode::UnknownSchema => "SHAPE_UNKNOWN_SCHEMA",
            ValidationErrorCode::SchemaExists => "SHAPE_SCHEMA_EXISTS",
        }
    }
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Validation error with full context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Error code
    code: ValidationErrorCode,
    /// Offending field name if applicable
    field: Option<String>,
    /// Human-readable message
    message: String,
}

impl ValidationError {
    /// Create a type mismatch error.
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        let field = field.into();
        Self {
            code: ValidationErrorCode::TypeMismatch,
            message: format!(
                "Value is of invalid type for '{}': expected {}, got {}",
                field, expected, actual
            ),
            field: Some(field),
        }
    }

    /// Create a length bound violation carrying the author's message.
    pub fn length_out_of_bounds(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ValidationErrorCode::LengthOutOfBounds,
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Create a numeric bound violation carrying the author's message.
    pub fn range_out_of_bounds(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ValidationErrorCode::RangeOutOfBounds,
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Create a custom predicate failure carrying the author's message.
    pub fn custom_validation_failed(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ValidationErrorCode::CustomValidationFailed,
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Create a missing required field error carrying the author's message.
    pub fn missing_required(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ValidationErrorCode::MissingRequired,
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Create an unknown schema error.
    pub fn unknown_schema(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: ValidationErrorCode::UnknownSchema,
            message: format!("Schema '{}' is not registered", name),
            field: None,
        }
    }

    /// Create a duplicate registration error.
    pub fn schema_exists(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: ValidationErrorCode::SchemaExists,
            message: format!("Schema '{}' is already registered", name),
            field: None,
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> ValidationErrorCode {
        self.code
    }

    /// Returns the offending field name if applicable.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Result type for schema operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
