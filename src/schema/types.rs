//! Schema type definitions.
//!
//! Supported field categories:
//! - text: UTF-8 string
//! - number: integer or float
//! - boolean: true/false
//! - object: nested mapping, accepted as-is (members are not validated)
//! - list: array value, accepted as-is (elements are not validated)
//! - null: explicit null

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Expected value category for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    Text,
    /// Integer or float
    Number,
    /// Boolean
    Boolean,
    /// Nested mapping
    Object,
    /// Array value
    List,
    /// Explicit null
    Null,
}

impl FieldType {
    /// Returns the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Object => "object",
            FieldType::List => "list",
            FieldType::Null => "null",
        }
    }

    /// Classifies a dynamic value into its field category.
    ///
    /// Total over all JSON values; the validator matches this tag against the
    /// schema-declared category instead of relying on any intrinsic
    /// type-identity mechanism.
    pub fn of_value(value: &Value) -> FieldType {
        match value {
            Value::String(_) => FieldType::Text,
            Value::Number(_) => FieldType::Number,
            Value::Bool(_) => FieldType::Boolean,
            Value::Object(_) => FieldType::Object,
            Value::Array(_) => FieldType::List,
            Value::Null => FieldType::Null,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// A bound paired with the failure message reported when it is violated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bound<T> {
    /// The limit value
    pub limit: T,
    /// Message surfaced verbatim on violation
    pub message: String,
}

impl<T> Bound<T> {
    /// Create a bound with its violation message.
    pub fn new(limit: T, message: impl Into<String>) -> Self {
        Self {
            limit,
            message: message.into(),
        }
    }
}

/// Required-ness flag paired with the failure message reported when the
/// field is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Whether the field must be present (or satisfiable via default)
    pub required: bool,
    /// Message surfaced verbatim when a required field is missing
    pub message: String,
}

impl Requirement {
    /// Create a requirement with its violation message.
    pub fn new(required: bool, message: impl Into<String>) -> Self {
        Self {
            required,
            message: message.into(),
        }
    }
}

/// Custom predicate over a text value, paired with its failure message.
///
/// Predicates are shared across threads together with their schema, so the
/// closure must be `Send + Sync`.
#[derive(Clone)]
pub struct Predicate {
    check: Arc<dyn Fn(&str) -> bool + Send + Sync>,
    message: String,
}

impl Predicate {
    /// Create a predicate with its violation message.
    pub fn new(
        check: impl Fn(&str) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        Self {
            check: Arc::new(check),
            message: message.into(),
        }
    }

    /// Runs the predicate against a text value.
    pub fn check(&self, value: &str) -> bool {
        (self.check)(value)
    }

    /// Returns the violation message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Constraint set for one schema field.
///
/// Exactly one declared type per field. Length and predicate constraints are
/// evaluated only for text fields, numeric bounds only for number fields;
/// constraints for a mismatched type are never evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRule {
    /// Expected value category
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Present and true: the field must appear in every validated document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Requirement>,
    /// Value substituted when the field is absent from the input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Minimum text length in Unicode scalar values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<Bound<usize>>,
    /// Maximum text length in Unicode scalar values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<Bound<usize>>,
    /// Minimum numeric value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Bound<f64>>,
    /// Maximum numeric value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Bound<f64>>,
    /// Custom predicate over text values. Not serializable; a deserialized
    /// rule carries no predicate.
    #[serde(skip)]
    pub validate: Option<Predicate>,
}

impl FieldRule {
    /// Create a rule with only a declared type.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: None,
            default: None,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            validate: None,
        }
    }

    /// Create a text rule.
    pub fn text() -> Self {
        Self::new(FieldType::Text)
    }

    /// Create a number rule.
    pub fn number() -> Self {
        Self::new(FieldType::Number)
    }

    /// Create a boolean rule.
    pub fn boolean() -> Self {
        Self::new(FieldType::Boolean)
    }

    /// Create an object rule.
    pub fn object() -> Self {
        Self::new(FieldType::Object)
    }

    /// Create a list rule.
    pub fn list() -> Self {
        Self::new(FieldType::List)
    }

    /// Create a null rule.
    pub fn null() -> Self {
        Self::new(FieldType::Null)
    }

    /// Marks the field required, with the message reported when it is
    /// missing.
    pub fn with_required(mut self, message: impl Into<String>) -> Self {
        self.required = Some(Requirement::new(true, message));
        self
    }

    /// Sets the default injected when the field is absent from the input.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Sets the minimum text length bound.
    pub fn with_min_length(mut self, limit: usize, message: impl Into<String>) -> Self {
        self.min_length = Some(Bound::new(limit, message));
        self
    }

    /// Sets the maximum text length bound.
    pub fn with_max_length(mut self, limit: usize, message: impl Into<String>) -> Self {
        self.max_length = Some(Bound::new(limit, message));
        self
    }

    /// Sets the minimum numeric bound.
    pub fn with_min(mut self, limit: f64, message: impl Into<String>) -> Self {
        self.min = Some(Bound::new(limit, message));
        self
    }

    /// Sets the maximum numeric bound.
    pub fn with_max(mut self, limit: f64, message: impl Into<String>) -> Self {
        self.max = Some(Bound::new(limit, message));
        self
    }

    /// Sets a custom predicate over the text value.
    pub fn with_validate(
        mut self,
        check: impl Fn(&str) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        self.validate = Some(Predicate::new(check, message));
        self
    }

    /// Sets a ready-made predicate (see [`super::predicates`]).
    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.validate = Some(predicate);
        self
    }
}

/// Complete schema definition: field name to constraint set.
///
/// Built once and never mutated afterward; one schema may back any number of
/// concurrent validation calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Field definitions
    pub fields: HashMap<String, FieldRule>,
}

impl Schema {
    /// Create a schema from field rules.
    pub fn new(fields: HashMap<String, FieldRule>) -> Self {
        Self { fields }
    }

    /// Looks up the rule for a field name.
    pub fn field(&self, name: &str) -> Option<&FieldRule> {
        self.fields.get(name)
    }

    /// Field names in sorted order.
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fields.keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> Schema {
        let mut fields = HashMap::new();
        fields.insert(
            "name".into(),
            FieldRule::text()
                .with_min_length(5, "Less than the min length for the value")
                .with_max_length(50, "Exceeded the max length"),
        );
        fields.insert(
            "age".into(),
            FieldRule::number()
                .with_min(5.0, "Lowest possible value is 5")
                .with_max(25.0, "Highest possible value is 25"),
        );
        fields.insert("height".into(), FieldRule::number().with_default(10));
        Schema::new(fields)
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::Text.type_name(), "text");
        assert_eq!(FieldType::Number.type_name(), "number");
        assert_eq!(FieldType::Boolean.type_name(), "boolean");
        assert_eq!(FieldType::Object.type_name(), "object");
        assert_eq!(FieldType::List.type_name(), "list");
        assert_eq!(FieldType::Null.type_name(), "null");
    }

    #[test]
    fn test_classification_covers_every_category() {
        assert_eq!(FieldType::of_value(&json!("hi")), FieldType::Text);
        assert_eq!(FieldType::of_value(&json!(42)), FieldType::Number);
        assert_eq!(FieldType::of_value(&json!(1.5)), FieldType::Number);
        assert_eq!(FieldType::of_value(&json!(true)), FieldType::Boolean);
        assert_eq!(FieldType::of_value(&json!({"a": 1})), FieldType::Object);
        assert_eq!(FieldType::of_value(&json!([1, 2])), FieldType::List);
        assert_eq!(FieldType::of_value(&json!(null)), FieldType::Null);
    }

    #[test]
    fn test_rule_constructors_set_constraints() {
        let rule = FieldRule::text()
            .with_required("Please provide an email")
            .with_min_length(3, "too short");

        assert_eq!(rule.field_type, FieldType::Text);
        let requirement = rule.required.as_ref().expect("requirement set");
        assert!(requirement.required);
        assert_eq!(requirement.message, "Please provide an email");
        assert_eq!(rule.min_length.as_ref().map(|b| b.limit), Some(3));
        assert!(rule.max_length.is_none());
    }

    #[test]
    fn test_schema_field_lookup() {
        let schema = sample_schema();
        assert!(schema.field("name").is_some());
        assert!(schema.field("missing").is_none());
        assert_eq!(schema.len(), 3);
        assert!(!schema.is_empty());
    }

    #[test]
    fn test_field_names_are_sorted() {
        let schema = sample_schema();
        assert_eq!(schema.field_names(), vec!["age", "height", "name"]);
    }

    #[test]
    fn test_predicate_runs_closure() {
        let predicate = Predicate::new(|v| v.len() > 2, "too short");
        assert!(predicate.check("abc"));
        assert!(!predicate.check("ab"));
        assert_eq!(predicate.message(), "too short");
    }

    #[test]
    fn test_schema_serde_round_trip() {
        let schema = sample_schema();
        let encoded = serde_json::to_string(&schema).unwrap();
        let decoded: Schema = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.len(), schema.len());
        let age = decoded.field("age").unwrap();
        assert_eq!(age.field_type, FieldType::Number);
        assert_eq!(age.max.as_ref().map(|b| b.limit), Some(25.0));
        assert_eq!(
            decoded.field("height").unwrap().default,
            Some(json!(10))
        );
    }

    #[test]
    fn test_rule_deserializes_from_declarative_json() {
        let rule: FieldRule = serde_json::from_value(json!({
            "type": "text",
            "required": { "required": true, "message": "Provide a gender" }
        }))
        .unwrap();

        assert_eq!(rule.field_type, FieldType::Text);
        assert!(rule.required.unwrap().required);
        assert!(rule.validate.is_none());
    }
}
