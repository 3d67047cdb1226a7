//! Ready-made predicates for text fields.
//!
//! Each returns a [`Predicate`] suitable for [`FieldRule::with_predicate`].
//! Schema authors remain free to supply arbitrary closures through
//! [`FieldRule::with_validate`].
//!
//! [`FieldRule::with_predicate`]: super::types::FieldRule::with_predicate
//! [`FieldRule::with_validate`]: super::types::FieldRule::with_validate

use std::sync::OnceLock;

use regex::Regex;

use super::types::Predicate;

static EMAIL: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
    })
}

/// Accepts addresses of the form `local@domain.tld`.
pub fn email() -> Predicate {
    Predicate::new(|v| email_regex().is_match(v), "Invalid email")
}

/// Rejects empty and whitespace-only text.
pub fn non_empty() -> Predicate {
    Predicate::new(|v| !v.trim().is_empty(), "Value must not be empty")
}

/// Accepts non-empty ASCII letters and digits only.
pub fn alphanumeric() -> Predicate {
    Predicate::new(
        |v| !v.is_empty() && v.chars().all(|c| c.is_ascii_alphanumeric()),
        "Value must be alphanumeric",
    )
}
