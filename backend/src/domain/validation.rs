//! Declarative field validation.
//!
//! Each entity declares a constraint table (field name → constraint
//! descriptors) over its current values; [`evaluate`] runs the table and
//! reports every violated constraint at once, so callers get the full list of
//! problems rather than the first.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::json;

use crate::domain::error::{DomainError, DomainResult};

/// Declarative constraint attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Character count must fall within `min..=max`.
    Length { min: usize, max: usize },
    /// Integer value must fall within `min..=max`.
    Range { min: i64, max: i64 },
    /// Payload must not be empty.
    NotEmpty,
    /// Value must look like an email address.
    Email,
}

/// A field's current value, viewed for validation.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    /// Text field.
    Text(&'a str),
    /// Integer field.
    Integer(i64),
    /// Binary field.
    Bytes(&'a [u8]),
}

/// One row of an entity's constraint table.
#[derive(Debug, Clone)]
pub struct FieldSpec<'a> {
    /// API-facing field name (camelCase, as serialized).
    pub field: &'static str,
    /// The value under validation.
    pub value: FieldValue<'a>,
    /// Constraints evaluated against the value.
    pub constraints: &'static [Constraint],
}

impl<'a> FieldSpec<'a> {
    /// Table row for a text field.
    pub fn text(field: &'static str, value: &'a str, constraints: &'static [Constraint]) -> Self {
        Self {
            field,
            value: FieldValue::Text(value),
            constraints,
        }
    }

    /// Table row for an integer field.
    pub fn integer(field: &'static str, value: i64, constraints: &'static [Constraint]) -> Self {
        Self {
            field,
            value: FieldValue::Integer(value),
            constraints,
        }
    }

    /// Table row for a binary field.
    pub fn bytes(field: &'static str, value: &'a [u8], constraints: &'static [Constraint]) -> Self {
        Self {
            field,
            value: FieldValue::Bytes(value),
            constraints,
        }
    }
}

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Field the constraint is attached to.
    pub field: &'static str,
    /// Human-readable description of the violation.
    pub message: String,
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Shape check only; deliverability is not this layer's concern.
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn check_constraint(value: &FieldValue<'_>, constraint: &Constraint) -> Option<String> {
    match (constraint, value) {
        (Constraint::Length { min, max }, FieldValue::Text(text)) => {
            let length = text.chars().count();
            if length < *min {
                Some(format!("too short, minimum length is {min} characters"))
            } else if length > *max {
                Some(format!("too long, maximum length is {max} characters"))
            } else {
                None
            }
        }
        (Constraint::Range { min, max }, FieldValue::Integer(actual)) => {
            if actual < min || actual > max {
                Some(format!("must be between {min} and {max}"))
            } else {
                None
            }
        }
        (Constraint::NotEmpty, FieldValue::Text(text)) => {
            text.is_empty().then(|| "must not be empty".to_owned())
        }
        (Constraint::NotEmpty, FieldValue::Bytes(bytes)) => {
            bytes.is_empty().then(|| "must not be empty".to_owned())
        }
        (Constraint::Email, FieldValue::Text(text)) => (!email_regex().is_match(text))
            .then(|| "must be a valid email address".to_owned()),
        // Mismatched constraint/value pairs in a table are authoring errors;
        // report them instead of passing silently.
        _ => Some("constraint does not apply to this field type".to_owned()),
    }
}

/// Run a constraint table and collect every violation.
pub fn check(specs: &[FieldSpec<'_>]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for spec in specs {
        for constraint in spec.constraints {
            if let Some(message) = check_constraint(&spec.value, constraint) {
                violations.push(Violation {
                    field: spec.field,
                    message,
                });
            }
        }
    }
    violations
}

/// Run a constraint table, failing with the full violation list.
pub fn evaluate(specs: &[FieldSpec<'_>]) -> DomainResult<()> {
    let violations = check(specs);
    if violations.is_empty() {
        return Ok(());
    }
    Err(
        DomainError::invalid_request("Validation failed on the provided request")
            .with_details(json!({ "violations": violations })),
    )
}
