//! Validation errors for patient records
//!
//! A single `ValidationError` carries every field-level violation found in
//! one document, not only the first.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// One field-level constraint violation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationDetails {
    /// Field name (e.g. "age")
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value found
    pub actual: String,
}

impl ValidationDetails {
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(field, "field to be present", "missing")
    }

    /// The offending JSON value, rendered as JSON text
    pub fn invalid_value(field: impl Into<String>, expected: impl Into<String>, actual: &Value) -> Self {
        Self::new(field, expected, actual.to_string())
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// A document failed record validation
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Validation failed: {}", join_details(.details))]
pub struct ValidationError {
    details: Vec<ValidationDetails>,
}

fn join_details(details: &[ValidationDetails]) -> String {
    details
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn new(details: Vec<ValidationDetails>) -> Self {
        Self { details }
    }

    pub fn single(details: ValidationDetails) -> Self {
        Self::new(vec![details])
    }

    pub fn details(&self) -> &[ValidationDetails] {
        &self.details
    }

    /// Names of the offending fields, in the order they were checked
    pub fn fields(&self) -> Vec<&str> {
        self.details.iter().map(|d| d.field.as_str()).collect()
    }
}

/// Result type for record validation
pub type ValidationResult<T> = Result<T, ValidationError>;
