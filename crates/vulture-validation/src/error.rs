//! Validation error types and handling

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Kind of a collected validation failure.
///
/// Custom overrides replace the message of an error, never its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Empty value or unchecked checkbox
    Required,
    /// Malformed email or phone number
    NotValid,
    /// Disallowed value, e.g. a name of "null"
    NotAllowed,
    /// Password strength below "Medium"
    Weak,
    /// Value shorter than the configured minimum
    TooShort,
    /// Value longer than the configured maximum
    TooLong,
    /// Password confirmation differs from the password
    Mismatch,
}

impl ErrorKind {
    /// Stable code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::NotValid => "not_valid",
            ErrorKind::NotAllowed => "not_allowed",
            ErrorKind::Weak => "weak",
            ErrorKind::TooShort => "min",
            ErrorKind::TooLong => "max",
            ErrorKind::Mismatch => "mis_match",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Individual validation error for a specific field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
    /// What went wrong
    pub kind: ErrorKind,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind,
        }
    }

    /// Error code for programmatic handling
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered collection of validation errors.
///
/// Errors keep the order in which the validator produced them, which follows
/// the order of the input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of errors across all fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Get errors for a specific field, in production order
    pub fn field_errors<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// First error recorded for a field
    pub fn first_for(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn has_field_errors(&self, field: &str) -> bool {
        self.first_for(field).is_some()
    }

    /// Convert to a JSON-serializable format for API responses
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": "validation_failed",
                "message": "Validation failed",
                "fields": self.errors
            }
        })
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "No validation errors")
        } else {
            write!(f, "Validation failed with {} error(s):", self.errors.len())?;
            for error in &self.errors {
                write!(f, "\n  {}", error)?;
            }
            Ok(())
        }
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self { errors: vec![error] }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Structural failures of the combiner. These abort the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombineError {
    #[error("Please provide a field group and the pairs to combine")]
    MissingInput,

    #[error("Fields to combine not found: {first}, {second}")]
    FieldsNotFound { first: String, second: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_creation() {
        let error = ValidationError::new("email", "Invalid email format", ErrorKind::NotValid);
        assert_eq!(error.field, "email");
        assert_eq!(error.message, "Invalid email format");
        assert_eq!(error.code(), "not_valid");
        assert_eq!(error.to_string(), "email: Invalid email format");
    }

    #[test]
    fn test_validation_errors_keep_order() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("email", "Invalid format", ErrorKind::NotValid));
        errors.add(ValidationError::new("age", "age is required", ErrorKind::Required));
        errors.add(ValidationError::new("email", "Already exists", ErrorKind::NotAllowed));

        assert_eq!(errors.len(), 3);
        assert!(errors.has_field_errors("email"));
        assert!(!errors.has_field_errors("name"));
        assert_eq!(errors.field_errors("email").count(), 2);
        assert_eq!(errors.first_for("email").unwrap().message, "Invalid format");

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "age", "email"]);
    }

    #[test]
    fn test_errors_json_shape() {
        let errors = ValidationErrors::from(ValidationError::new(
            "password",
            "Passwords do not match",
            ErrorKind::Mismatch,
        ));
        let json = errors.to_json();
        assert_eq!(json["error"]["code"], "validation_failed");
        assert_eq!(json["error"]["fields"][0]["kind"], "mismatch");
    }

    #[test]
    fn test_combine_error_display() {
        let err = CombineError::FieldsNotFound {
            first: "first_name".into(),
            second: "last_name".into(),
        };
        assert_eq!(err.to_string(), "Fields to combine not found: first_name, last_name");
    }
}
