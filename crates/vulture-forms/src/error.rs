use thiserror::Error;
use vulture_validation::CombineError;

/// Structural failures of a form session. These abort the call; user input
/// problems are returned as validation errors instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Form not found: {identifier}")]
    FormNotFound { identifier: String },

    #[error("Forms not found: {}", .identifiers.join(", "))]
    FormsNotFound { identifiers: Vec<String> },

    #[error("No form connected, call connect first")]
    NotConnected,

    #[error("Form index {index} out of range ({connected} connected)")]
    FormIndexOutOfRange { index: usize, connected: usize },

    #[error("No fields found in form {form}")]
    NoFieldsFound { form: String },

    #[error("No error box for field: {field}")]
    ErrorBoxNotFound { field: String },

    #[error(transparent)]
    Combine(#[from] CombineError),
}

impl FormError {
    pub fn form_not_found(identifier: impl Into<String>) -> Self {
        Self::FormNotFound {
            identifier: identifier.into(),
        }
    }

    pub fn no_fields(form: impl Into<String>) -> Self {
        Self::NoFieldsFound { form: form.into() }
    }

    pub fn error_box_not_found(field: impl Into<String>) -> Self {
        Self::ErrorBoxNotFound { field: field.into() }
    }
}
