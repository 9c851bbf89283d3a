//! Per-field custom error messages

use crate::error::ErrorKind;
use serde::{Deserialize, Serialize};

/// Caller-registered message overrides for one field.
///
/// Each slot replaces the default message for one error kind. Name sanity
/// errors have no slot and always use the fixed message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomErrorOverride {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_valid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weak: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mis_match: Option<String>,
}

impl CustomErrorOverride {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Default::default()
        }
    }

    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = Some(message.into());
        self
    }

    pub fn not_valid(mut self, message: impl Into<String>) -> Self {
        self.not_valid = Some(message.into());
        self
    }

    pub fn weak(mut self, message: impl Into<String>) -> Self {
        self.weak = Some(message.into());
        self
    }

    pub fn min(mut self, message: impl Into<String>) -> Self {
        self.min = Some(message.into());
        self
    }

    pub fn max(mut self, message: impl Into<String>) -> Self {
        self.max = Some(message.into());
        self
    }

    pub fn mis_match(mut self, message: impl Into<String>) -> Self {
        self.mis_match = Some(message.into());
        self
    }

    /// Override text for an error kind, if one is set
    pub fn message_for(&self, kind: ErrorKind) -> Option<&str> {
        let slot = match kind {
            ErrorKind::Required => &self.required,
            ErrorKind::NotValid => &self.not_valid,
            ErrorKind::Weak => &self.weak,
            ErrorKind::TooShort => &self.min,
            ErrorKind::TooLong => &self.max,
            ErrorKind::Mismatch => &self.mis_match,
            ErrorKind::NotAllowed => return None,
        };
        slot.as_deref().filter(|m| !m.is_empty())
    }
}

/// Append-only store of overrides, owned by a session and read on every
/// validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorOverrides {
    entries: Vec<CustomErrorOverride>,
}

impl ErrorOverrides {
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn register(&mut self, overrides: impl IntoIterator<Item = CustomErrorOverride>) {
        self.entries.extend(overrides);
    }

    /// First override registered for `field`
    pub fn for_field(&self, field: &str) -> Option<&CustomErrorOverride> {
        self.entries.iter().find(|o| o.field == field)
    }

    /// Resolve the message for `field`/`kind`, falling back to `default`
    pub fn resolve(&self, field: &str, kind: ErrorKind, default: impl Into<String>) -> String {
        self.for_field(field)
            .and_then(|o| o.message_for(kind))
            .map(str::to_string)
            .unwrap_or_else(|| default.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[CustomErrorOverride] {
        &self.entries
    }
}

impl From<Vec<CustomErrorOverride>> for ErrorOverrides {
    fn from(entries: Vec<CustomErrorOverride>) -> Self {
        Self { entries }
    }
}
