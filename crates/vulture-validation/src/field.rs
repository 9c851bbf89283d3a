//! Scanned form fields

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value carried by a scanned field.
///
/// Checkboxes carry their checked state, every other control carries text.
/// `Null` stands for a value that was never set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
    #[default]
    Null,
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Empty string or unset. A boolean is never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Null => true,
            FieldValue::Flag(_) => false,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Flag(b) => serde_json::Value::Bool(*b),
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Flag(b) => write!(f, "{}", b),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// A named form control with its current value.
///
/// `kind` is the control's type tag (`text`, `email`, `password`, `checkbox`,
/// `radio`, `date`, ...). Identity is `(name, kind)`; duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: FieldValue,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a `text` field
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, "text", FieldValue::Text(value.into()))
    }

    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.eq_ignore_ascii_case(kind)
    }
}
