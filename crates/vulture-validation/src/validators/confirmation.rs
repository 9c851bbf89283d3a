//! Password confirmation check across fields

use crate::error::{ErrorKind, ValidationError};
use crate::field::Field;
use crate::traits::{GroupRule, ValidationContext};
use once_cell::sync::Lazy;
use regex::Regex;

static PASSWORD_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)password").expect("password pattern is a valid regex"));
static CONFIRM_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)confirm").expect("confirm pattern is a valid regex"));

/// When exactly two `password` fields form a password/confirm pair and their
/// values differ, reports a mismatch on the confirmation field.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationValidator;

impl ConfirmationValidator {
    pub fn new() -> Self {
        Self
    }

    /// Returns the confirmation field of a password/confirm pair
    fn confirmation<'f>(first: &'f Field, second: &'f Field) -> Option<&'f Field> {
        if PASSWORD_NAME.is_match(&first.name) && CONFIRM_NAME.is_match(&second.name) {
            Some(second)
        } else if PASSWORD_NAME.is_match(&second.name) && CONFIRM_NAME.is_match(&first.name) {
            Some(first)
        } else {
            None
        }
    }
}

impl GroupRule for ConfirmationValidator {
    fn check_group(&self, fields: &[Field], ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let passwords: Vec<&Field> = fields.iter().filter(|f| f.is_kind("password")).collect();
        let [first, second] = passwords.as_slice() else {
            return Vec::new();
        };

        match Self::confirmation(first, second) {
            Some(confirm) if first.value != second.value => vec![ctx.error(
                &confirm.name,
                ErrorKind::Mismatch,
                "Passwords do not match",
            )],
            _ => Vec::new(),
        }
    }

    fn rule_name(&self) -> &'static str {
        "password_confirmation"
    }
}
