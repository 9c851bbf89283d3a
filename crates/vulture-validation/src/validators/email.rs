//! Email format validator

use crate::catalog::FieldCatalog;
use crate::error::ErrorKind;
use crate::field::Field;
use crate::traits::{FieldRule, RuleOutcome, ValidationContext};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

const MIN_LEN: usize = 6;
const MAX_LEN: usize = 320;

// local-part@host, where the host ends in a label of two or more letters
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@((?:[A-Za-z0-9-]+\.)+([A-Za-z]{2,}))$")
        .expect("email pattern is a valid regex")
});

/// Why an email address was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailRejection {
    #[error("Invalid email length")]
    Length,

    #[error("Invalid email format")]
    Format,

    #[error("Temporary email addresses are not allowed")]
    Disposable,

    #[error("Temporary or custom email addresses are not allowed")]
    UnlistedProvider,

    #[error("Invalid domain extension")]
    Extension,
}

/// Check an email address.
///
/// Disposable hosts are always rejected. In strict mode the host must also be
/// a known provider. The final host label must be an accepted suffix.
pub fn check_email(email: &str, strict: bool, catalog: &FieldCatalog) -> Result<(), EmailRejection> {
    let len = email.chars().count();
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return Err(EmailRejection::Length);
    }

    let captures = EMAIL_PATTERN.captures(email).ok_or(EmailRejection::Format)?;
    let host = captures[1].to_lowercase();
    let suffix = captures[2].to_lowercase();

    if catalog.is_disposable(&host) {
        return Err(EmailRejection::Disposable);
    }
    if strict && !catalog.is_common_provider(&host) {
        return Err(EmailRejection::UnlistedProvider);
    }
    if !catalog.is_accepted_suffix(&suffix) {
        return Err(EmailRejection::Extension);
    }

    Ok(())
}

/// Validates fields of type `email`. Failures do not halt the field.
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
    pub fn new() -> Self {
        Self
    }
}

impl FieldRule for EmailValidator {
    fn check(&self, field: &Field, ctx: &ValidationContext<'_>) -> RuleOutcome {
        if !field.is_kind("email") {
            return RuleOutcome::Pass;
        }
        let Some(value) = field.value.as_text() else {
            return RuleOutcome::Pass;
        };

        match check_email(value, ctx.strict, ctx.catalog) {
            Ok(()) => RuleOutcome::Pass,
            Err(reason) => {
                RuleOutcome::report(ctx.error(&field.name, ErrorKind::NotValid, reason.to_string()))
            }
        }
    }

    fn rule_name(&self) -> &'static str {
        "email"
    }
}
