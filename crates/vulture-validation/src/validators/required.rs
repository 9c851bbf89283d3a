//! Required field validator

use crate::error::ErrorKind;
use crate::field::{Field, FieldValue};
use crate::traits::{FieldRule, RuleOutcome, ValidationContext};

/// Rejects empty values and unchecked checkboxes. Halts the field on failure.
#[derive(Debug, Clone, Default)]
pub struct RequiredValidator;

impl RequiredValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check if a field counts as missing
    fn is_missing(&self, field: &Field) -> bool {
        if field.value.is_blank() {
            return true;
        }
        field.is_kind("checkbox") && field.value == FieldValue::Flag(false)
    }
}

impl FieldRule for RequiredValidator {
    fn check(&self, field: &Field, ctx: &ValidationContext<'_>) -> RuleOutcome {
        if self.is_missing(field) {
            let default = format!("{} is required", field.name);
            RuleOutcome::Halt(ctx.error(&field.name, ErrorKind::Required, default))
        } else {
            RuleOutcome::Pass
        }
    }

    fn rule_name(&self) -> &'static str {
        "required"
    }
}
