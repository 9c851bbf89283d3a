//! Name field validators

use crate::error::ErrorKind;
use crate::field::Field;
use crate::traits::{FieldRule, RuleOutcome, ValidationContext};
use crate::ValidationError;

const PLACEHOLDER_NAMES: &[&str] = &["null", "undefined", "none"];

/// Rejects placeholder values such as "null" in fields whose name contains
/// `name`. The message is fixed and cannot be overridden.
#[derive(Debug, Clone, Default)]
pub struct NameSanityValidator;

impl NameSanityValidator {
    pub fn new() -> Self {
        Self
    }
}

impl FieldRule for NameSanityValidator {
    fn check(&self, field: &Field, _ctx: &ValidationContext<'_>) -> RuleOutcome {
        let Some(value) = field.value.as_text() else {
            return RuleOutcome::Pass;
        };
        if !field.name.contains("name") {
            return RuleOutcome::Pass;
        }

        let lowered = value.to_lowercase();
        if PLACEHOLDER_NAMES.contains(&lowered.as_str()) {
            RuleOutcome::Halt(ValidationError::new(
                &field.name,
                "This name is not allowed.",
                ErrorKind::NotAllowed,
            ))
        } else {
            RuleOutcome::Pass
        }
    }

    fn rule_name(&self) -> &'static str {
        "name_sanity"
    }
}

/// Strict mode only: trimmed length of name fields must lie within the
/// context's bounds. Below-min and above-max are reported independently.
#[derive(Debug, Clone, Default)]
pub struct NameLengthValidator;

impl NameLengthValidator {
    pub fn new() -> Self {
        Self
    }
}

impl FieldRule for NameLengthValidator {
    fn check(&self, field: &Field, ctx: &ValidationContext<'_>) -> RuleOutcome {
        if !ctx.strict || !field.name.to_lowercase().contains("name") {
            return RuleOutcome::Pass;
        }
        let Some(value) = field.value.as_text() else {
            return RuleOutcome::Pass;
        };

        let (min, max) = ctx.length_bounds;
        let len = value.trim().chars().count();
        let mut errors = Vec::new();

        if len < min {
            let default = format!("{} must be at least {} characters", field.name, min);
            errors.push(ctx.error(&field.name, ErrorKind::TooShort, default));
        }
        if len > max {
            let default = format!("{} must not be greater than {} characters", field.name, max);
            errors.push(ctx.error(&field.name, ErrorKind::TooLong, default));
        }

        if errors.is_empty() {
            RuleOutcome::Pass
        } else {
            RuleOutcome::Report(errors)
        }
    }

    fn rule_name(&self) -> &'static str {
        "name_length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FieldCatalog;

    #[test]
    fn test_placeholder_names_rejected() {
        let ctx = ValidationContext::new(FieldCatalog::builtin());
        for value in ["null", "Undefined", "NONE"] {
            let outcome = NameSanityValidator::new().check(&Field::text("first_name", value), &ctx);
            assert!(matches!(outcome, RuleOutcome::Halt(ref e) if e.kind == ErrorKind::NotAllowed));
        }
        assert_eq!(
            NameSanityValidator::new().check(&Field::text("first_name", "Nonet"), &ctx),
            RuleOutcome::Pass
        );
        assert_eq!(
            NameSanityValidator::new().check(&Field::text("city", "null"), &ctx),
            RuleOutcome::Pass
        );
    }

    #[test]
    fn test_length_only_in_strict_mode() {
        let ctx = ValidationContext::new(FieldCatalog::builtin());
        assert_eq!(
            NameLengthValidator::new().check(&Field::text("name", "A"), &ctx),
            RuleOutcome::Pass
        );
    }

    #[test]
    fn test_length_uses_trimmed_value() {
        let ctx = ValidationContext::new(FieldCatalog::builtin()).strict(true);
        match NameLengthValidator::new().check(&Field::text("lastName", "  A  "), &ctx) {
            RuleOutcome::Report(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].kind, ErrorKind::TooShort);
                assert_eq!(errors[0].message, "lastName must be at least 2 characters");
            }
            other => panic!("expected report, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_bounds_report_both() {
        let ctx = ValidationContext::new(FieldCatalog::builtin())
            .strict(true)
            .length_bounds(10, 3);
        match NameLengthValidator::new().check(&Field::text("name", "Alice"), &ctx) {
            RuleOutcome::Report(errors) => {
                let kinds: Vec<ErrorKind> = errors.iter().map(|e| e.kind).collect();
                assert_eq!(kinds, vec![ErrorKind::TooShort, ErrorKind::TooLong]);
            }
            other => panic!("expected report, got {:?}", other),
        }
    }
}
