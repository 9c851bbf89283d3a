//! Ordered rule pipeline

use crate::error::ValidationErrors;
use crate::field::Field;
use crate::traits::{FieldRule, GroupRule, RuleOutcome, ValidationContext};
use crate::validators::*;
use std::sync::Arc;

/// Per-field rules run in insertion order; group rules run afterwards.
#[derive(Clone)]
pub struct Rules {
    field_rules: Vec<Arc<dyn FieldRule>>,
    group_rules: Vec<Arc<dyn GroupRule>>,
}

impl std::fmt::Debug for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rules")
            .field("field_rules", &self.field_rule_names())
            .field("group_rules", &self.group_rules.iter().map(|r| r.rule_name()).collect::<Vec<_>>())
            .finish()
    }
}

impl Rules {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            field_rules: Vec::new(),
            group_rules: Vec::new(),
        }
    }

    /// The standard pipeline: required, phone, name sanity, email,
    /// password strength, name length, then password confirmation.
    pub fn standard() -> Self {
        Self::new()
            .field(RequiredValidator::new())
            .field(PhoneValidator::new())
            .field(NameSanityValidator::new())
            .field(EmailValidator::new())
            .field(PasswordStrengthValidator::new())
            .field(NameLengthValidator::new())
            .group(ConfirmationValidator::new())
    }

    /// Append a per-field rule
    pub fn field<R>(mut self, rule: R) -> Self
    where
        R: FieldRule + 'static,
    {
        self.field_rules.push(Arc::new(rule));
        self
    }

    /// Append a cross-field rule
    pub fn group<R>(mut self, rule: R) -> Self
    where
        R: GroupRule + 'static,
    {
        self.group_rules.push(Arc::new(rule));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.field_rules.is_empty() && self.group_rules.is_empty()
    }

    pub fn field_rule_names(&self) -> Vec<&'static str> {
        self.field_rules.iter().map(|r| r.rule_name()).collect()
    }

    /// Run the per-field rules on one field, stopping at the first halt
    pub fn check_field(&self, field: &Field, ctx: &ValidationContext<'_>) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for rule in &self.field_rules {
            match rule.check(field, ctx) {
                RuleOutcome::Pass => {}
                RuleOutcome::Report(found) => errors.extend(found),
                RuleOutcome::Halt(error) => {
                    errors.add(error);
                    break;
                }
            }
        }
        errors
    }

    /// Run every rule over `fields`
    pub fn run(&self, fields: &[Field], ctx: &ValidationContext<'_>) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for field in fields {
            errors.extend(self.check_field(field, ctx));
        }
        for rule in &self.group_rules {
            errors.extend(rule.check_group(fields, ctx));
        }
        errors
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard()
    }
}
