//! Core validation traits

use crate::catalog::FieldCatalog;
use crate::error::{ErrorKind, ValidationError};
use crate::field::Field;
use crate::overrides::ErrorOverrides;
use crate::validators::phone::PhoneRules;

static NO_OVERRIDES: ErrorOverrides = ErrorOverrides::new();

/// Default `(min, max)` bounds for name length checks
pub const DEFAULT_LENGTH_BOUNDS: (usize, usize) = (2, 50);

/// Everything a rule may consult while checking a field
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub catalog: &'a FieldCatalog,
    pub strict: bool,
    /// `(min, max)` trimmed length for name fields in strict mode
    pub length_bounds: (usize, usize),
    pub phone_rules: PhoneRules,
    pub overrides: &'a ErrorOverrides,
}

impl<'a> ValidationContext<'a> {
    pub fn new(catalog: &'a FieldCatalog) -> Self {
        Self {
            catalog,
            strict: false,
            length_bounds: DEFAULT_LENGTH_BOUNDS,
            phone_rules: PhoneRules::default(),
            overrides: &NO_OVERRIDES,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn length_bounds(mut self, min: usize, max: usize) -> Self {
        self.length_bounds = (min, max);
        self
    }

    pub fn phone_rules(mut self, rules: PhoneRules) -> Self {
        self.phone_rules = rules;
        self
    }

    pub fn overrides(mut self, overrides: &'a ErrorOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Build an error for `field`, applying any registered override
    pub fn error(&self, field: &str, kind: ErrorKind, default: impl Into<String>) -> ValidationError {
        let message = self.overrides.resolve(field, kind, default);
        ValidationError::new(field, message, kind)
    }
}

/// Result of one per-field rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Pass,
    /// Independent errors; later rules still run
    Report(Vec<ValidationError>),
    /// Blocking error; no further rule runs for this field
    Halt(ValidationError),
}

impl RuleOutcome {
    pub fn report(error: ValidationError) -> Self {
        RuleOutcome::Report(vec![error])
    }
}

/// A check applied to one field at a time
pub trait FieldRule: Send + Sync {
    fn check(&self, field: &Field, ctx: &ValidationContext<'_>) -> RuleOutcome;

    /// Get the validation rule name
    fn rule_name(&self) -> &'static str;
}

/// A check over the whole field list, run after the per-field pass
pub trait GroupRule: Send + Sync {
    fn check_group(&self, fields: &[Field], ctx: &ValidationContext<'_>) -> Vec<ValidationError>;

    fn rule_name(&self) -> &'static str;
}
