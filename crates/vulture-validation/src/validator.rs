//! Validation entry point

use crate::error::ValidationErrors;
use crate::field::Field;
use crate::rules::Rules;
use crate::traits::ValidationContext;
use once_cell::sync::Lazy;
use tracing::debug;

static STANDARD_RULES: Lazy<Rules> = Lazy::new(Rules::standard);

/// Fields handed back together with the errors found in them
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    pub fields: Vec<Field>,
    pub errors: ValidationErrors,
}

impl Validated {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate `fields` with the standard rule pipeline.
///
/// Errors follow input order; the cross-field confirmation check runs last.
/// The call is pure: the same input and context always produce the same
/// errors.
pub fn validate(fields: Vec<Field>, ctx: &ValidationContext<'_>) -> Validated {
    validate_with(&STANDARD_RULES, fields, ctx)
}

/// Validate `fields` with a caller-supplied pipeline
pub fn validate_with(rules: &Rules, fields: Vec<Field>, ctx: &ValidationContext<'_>) -> Validated {
    let errors = rules.run(&fields, ctx);
    debug!(
        fields = fields.len(),
        errors = errors.len(),
        strict = ctx.strict,
        "validated fields"
    );
    Validated { fields, errors }
}
