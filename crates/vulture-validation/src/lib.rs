//! # vulture-validation
//!
//! Field prioritization and validation for scanned forms. A field list is
//! split into priority and non-priority groups, the priority group is run
//! through an ordered rule pipeline, and pairs of fields can be merged into
//! derived fields.

pub mod catalog;
pub mod combiner;
pub mod error;
pub mod field;
pub mod overrides;
pub mod prioritizer;
pub mod rules;
pub mod traits;
pub mod validator;
pub mod validators;

// Re-exports for easy access
pub use catalog::{CatalogEntry, FieldCatalog};
pub use combiner::{combine, CombinedAttributes, JoinMethod};
pub use error::{CombineError, ErrorKind, ValidationError, ValidationErrors};
pub use field::{Field, FieldValue};
pub use overrides::{CustomErrorOverride, ErrorOverrides};
pub use prioritizer::{prioritize, Partition, PatternSet, PrioritizeOptions};
pub use rules::Rules;
pub use traits::{FieldRule, GroupRule, RuleOutcome, ValidationContext, DEFAULT_LENGTH_BOUNDS};
pub use validator::{validate, validate_with, Validated};

// Built-in validators
pub use validators::{
    check_email, check_phone, password_strength, ConfirmationValidator, EmailRejection,
    EmailValidator, NameLengthValidator, NameSanityValidator, PasswordStrength,
    PasswordStrengthValidator, PhoneRejection, PhoneRules, PhoneValidator, RequiredValidator,
};
