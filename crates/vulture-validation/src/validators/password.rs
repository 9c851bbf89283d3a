//! Password strength validator

use crate::catalog::FieldCatalog;
use crate::error::ErrorKind;
use crate::field::Field;
use crate::traits::{FieldRule, RuleOutcome, ValidationContext};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Password strength tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Map a 0..=6 score to a tier
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => PasswordStrength::Weak,
            3 => PasswordStrength::Medium,
            4 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }

    /// Whether the label contains "Weak"
    pub fn is_weak(&self) -> bool {
        matches!(self, PasswordStrength::VeryWeak | PasswordStrength::Weak)
    }

    /// Advice shown to the user for this tier
    pub fn advice(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "This password is too common!",
            PasswordStrength::Weak => "Try adding numbers & symbols.",
            PasswordStrength::Medium => "Make it longer & mix characters.",
            PasswordStrength::Strong => "Good, but longer is better!",
            PasswordStrength::VeryStrong => "Great password!",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score a password: +1 for length >= 8, +1 for length >= 12, and +1 each
/// for a lowercase letter, an uppercase letter, a digit and any other
/// character.
pub fn password_score(password: &str) -> u8 {
    let len = password.chars().count();
    let mut score = 0;

    if len >= 8 {
        score += 1;
    }
    if len >= 12 {
        score += 1;
    }

    let classes = [
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    score + classes.iter().filter(|present| **present).count() as u8
}

/// Classify a password. Common passwords are "Very Weak" regardless of score.
pub fn password_strength(password: &str, catalog: &FieldCatalog) -> PasswordStrength {
    if catalog.is_common_password(password) {
        return PasswordStrength::VeryWeak;
    }
    PasswordStrength::from_score(password_score(password))
}

/// Strict mode only: rejects weak values in `password` fields
#[derive(Debug, Clone, Default)]
pub struct PasswordStrengthValidator;

impl PasswordStrengthValidator {
    pub fn new() -> Self {
        Self
    }
}

impl FieldRule for PasswordStrengthValidator {
    fn check(&self, field: &Field, ctx: &ValidationContext<'_>) -> RuleOutcome {
        if !ctx.strict || !field.is_kind("password") {
            return RuleOutcome::Pass;
        }
        let Some(value) = field.value.as_text() else {
            return RuleOutcome::Pass;
        };

        let strength = password_strength(value, ctx.catalog);
        if strength.is_weak() {
            RuleOutcome::report(ctx.error(&field.name, ErrorKind::Weak, strength.advice()))
        } else {
            RuleOutcome::Pass
        }
    }

    fn rule_name(&self) -> &'static str {
        "password_strength"
    }
}
