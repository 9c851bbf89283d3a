//! Phone number validator

use crate::error::ErrorKind;
use crate::field::Field;
use crate::traits::{FieldRule, RuleOutcome, ValidationContext};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const MIN_DIGITS: usize = 10;

/// Characters a phone number may carry besides digits.
///
/// Parsed from modifier names: `+`, `spaces`, `hyphens`, `dots`, or `all`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneRules {
    pub plus: bool,
    pub spaces: bool,
    pub hyphens: bool,
    pub dots: bool,
}

impl PhoneRules {
    pub fn all() -> Self {
        Self {
            plus: true,
            spaces: true,
            hyphens: true,
            dots: true,
        }
    }

    /// Parse modifier names. Unknown names are ignored.
    pub fn parse<S: AsRef<str>>(modifiers: &[S]) -> Self {
        let mut rules = Self::default();
        for modifier in modifiers {
            match modifier.as_ref() {
                "all" => return Self::all(),
                "+" => rules.plus = true,
                "spaces" => rules.spaces = true,
                "hyphens" => rules.hyphens = true,
                "dots" => rules.dots = true,
                other => debug!(modifier = other, "ignoring unknown phone rule"),
            }
        }
        rules
    }

    fn allows_separator(&self, c: char) -> bool {
        match c {
            ' ' => self.spaces,
            '-' => self.hyphens,
            '.' => self.dots,
            _ => false,
        }
    }

    /// Human-readable list of accepted symbols
    pub fn allowed_symbols(&self) -> String {
        let mut symbols = String::from("0-9");
        if self.plus {
            symbols.push_str(", +");
        }
        if self.hyphens {
            symbols.push_str(", -");
        }
        if self.spaces {
            symbols.push_str(", space");
        }
        if self.dots {
            symbols.push_str(", .");
        }
        symbols
    }
}

/// Why a phone number was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneRejection {
    #[error("At least 10 digits required")]
    TooFewDigits,

    #[error("Invalid format. Allowed: {allowed}")]
    DisallowedCharacters { allowed: String },
}

/// Check a phone number against `rules`.
///
/// Valid iff it holds at least ten digits and, after an optional leading `+`
/// (when permitted), consists only of digits and permitted separators.
pub fn check_phone(value: &str, rules: &PhoneRules) -> Result<(), PhoneRejection> {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if digits < MIN_DIGITS {
        return Err(PhoneRejection::TooFewDigits);
    }

    let body = match value.strip_prefix('+') {
        Some(rest) if rules.plus => rest,
        _ => value,
    };

    if body.chars().all(|c| c.is_ascii_digit() || rules.allows_separator(c)) {
        Ok(())
    } else {
        Err(PhoneRejection::DisallowedCharacters {
            allowed: rules.allowed_symbols(),
        })
    }
}

/// Validates fields whose name contains `phone` or `mobile`. Halts on failure.
#[derive(Debug, Clone, Default)]
pub struct PhoneValidator;

impl PhoneValidator {
    pub fn new() -> Self {
        Self
    }

    fn applies_to(field: &Field) -> bool {
        field.name.contains("phone") || field.name.contains("mobile")
    }
}

impl FieldRule for PhoneValidator {
    fn check(&self, field: &Field, ctx: &ValidationContext<'_>) -> RuleOutcome {
        let Some(value) = field.value.as_text() else {
            return RuleOutcome::Pass;
        };
        if !Self::applies_to(field) {
            return RuleOutcome::Pass;
        }

        match check_phone(value, &ctx.phone_rules) {
            Ok(()) => RuleOutcome::Pass,
            Err(reason) => {
                RuleOutcome::Halt(ctx.error(&field.name, ErrorKind::NotValid, reason.to_string()))
            }
        }
    }

    fn rule_name(&self) -> &'static str {
        "phone"
    }
}
