//! Built-in validators

pub mod confirmation;
pub mod email;
pub mod name;
pub mod password;
pub mod phone;
pub mod required;

pub use confirmation::ConfirmationValidator;
pub use email::{check_email, EmailRejection, EmailValidator};
pub use name::{NameLengthValidator, NameSanityValidator};
pub use password::{password_score, password_strength, PasswordStrength, PasswordStrengthValidator};
pub use phone::{check_phone, PhoneRejection, PhoneRules, PhoneValidator};
pub use required::RequiredValidator;
