//! # vulture-forms
//!
//! Session facade over `vulture-validation`. A [`FormSession`] owns an
//! in-memory [`Document`], connects to one or several of its forms, and for
//! each validation call scans the form, prioritizes and validates its fields,
//! renders errors into the form's error boxes and assembles the outcome.
//!
//! ## Quick Start
//!
//! ```rust
//! use vulture_forms::{Control, Document, Form, FormSession, ValidateOptions};
//!
//! let document = Document::new().with_form(
//!     Form::with_id("signup")
//!         .control(Control::input("email", "email", "anmol@gmail.com"))
//!         .control(Control::input("firstName", "text", "Anmol")),
//! );
//!
//! let mut session = FormSession::new(document);
//! session.connect("signup").unwrap();
//! let outcome = session.validate_form(&ValidateOptions::default()).unwrap();
//! assert!(outcome.is_valid());
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod renderer;
pub mod scanner;
pub mod session;

pub use config::{CombineSpec, ValidateOptions, ValidateOptionsBuilder};
pub use dom::{Control, Document, ErrorBox, Form, Tag, ERROR_CLASS, EXCLUDED_TYPES};
pub use error::FormError;
pub use renderer::render_errors;
pub use scanner::{scan, ErrorBoxRef, ScannedForm};
pub use session::{format_fields, FormOutcome, FormSession};

// Core types re-exported for callers that only depend on this crate
pub use vulture_validation::{
    check_email, check_phone, password_strength, CombinedAttributes, CustomErrorOverride,
    ErrorKind, Field, FieldCatalog, FieldValue, JoinMethod, PasswordStrength, ValidationError,
    ValidationErrors,
};
