//! Session-level checks: scan, validate, render and assemble outcomes

use vulture_forms::{
    format_fields, CombineSpec, CombinedAttributes, Control, CustomErrorOverride, Document, ErrorBox,
    ErrorKind, FieldValue, Form, FormError, FormOutcome, FormSession, JoinMethod, ValidateOptions,
    ValidateOptionsBuilder,
};
use vulture_validation::CombineError;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn signup_form() -> Form {
    Form::with_id("signup")
        .control(Control::input("first_name", "text", "Anmol"))
        .control(Control::input("email", "email", ""))
        .control(Control::input("phone", "tel", "12345"))
        .control(Control::input("password", "password", "abc"))
        .control(Control::input("confirmPassword", "password", "xyz"))
        .control(Control::input("tags", "text", "rust"))
        .control(Control::input("submit", "submit", "Sign up"))
        .error_box(ErrorBox {
            id: "first_name".into(),
            classes: vec!["error".into()],
            content: "old".into(),
        })
        .error_box(ErrorBox::new("email"))
        .error_box(ErrorBox::bare("phone"))
        .error_box(ErrorBox::new("confirmPassword"))
}

fn profile_form() -> Form {
    Form::with_id("profile")
        .control(Control::input("first_name", "text", "Anmol"))
        .control(Control::input("last_name", "text", "Shrivastav"))
        .control(Control::input("email", "email", "anmol.dev@gmail.com"))
        .control(Control::textarea("bio", "Rustacean"))
        .control(Control::input("tags", "text", "rust,forms"))
        .control(Control::input("website", "url", "https://example.com"))
}

fn session() -> FormSession {
    FormSession::new(
        Document::new()
            .with_form(signup_form())
            .with_form(profile_form())
            .with_form(
                Form::with_id("extras")
                    .control(Control::input("tags", "text", "a"))
                    .control(Control::checkbox("newsletter", true)),
            )
            .with_form(Form::with_id("empty").control(Control::input("go", "submit", "Go"))),
    )
}

fn box_content<'a>(session: &'a FormSession, id: &str) -> &'a str {
    &session
        .connected_form()
        .and_then(|f| f.find_error_box(id))
        .expect("error box exists")
        .content
}

#[test]
fn test_errors_are_returned_and_rendered() {
    init_tracing();
    let mut session = session();
    session.connect("signup").unwrap();

    let outcome = session.validate_form(&ValidateOptions::default()).unwrap();
    let errors = outcome.errors().expect("form is invalid");

    let summary: Vec<(&str, ErrorKind)> = errors.iter().map(|e| (e.field.as_str(), e.kind)).collect();
    assert_eq!(
        summary,
        vec![
            ("email", ErrorKind::Required),
            ("phone", ErrorKind::NotValid),
            ("confirmPassword", ErrorKind::Mismatch),
        ]
    );

    assert_eq!(box_content(&session, "email"), "email is required");
    assert_eq!(box_content(&session, "phone"), "At least 10 digits required");
    assert_eq!(box_content(&session, "confirmPassword"), "Passwords do not match");
    assert_eq!(box_content(&session, "first_name"), "");

    let phone_box = session.connected_form().unwrap().find_error_box("phone").unwrap();
    assert!(phone_box.has_class("error"));
}

#[test]
fn test_rendering_can_be_disabled() {
    let mut session = session();
    session.connect("signup").unwrap();

    let options = ValidateOptionsBuilder::headless_strict().build().expect("Failed to build options");
    let outcome = session.validate_form(&options).unwrap();

    assert!(!outcome.is_valid());
    assert_eq!(box_content(&session, "first_name"), "old");
    assert_eq!(box_content(&session, "email"), "");
}

#[test]
fn test_registered_overrides_change_messages_only() {
    let mut session = session();
    session.connect("signup").unwrap();
    session.register_error_overrides(vec![
        CustomErrorOverride::new("email").required("Tell us your email"),
        CustomErrorOverride::new("confirmPassword").mis_match("Type the same password twice"),
    ]);

    let outcome = session.validate_form(&ValidateOptions::default()).unwrap();
    let errors = outcome.errors().unwrap();

    assert_eq!(errors.first_for("email").unwrap().kind, ErrorKind::Required);
    assert_eq!(box_content(&session, "email"), "Tell us your email");
    assert_eq!(box_content(&session, "confirmPassword"), "Type the same password twice");
    assert_eq!(box_content(&session, "phone"), "At least 10 digits required");
}

#[test]
fn test_valid_form_with_combine() {
    init_tracing();
    let mut session = session();
    session.connect("profile").unwrap();

    let options = ValidateOptionsBuilder::new()
        .strict(true)
        .combine(Some(CombineSpec::new().pair(
            "first_name",
            "last_name",
            CombinedAttributes::new("full_name", "text"),
        )))
        .build()
        .expect("Failed to build options");
    let outcome = session.validate_form(&options).unwrap();

    let FormOutcome::Valid { form_id, fields } = outcome else {
        panic!("expected a valid outcome");
    };
    assert_eq!(form_id, None);
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["email", "bio", "full_name", "tags", "website"]);

    let data = format_fields(&fields);
    assert_eq!(data["full_name"], "Anmol Shrivastav");
    assert_eq!(data["website"], "https://example.com");
}

#[test]
fn test_combine_failure_aborts() {
    let mut session = session();
    session.connect("profile").unwrap();

    let options = ValidateOptionsBuilder::new()
        .combine(Some(
            CombineSpec::new()
                .pair("first_name", "middle_name", CombinedAttributes::default())
                .method(JoinMethod::Dot),
        ))
        .build()
        .expect("Failed to build options");

    assert_eq!(
        session.validate_form(&options),
        Err(FormError::Combine(CombineError::FieldsNotFound {
            first: "first_name".into(),
            second: "middle_name".into(),
        }))
    );
}

#[test]
fn test_no_priority_fields_is_not_valid() {
    let mut session = session();
    session.connect("extras").unwrap();

    let outcome = session.validate_form(&ValidateOptions::default()).unwrap();
    assert!(!outcome.is_valid());
    assert!(outcome.errors().unwrap().is_empty());
}

#[test]
fn test_form_without_fields_fails() {
    let mut session = session();
    session.connect("empty").unwrap();
    assert_eq!(
        session.validate_form(&ValidateOptions::default()),
        Err(FormError::NoFieldsFound { form: "empty".into() })
    );
}

#[test]
fn test_validate_by_index_carries_form_id() {
    let mut session = session();
    session.multi_connect(&["signup", "profile"]).unwrap();

    let outcome = session.validate_form_by_index(1, &ValidateOptions::default()).unwrap();
    match outcome {
        FormOutcome::Valid { form_id, fields } => {
            assert_eq!(form_id.as_deref(), Some("profile"));
            assert_eq!(fields.len(), 6);
        }
        FormOutcome::Invalid { errors } => panic!("unexpected errors: {errors}"),
    }

    assert!(!session
        .validate_form_by_index(0, &ValidateOptions::default())
        .unwrap()
        .is_valid());
    assert_eq!(
        session.validate_form_by_index(2, &ValidateOptions::default()),
        Err(FormError::FormIndexOutOfRange { index: 2, connected: 2 })
    );
}

#[test]
fn test_phone_rules_from_json_options() {
    let document = Document::new().with_form(
        Form::with_id("contact")
            .control(Control::input("phone", "tel", "+91 9170491234"))
            .error_box(ErrorBox::new("phone")),
    );
    let mut session = FormSession::new(document);
    session.connect("contact").unwrap();

    let outcome = session.validate_form(&ValidateOptions::default()).unwrap();
    assert_eq!(
        outcome.errors().unwrap().first_for("phone").unwrap().message,
        "Invalid format. Allowed: 0-9"
    );

    let options: ValidateOptions = serde_json::from_str(r#"{"phoneRules": ["+", "spaces"]}"#).unwrap();
    let outcome = session.validate_form(&options).unwrap();
    assert!(outcome.is_valid());
    assert_eq!(
        outcome.fields().unwrap()[0].value,
        FieldValue::from("+91 9170491234")
    );
    assert_eq!(box_content(&session, "phone"), "");
}

#[test]
fn test_minmax_from_builder_reaches_name_checks() {
    let mut session = session();
    session.connect("profile").unwrap();

    let options = ValidateOptionsBuilder::headless_strict()
        .minmax((6, 50))
        .build()
        .expect("Failed to build options");
    let outcome = session.validate_form(&options).unwrap();

    let errors = outcome.errors().expect("first_name is too short");
    assert_eq!(errors.len(), 1);
    let error = errors.first_for("first_name").unwrap();
    assert_eq!(error.kind, ErrorKind::TooShort);
    assert_eq!(error.message, "first_name must be at least 6 characters");
}

#[test]
fn test_validation_is_repeatable() {
    let mut session = session();
    session.connect("signup").unwrap();
    let first = session.validate_form(&ValidateOptions::default()).unwrap();
    let second = session.validate_form(&ValidateOptions::default()).unwrap();
    assert_eq!(first, second);
}
