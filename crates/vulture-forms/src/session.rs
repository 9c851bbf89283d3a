//! Form session: connect to forms and run the validation pipeline on them

use crate::config::ValidateOptions;
use crate::dom::{Document, Form};
use crate::error::FormError;
use crate::renderer::render_errors;
use crate::scanner::scan;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, error, info};
use vulture_validation::{
    combine, prioritize, validate_with, CustomErrorOverride, ErrorOverrides, Field, FieldCatalog,
    Rules, ValidationContext, ValidationErrors,
};

/// Result of validating a form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormOutcome {
    /// Priority fields (combined if requested) followed by the rest
    Valid {
        #[serde(rename = "formId", skip_serializing_if = "Option::is_none")]
        form_id: Option<String>,
        fields: Vec<Field>,
    },
    /// Errors found, or no priority field to validate
    Invalid { errors: ValidationErrors },
}

impl FormOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, FormOutcome::Valid { .. })
    }

    pub fn fields(&self) -> Option<&[Field]> {
        match self {
            FormOutcome::Valid { fields, .. } => Some(fields),
            FormOutcome::Invalid { .. } => None,
        }
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            FormOutcome::Valid { .. } => None,
            FormOutcome::Invalid { errors } => Some(errors),
        }
    }
}

/// Owns a document, the catalog in use, registered message overrides and
/// the connection state.
#[derive(Debug, Clone)]
pub struct FormSession {
    document: Document,
    catalog: Arc<FieldCatalog>,
    overrides: ErrorOverrides,
    rules: Rules,
    connected: Option<usize>,
    multi: Vec<usize>,
}

impl FormSession {
    /// Session over `document` using the built-in catalog and rules
    pub fn new(document: Document) -> Self {
        Self::with_catalog(document, Arc::new(FieldCatalog::default()))
    }

    pub fn with_catalog(document: Document, catalog: Arc<FieldCatalog>) -> Self {
        Self {
            document,
            catalog,
            overrides: ErrorOverrides::new(),
            rules: Rules::standard(),
            connected: None,
            multi: Vec::new(),
        }
    }

    /// Replace the rule pipeline
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    pub fn overrides(&self) -> &ErrorOverrides {
        &self.overrides
    }

    /// The form selected by `connect`, if any
    pub fn connected_form(&self) -> Option<&Form> {
        self.connected.and_then(|i| self.document.form(i))
    }

    /// Forms selected by `multi_connect`, in the order given
    pub fn multi_connected(&self) -> impl Iterator<Item = &Form> {
        self.multi.iter().filter_map(|&i| self.document.form(i))
    }

    /// Connect to a form by id, falling back to class name
    pub fn connect(&mut self, identifier: &str) -> Result<(), FormError> {
        let Some(index) = self
            .document
            .position_by_id(identifier)
            .or_else(|| self.document.position_by_class(identifier))
        else {
            error!(identifier, "form not found");
            return Err(FormError::form_not_found(identifier));
        };

        self.connected = Some(index);
        if let Some(form) = self.document.form(index) {
            info!(form = form.label(), inputs = form.input_count(), "connected to form");
        }
        Ok(())
    }

    /// Connect to several forms by id. Fails without changing state if any
    /// id is unknown.
    pub fn multi_connect<S: AsRef<str>>(&mut self, identifiers: &[S]) -> Result<(), FormError> {
        let mut positions = Vec::with_capacity(identifiers.len());
        let mut missing = Vec::new();

        for identifier in identifiers.iter().map(AsRef::as_ref) {
            match self.document.position_by_id(identifier) {
                Some(index) => positions.push(index),
                None => missing.push(identifier.to_string()),
            }
        }

        if !missing.is_empty() {
            error!(missing = ?missing, "forms not found");
            return Err(FormError::FormsNotFound { identifiers: missing });
        }

        self.multi = positions;
        let summary = self
            .multi_connected()
            .map(|f| format!("{}({})", f.label(), f.input_count()))
            .collect::<Vec<_>>()
            .join(", ");
        info!(forms = %summary, "connected to forms");
        Ok(())
    }

    /// Append message overrides; the first override registered for a field wins
    pub fn register_error_overrides(&mut self, overrides: impl IntoIterator<Item = CustomErrorOverride>) {
        self.overrides.register(overrides);
        debug!(total = self.overrides.len(), "registered error overrides");
    }

    /// Validate the connected form
    pub fn validate_form(&mut self, options: &ValidateOptions) -> Result<FormOutcome, FormError> {
        let index = self.connected.ok_or(FormError::NotConnected)?;
        self.run(index, options, false)
    }

    /// Validate the `index`-th multi-connected form. A valid outcome carries
    /// the form id.
    pub fn validate_form_by_index(&mut self, index: usize, options: &ValidateOptions) -> Result<FormOutcome, FormError> {
        let position = *self.multi.get(index).ok_or(FormError::FormIndexOutOfRange {
            index,
            connected: self.multi.len(),
        })?;
        self.run(position, options, true)
    }

    /// Show `message` in the connected form's error box for `field`
    pub fn set_field_error(&mut self, field: &str, message: impl Into<String>) -> Result<(), FormError> {
        let index = self.connected.ok_or(FormError::NotConnected)?;
        let target = self
            .document
            .form_mut(index)
            .and_then(|form| form.find_error_box_mut(field))
            .ok_or_else(|| FormError::error_box_not_found(field))?;
        target.content = message.into();
        Ok(())
    }

    fn run(&mut self, index: usize, options: &ValidateOptions, with_id: bool) -> Result<FormOutcome, FormError> {
        let form = self.document.form(index).ok_or(FormError::NotConnected)?;
        let form_id = form.id.clone();
        let scanned = scan(form)?;

        let partition = prioritize(scanned.fields, &self.catalog, &options.prioritize_options());
        let (min, max) = *options.get_minmax();
        let ctx = ValidationContext::new(&self.catalog)
            .strict(*options.get_strict())
            .length_bounds(min, max)
            .phone_rules(options.parsed_phone_rules())
            .overrides(&self.overrides);
        let validated = validate_with(&self.rules, partition.priority, &ctx);

        if *options.get_render_errors() {
            if let Some(form) = self.document.form_mut(index) {
                render_errors(form, &scanned.error_boxes, validated.errors.as_slice());
            }
        }

        if !validated.errors.is_empty() || validated.fields.is_empty() {
            return Ok(FormOutcome::Invalid {
                errors: validated.errors,
            });
        }

        let mut fields = match options.get_combine() {
            Some(spec) => combine(validated.fields, &spec.pairs, &spec.attributes, spec.method)?,
            None => validated.fields,
        };
        fields.extend(partition.non_priority);

        Ok(FormOutcome::Valid {
            form_id: if with_id { form_id } else { None },
            fields,
        })
    }
}

/// Map field names to their values. A later field overwrites an earlier one
/// with the same name.
pub fn format_fields(fields: &[Field]) -> Map<String, Value> {
    fields
        .iter()
        .map(|f| (f.name.clone(), f.value.to_json()))
        .collect()
}
