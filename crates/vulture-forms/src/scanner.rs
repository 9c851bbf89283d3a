//! Reads fields and error boxes out of a form

use crate::dom::{Form, ERROR_CLASS};
use crate::error::FormError;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vulture_validation::{Field, FieldValue};

/// Descriptor of an error box found during a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBoxRef {
    pub id: String,
    /// Class marker the box already carries, if any
    pub class: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScannedForm {
    pub fields: Vec<Field>,
    pub error_boxes: Vec<ErrorBoxRef>,
}

/// Scan `form` into a field list.
///
/// Controls with a non-empty name are read in document order, skipping
/// submit/reset. A radio group becomes one field holding the checked value,
/// or an empty string if nothing is checked. A checkbox carries its checked
/// state.
pub fn scan(form: &Form) -> Result<ScannedForm, FormError> {
    let mut fields: Vec<Field> = Vec::new();

    for control in &form.controls {
        let Some(name) = control.name.as_deref().filter(|n| !n.is_empty()) else {
            continue;
        };
        if control.is_excluded() {
            continue;
        }

        match control.kind.as_str() {
            "radio" => {
                if fields.iter().any(|f| f.name == name && f.is_kind("radio")) {
                    continue;
                }
                let checked = form
                    .controls
                    .iter()
                    .filter(|c| c.kind == "radio" && c.name.as_deref() == Some(name))
                    .find(|c| c.checked)
                    .map(|c| c.value.clone())
                    .unwrap_or_default();
                fields.push(Field::new(name, "radio", FieldValue::Text(checked)));
            }
            "checkbox" => fields.push(Field::new(name, "checkbox", FieldValue::Flag(control.checked))),
            kind => fields.push(Field::new(name, kind, FieldValue::Text(control.value.clone()))),
        }
    }

    if fields.is_empty() {
        return Err(FormError::no_fields(form.label()));
    }

    let error_boxes = form
        .error_boxes
        .iter()
        .map(|b| ErrorBoxRef {
            id: b.id.clone(),
            class: b.has_class(ERROR_CLASS).then(|| ERROR_CLASS.to_string()),
        })
        .collect::<Vec<_>>();

    debug!(
        form = form.label(),
        fields = fields.len(),
        error_boxes = error_boxes.len(),
        "scanned form"
    );

    Ok(ScannedForm { fields, error_boxes })
}
