//! Writes validation messages into a form's error boxes

use crate::dom::{Form, ERROR_CLASS};
use crate::scanner::ErrorBoxRef;
use tracing::{debug, warn};
use vulture_validation::ValidationError;

/// Render `errors` into the boxes described by `boxes`.
///
/// Each box shows the first error whose field equals the box id and is
/// cleared otherwise. Boxes without a class marker get the error class.
pub fn render_errors(form: &mut Form, boxes: &[ErrorBoxRef], errors: &[ValidationError]) {
    if !errors.is_empty() {
        warn!(form = form.label(), errors = errors.len(), "rendering validation errors");
    }

    for descriptor in boxes {
        let Some(target) = form.find_error_box_mut(&descriptor.id) else {
            debug!(id = %descriptor.id, "error box vanished before rendering");
            continue;
        };
        if descriptor.class.is_none() {
            target.add_class(ERROR_CLASS);
        }
        target.content = errors
            .iter()
            .find(|e| e.field == descriptor.id)
            .map(|e| e.message.clone())
            .unwrap_or_default();
    }
}
