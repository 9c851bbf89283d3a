//! In-memory form document.
//!
//! A minimal model of the markup the scanner reads and the renderer writes:
//! forms holding named controls and error boxes. Browser bindings map real
//! elements onto these types.

use serde::{Deserialize, Serialize};

/// Class marking an element as an error box
pub const ERROR_CLASS: &str = "error";

/// Control types the scanner never reads
pub const EXCLUDED_TYPES: &[&str] = &["submit", "reset"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Input,
    Select,
    Textarea,
}

/// A form control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    pub tag: Tag,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
}

impl Control {
    pub fn input(name: impl Into<String>, kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Tag::Input,
            name: Some(name.into()),
            kind: kind.into(),
            value: value.into(),
            checked: false,
        }
    }

    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            checked,
            ..Self::input(name, "checkbox", "on")
        }
    }

    pub fn radio(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
        Self {
            checked,
            ..Self::input(name, "radio", value)
        }
    }

    pub fn select(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Tag::Select,
            ..Self::input(name, "select-one", value)
        }
    }

    pub fn textarea(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Tag::Textarea,
            ..Self::input(name, "textarea", value)
        }
    }

    /// A control without a name attribute
    pub fn unnamed(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: None,
            ..Self::input("", kind, value)
        }
    }

    pub fn is_excluded(&self) -> bool {
        EXCLUDED_TYPES.contains(&self.kind.as_str())
    }
}

/// Element that displays the error message for the field sharing its id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBox {
    pub id: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub content: String,
}

impl ErrorBox {
    /// A box already carrying the error class
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            classes: vec![ERROR_CLASS.to_string()],
            content: String::new(),
        }
    }

    /// A box without any class marker
    pub fn bare(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub controls: Vec<Control>,
    #[serde(default)]
    pub error_boxes: Vec<ErrorBox>,
}

impl Form {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn with_class(class_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
            ..Default::default()
        }
    }

    pub fn control(mut self, control: Control) -> Self {
        self.controls.push(control);
        self
    }

    pub fn error_box(mut self, error_box: ErrorBox) -> Self {
        self.error_boxes.push(error_box);
        self
    }

    /// Id, falling back to the class name
    pub fn label(&self) -> &str {
        self.id
            .as_deref()
            .or(self.class_name.as_deref())
            .unwrap_or("<anonymous>")
    }

    /// Number of input and textarea controls that are not excluded
    pub fn input_count(&self) -> usize {
        self.controls
            .iter()
            .filter(|c| matches!(c.tag, Tag::Input | Tag::Textarea) && !c.is_excluded())
            .count()
    }

    pub fn find_error_box(&self, id: &str) -> Option<&ErrorBox> {
        self.error_boxes.iter().find(|b| b.id == id)
    }

    pub fn find_error_box_mut(&mut self, id: &str) -> Option<&mut ErrorBox> {
        self.error_boxes.iter_mut().find(|b| b.id == id)
    }
}

/// The set of forms a session can connect to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub forms: Vec<Form>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(mut self, form: Form) -> Self {
        self.forms.push(form);
        self
    }

    pub fn position_by_id(&self, id: &str) -> Option<usize> {
        self.forms.iter().position(|f| f.id.as_deref() == Some(id))
    }

    pub fn position_by_class(&self, class_name: &str) -> Option<usize> {
        self.forms
            .iter()
            .position(|f| f.class_name.as_deref() == Some(class_name))
    }

    pub fn form(&self, index: usize) -> Option<&Form> {
        self.forms.get(index)
    }

    pub fn form_mut(&mut self, index: usize) -> Option<&mut Form> {
        self.forms.get_mut(index)
    }
}
