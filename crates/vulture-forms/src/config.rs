//! Validation options and builders

use serde::{Deserialize, Serialize};
use service_builder::builder;
use vulture_validation::{
    CombinedAttributes, JoinMethod, PhoneRules, PrioritizeOptions, DEFAULT_LENGTH_BOUNDS,
};

/// Options for a single `validate_form` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[builder]
pub struct ValidateOptions {
    /// Promote fields by type as well as by name, and run the strict checks
    #[builder(default = "false", getter)]
    pub strict: bool,

    /// Extra priority name patterns for this call
    #[builder(default = "None", getter)]
    pub augment: Option<Vec<String>>,

    /// Write errors into the form's error boxes
    #[serde(alias = "render_error")]
    #[builder(default = "true", getter)]
    pub render_errors: bool,

    /// Inclusive name length bounds used in strict mode. Negative bounds
    /// are rejected when deserializing.
    #[builder(default = "(2, 50)", getter)]
    pub minmax: (usize, usize),

    /// Phone modifiers: `+`, `spaces`, `hyphens`, `dots` or `all`
    #[builder(default = "Vec::new()", getter)]
    pub phone_rules: Vec<String>,

    /// Pairs to merge once validation passes
    #[builder(default = "None", getter)]
    pub combine: Option<CombineSpec>,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            strict: false,
            augment: None,
            render_errors: true,
            minmax: DEFAULT_LENGTH_BOUNDS,
            phone_rules: Vec::new(),
            combine: None,
        }
    }
}

impl ValidateOptions {
    pub fn prioritize_options(&self) -> PrioritizeOptions<'_> {
        PrioritizeOptions {
            strict: self.strict,
            augment: self.augment.as_deref(),
        }
    }

    pub fn parsed_phone_rules(&self) -> PhoneRules {
        PhoneRules::parse(&self.phone_rules)
    }
}

impl ValidateOptionsBuilder {
    /// Strict checks with errors left unrendered, for headless callers
    pub fn headless_strict() -> Self {
        ValidateOptionsBuilder::new().strict(true).render_errors(false)
    }
}

/// Which fields to merge after a successful validation, and how
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombineSpec {
    pub pairs: Vec<(String, String)>,
    pub attributes: Vec<CombinedAttributes>,
    pub method: JoinMethod,
}

impl CombineSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pair(mut self, first: impl Into<String>, second: impl Into<String>, attributes: CombinedAttributes) -> Self {
        self.pairs.push((first.into(), second.into()));
        self.attributes.push(attributes);
        self
    }

    pub fn method(mut self, method: JoinMethod) -> Self {
        self.method = method;
        self
    }
}
