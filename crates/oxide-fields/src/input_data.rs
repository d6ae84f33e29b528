//! Per-attribute rendering data.

use serde_json::Value;

use crate::form_model::FormModel;
use crate::html_form::{input_id, input_name};
use crate::html_options::ValidationRule;

/// Read-only view over the inputs needed to render one attribute.
pub trait InputData {
    fn name(&self) -> Option<&str>;
    fn value(&self) -> &Value;
    fn label(&self) -> Option<&str>;
    fn hint(&self) -> Option<&str>;
    fn placeholder(&self) -> Option<&str>;
    fn id(&self) -> Option<&str>;
    fn validation_rules(&self) -> &[ValidationRule];
    fn is_validated(&self) -> bool;
    fn validation_errors(&self) -> &[String];
}

/// A plain [`InputData`] carrier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PureInputData {
    name: Option<String>,
    value: Value,
    label: Option<String>,
    hint: Option<String>,
    placeholder: Option<String>,
    id: Option<String>,
    rules: Vec<ValidationRule>,
    validation_errors: Option<Vec<String>>,
}

impl PureInputData {
    /// Creates empty input data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a snapshot of one attribute of a form model.
    ///
    /// Validation errors are carried over once the model was validated or
    /// holds errors for the attribute.
    pub fn from_model(model: &dyn FormModel, attribute: &str) -> Self {
        let form_name = model.form_name();
        let validated = model.is_validated() || model.has_errors(Some(attribute));
        Self {
            name: Some(input_name(form_name, attribute)),
            value: model.attribute_value(attribute).cloned().unwrap_or_default(),
            label: Some(model.attribute_label(attribute)),
            hint: Some(model.attribute_hint(attribute)),
            placeholder: model.attribute_placeholder(attribute),
            id: Some(input_id(form_name, attribute)),
            rules: model.attribute_rules(attribute).to_vec(),
            validation_errors: validated.then(|| model.errors(attribute).to_vec()),
        }
    }

    /// Copies any [`InputData`] into an owned carrier.
    pub fn from_input(data: &dyn InputData) -> Self {
        Self {
            name: data.name().map(str::to_string),
            value: data.value().clone(),
            label: data.label().map(str::to_string),
            hint: data.hint().map(str::to_string),
            placeholder: data.placeholder().map(str::to_string),
            id: data.id().map(str::to_string),
            rules: data.validation_rules().to_vec(),
            validation_errors: data
                .is_validated()
                .then(|| data.validation_errors().to_vec()),
        }
    }

    /// Sets the input name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the input id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the validation rules.
    #[must_use]
    pub fn with_rules(mut self, rules: Vec<ValidationRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the validation errors and marks the data as validated.
    #[must_use]
    pub fn with_validation_errors(mut self, errors: Vec<String>) -> Self {
        self.validation_errors = Some(errors);
        self
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }

    pub(crate) fn set_value(&mut self, value: Value) {
        self.value = value;
    }
}

impl InputData for PureInputData {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn value(&self) -> &Value {
        &self.value
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validation_rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    fn is_validated(&self) -> bool {
        self.validation_errors.is_some()
    }

    fn validation_errors(&self) -> &[String] {
        self.validation_errors.as_deref().unwrap_or(&[])
    }
}
