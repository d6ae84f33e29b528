//! Attribute error messages.

use crate::error::Result;
use crate::form_model::FormModel;
use crate::html::{Attributes, Tag};

/// Renders the validation error of one attribute.
///
/// By default only the first error is shown. Nothing is rendered when the
/// attribute has no error.
#[derive(Debug, Clone)]
pub struct ErrorMessage {
    errors: Vec<String>,
    message: Option<String>,
    show_all: bool,
    separator: String,
    tag: String,
    encode: bool,
    attributes: Attributes,
}

impl Default for ErrorMessage {
    fn default() -> Self {
        Self {
            errors: Vec::new(),
            message: None,
            show_all: false,
            separator: "\n".to_string(),
            tag: "div".to_string(),
            encode: true,
            attributes: Attributes::new(),
        }
    }
}

impl ErrorMessage {
    /// Creates an error widget with no message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors of a model attribute.
    pub fn for_attribute(model: &dyn FormModel, attribute: &str) -> Self {
        Self {
            errors: model.errors(attribute).to_vec(),
            ..Self::default()
        }
    }

    /// Message computed by a custom source instead of the model errors.
    pub fn with_source<F>(model: &dyn FormModel, attribute: &str, source: F) -> Self
    where
        F: FnOnce(&dyn FormModel, &str) -> String,
    {
        Self {
            message: Some(source(model, attribute)),
            ..Self::default()
        }
    }

    /// Error part of a field: fixed content, tag and attributes.
    pub(crate) fn part(tag: &str, attributes: &Attributes, content: String) -> Self {
        Self {
            message: Some(content),
            tag: tag.to_string(),
            attributes: attributes.clone(),
            ..Self::default()
        }
    }

    /// Overrides the message taken from the model.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Renders every error instead of the first one.
    #[must_use]
    pub const fn show_all(mut self, value: bool) -> Self {
        self.show_all = value;
        self
    }

    /// Separator between errors when all are shown.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the tag name; an empty name fails.
    pub fn tag(mut self, tag: &str) -> Result<Self> {
        self.tag = Tag::new(tag)?.name().to_string();
        Ok(self)
    }

    /// Whether the message is HTML-encoded. Defaults to `true`.
    #[must_use]
    pub const fn encode(mut self, encode: bool) -> Self {
        self.encode = encode;
        self
    }

    /// Replaces the tag attributes.
    #[must_use]
    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Sets the tag `id`.
    #[must_use]
    pub fn id(mut self, id: Option<&str>) -> Self {
        self.attributes.set("id", id);
        self
    }

    /// Replaces the classes.
    #[must_use]
    pub fn class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.attributes.replace_class(classes);
        self
    }

    /// Appends classes.
    #[must_use]
    pub fn add_class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.attributes.add_class(classes);
        self
    }

    fn content(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        if self.show_all {
            self.errors.join(&self.separator)
        } else {
            self.errors.first().cloned().unwrap_or_default()
        }
    }

    /// Renders the message, or an empty string when there is none.
    pub fn render(&self) -> String {
        let content = self.content();
        if content.is_empty() {
            return String::new();
        }
        Tag::named(self.tag.as_str())
            .attributes(&self.attributes)
            .content(content)
            .encode(self.encode)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_model::{AttributeDef, SimpleFormModel};

    fn form() -> SimpleFormModel {
        let mut form = SimpleFormModel::new("TypeForm")
            .attribute("string", AttributeDef::new())
            .attribute("int", AttributeDef::new());
        form.add_error("string", "Value cannot be blank.");
        form.add_error("string", "Is too short.");
        form
    }

    #[test]
    fn test_first_error() {
        let html = ErrorMessage::for_attribute(&form(), "string").render();
        assert_eq!(html, "<div>Value cannot be blank.</div>");
    }

    #[test]
    fn test_all_errors() {
        let html = ErrorMessage::for_attribute(&form(), "string")
            .show_all(true)
            .separator(" ")
            .tag("p")
            .unwrap()
            .add_class(["invalid-feedback"])
            .render();
        assert_eq!(
            html,
            "<p class=\"invalid-feedback\">Value cannot be blank. Is too short.</p>"
        );
    }

    #[test]
    fn test_no_error_renders_nothing() {
        assert_eq!(ErrorMessage::for_attribute(&form(), "int").render(), "");
    }

    #[test]
    fn test_error_source() {
        let html = ErrorMessage::with_source(&form(), "string", |model, attribute| {
            format!("{} error(s)", model.errors(attribute).len())
        })
        .render();
        assert_eq!(html, "<div>2 error(s)</div>");
    }
}
