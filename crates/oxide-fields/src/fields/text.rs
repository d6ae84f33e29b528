//! Single-line text inputs.

use serde_json::Value;

use super::{Field, InputContext, InputGenerator};
use crate::error::{FieldError, Result};
use crate::html::Tag;

/// A single-line `<input>`: `text`, `email`, `password`, `search`, `tel`
/// or `url`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextInput {
    input_type: &'static str,
    widget: &'static str,
}

impl TextInput {
    /// Creates a text input.
    pub const fn text() -> Self {
        Self {
            input_type: "text",
            widget: "Text",
        }
    }

    /// Creates an email input.
    pub const fn email() -> Self {
        Self {
            input_type: "email",
            widget: "Email",
        }
    }

    /// Creates a password input.
    pub const fn password() -> Self {
        Self {
            input_type: "password",
            widget: "Password",
        }
    }

    /// Creates a search input.
    pub const fn search() -> Self {
        Self {
            input_type: "search",
            widget: "Search",
        }
    }

    /// Creates a telephone input.
    pub const fn tel() -> Self {
        Self {
            input_type: "tel",
            widget: "Telephone",
        }
    }

    /// Creates a URL input.
    pub const fn url() -> Self {
        Self {
            input_type: "url",
            widget: "Url",
        }
    }

    /// The `type` attribute value.
    pub const fn input_type(&self) -> &'static str {
        self.input_type
    }
}

impl InputGenerator for TextInput {
    fn widget_name(&self) -> &'static str {
        self.widget
    }

    fn generate(&self, ctx: &InputContext<'_>) -> Result<String> {
        ctx.data()?;
        let value = match ctx.value() {
            value @ (Value::String(_) | Value::Null) => value.clone(),
            _ => {
                return Err(FieldError::invalid_value(
                    self.widget,
                    "a string or null",
                ))
            }
        };
        let mut attrs = ctx.input_attributes();
        attrs.set_default("value", value);
        Ok(Tag::named("input")
            .attr("type", self.input_type)
            .attributes(&attrs)
            .render())
    }

    fn uses_placeholder(&self) -> bool {
        true
    }
}

/// Generators rendering free text, sharing the text constraint setters.
pub trait TextLike: InputGenerator {}

impl TextLike for TextInput {}

impl<G: TextLike> Field<G> {
    /// Sets the `placeholder` attribute.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input_attributes.set("placeholder", placeholder.into());
        self
    }

    /// Sets `maxlength`.
    #[must_use]
    pub fn max_length(mut self, length: usize) -> Self {
        self.input_attributes.set("maxlength", length);
        self
    }

    /// Sets `minlength`.
    #[must_use]
    pub fn min_length(mut self, length: usize) -> Self {
        self.input_attributes.set("minlength", length);
        self
    }

    /// Sets the `pattern` attribute.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.input_attributes.set("pattern", pattern.into());
        self
    }

    /// Sets the `readonly` flag.
    #[must_use]
    pub fn readonly(mut self, value: bool) -> Self {
        self.input_attributes.set("readonly", value);
        self
    }

    /// Sets the `required` flag.
    #[must_use]
    pub fn required(mut self, value: bool) -> Self {
        self.input_attributes.set("required", value);
        self
    }

    /// Sets the visible width in characters.
    #[must_use]
    pub fn size(mut self, size: usize) -> Self {
        self.input_attributes.set("size", size);
        self
    }

    /// Associates the input with a form element by id.
    #[must_use]
    pub fn form(mut self, form: impl Into<String>) -> Self {
        self.input_attributes.set("form", form.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_model::{AttributeDef, SimpleFormModel};

    fn form() -> SimpleFormModel {
        SimpleFormModel::new("TypeForm")
            .attribute("string", AttributeDef::new().value("x").placeholder("Type here"))
            .attribute("array", AttributeDef::new().value(serde_json::json!([])))
            .attribute("int", AttributeDef::new().value(1))
    }

    #[test]
    fn test_text_attributes() {
        let html = Field::text()
            .for_attribute(&form(), "string")
            .hide_label()
            .max_length(10)
            .min_length(2)
            .pattern("\\w+")
            .readonly(true)
            .required(true)
            .without_container()
            .render()
            .unwrap();
        assert_eq!(
            html,
            "<input type=\"text\" id=\"typeform-string\" name=\"TypeForm[string]\" \
             value=\"x\" readonly maxlength=\"10\" minlength=\"2\" \
             pattern=\"\\w+\" required placeholder=\"Type here\">"
        );
    }

    #[test]
    fn test_explicit_placeholder_wins() {
        let html = Field::email()
            .for_attribute(&form(), "string")
            .hide_label()
            .set_input_id(false)
            .placeholder("mine")
            .without_container()
            .render()
            .unwrap();
        assert_eq!(
            html,
            "<input type=\"email\" name=\"TypeForm[string]\" value=\"x\" placeholder=\"mine\">"
        );
    }

    #[test]
    fn test_password_type() {
        let html = Field::password()
            .name("secret")
            .value(Value::Null)
            .without_container()
            .render()
            .unwrap();
        assert_eq!(html, "<input type=\"password\" name=\"secret\">");
    }

    #[test]
    fn test_rejects_non_string_values() {
        for attribute in ["array", "int"] {
            let err = Field::text()
                .for_attribute(&form(), attribute)
                .render()
                .unwrap_err();
            assert_eq!(err.to_string(), "Text widget must be a string or null value.");
        }
    }
}
