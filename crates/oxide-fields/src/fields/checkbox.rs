//! Single checkbox.

use serde_json::Value;

use super::{scalar_to_string, Field, InputContext, InputGenerator};
use crate::error::{FieldError, Result};
use crate::html::{encode, Tag};

/// An `<input type="checkbox">`, optionally preceded by a hidden input
/// carrying the unchecked value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    input_value: String,
    unchecked_value: Option<String>,
    enclosed_by_label: bool,
}

impl Default for Checkbox {
    fn default() -> Self {
        Self {
            input_value: "1".to_string(),
            unchecked_value: Some("0".to_string()),
            enclosed_by_label: true,
        }
    }
}

impl Checkbox {
    /// Creates a checkbox enclosed by its label, unchecked value `"0"`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputGenerator for Checkbox {
    fn widget_name(&self) -> &'static str {
        "Checkbox"
    }

    fn generate(&self, ctx: &InputContext<'_>) -> Result<String> {
        ctx.data()?;
        let value = match ctx.value() {
            Value::Array(_) | Value::Object(_) => {
                return Err(FieldError::invalid_value("Checkbox", "a scalar or null"))
            }
            other => scalar_to_string(other),
        };

        let mut attrs = ctx.input_attributes();
        attrs.set_default("value", self.input_value.as_str());
        if value.as_deref() == Some(self.input_value.as_str()) {
            attrs.set("checked", true);
        }
        let input = Tag::named("input").attr("type", "checkbox").attributes(&attrs);

        let mut html = String::new();
        if let (Some(unchecked), Some(name)) = (&self.unchecked_value, ctx.name()) {
            html.push_str(
                &Tag::named("input")
                    .attr("type", "hidden")
                    .attr("name", name)
                    .attr("value", unchecked.as_str())
                    .render(),
            );
        }
        if self.enclosed_by_label && !ctx.label().is_empty() {
            html.push_str(&format!(
                "<label>{} {}</label>",
                input.render(),
                encode(ctx.label())
            ));
        } else {
            html.push_str(&input.render());
        }
        Ok(html)
    }

    fn hides_label(&self) -> bool {
        self.enclosed_by_label
    }
}

impl Field<Checkbox> {
    /// Value submitted when the box is checked. Defaults to `"1"`.
    #[must_use]
    pub fn input_value(mut self, value: impl Into<String>) -> Self {
        self.generator.input_value = value.into();
        self
    }

    /// Value submitted through a hidden input when the box is unchecked.
    /// `None` drops the hidden input.
    #[must_use]
    pub fn unchecked_value(mut self, value: Option<&str>) -> Self {
        self.generator.unchecked_value = value.map(str::to_string);
        self
    }

    /// Whether the checkbox is rendered inside its label.
    #[must_use]
    pub const fn enclosed_by_label(mut self, value: bool) -> Self {
        self.generator.enclosed_by_label = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_model::{AttributeDef, SimpleFormModel};

    fn form() -> SimpleFormModel {
        SimpleFormModel::new("LoginForm")
            .attribute("rememberMe", AttributeDef::new().value(true))
            .attribute("terms", AttributeDef::new().value(false))
    }

    #[test]
    fn test_enclosed_checked() {
        let html = Field::checkbox()
            .for_attribute(&form(), "rememberMe")
            .without_container()
            .render()
            .unwrap();
        assert_eq!(
            html,
            "<input type=\"hidden\" name=\"LoginForm[rememberMe]\" value=\"0\">\
             <label><input type=\"checkbox\" id=\"loginform-rememberme\" \
             name=\"LoginForm[rememberMe]\" value=\"1\" checked> Remember Me</label>"
        );
    }

    #[test]
    fn test_enclosed_with_hidden_label() {
        let html = Field::checkbox()
            .for_attribute(&form(), "terms")
            .unchecked_value(None)
            .hide_label()
            .without_container()
            .render()
            .unwrap();
        assert_eq!(
            html,
            "<input type=\"checkbox\" id=\"loginform-terms\" name=\"LoginForm[terms]\" value=\"1\">"
        );
    }

    #[test]
    fn test_not_enclosed() {
        let html = Field::checkbox()
            .for_attribute(&form(), "terms")
            .enclosed_by_label(false)
            .unchecked_value(None)
            .without_container()
            .render()
            .unwrap();
        assert_eq!(
            html,
            "<label for=\"loginform-terms\">Terms</label>\n\
             <input type=\"checkbox\" id=\"loginform-terms\" name=\"LoginForm[terms]\" value=\"1\">"
        );
    }

    #[test]
    fn test_rejects_arrays() {
        let err = Field::checkbox()
            .name("x")
            .value(serde_json::json!([1]))
            .render()
            .unwrap_err();
        assert_eq!(err.to_string(), "Checkbox widget must be a scalar or null value.");
    }
}
