//! Numeric inputs.

use serde_json::Value;

use super::text::TextLike;
use super::{Field, InputContext, InputGenerator};
use crate::error::{FieldError, Result};
use crate::html::Tag;

/// An `<input type="number">`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberInput;

impl NumberInput {
    /// Creates a number input.
    pub const fn new() -> Self {
        Self
    }
}

fn is_numeric(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && s.parse::<f64>().is_ok_and(f64::is_finite)
}

impl InputGenerator for NumberInput {
    fn widget_name(&self) -> &'static str {
        "Number"
    }

    fn generate(&self, ctx: &InputContext<'_>) -> Result<String> {
        ctx.data()?;
        let value = match ctx.value() {
            value @ (Value::Number(_) | Value::Null) => value.clone(),
            Value::String(s) if is_numeric(s) => Value::String(s.clone()),
            _ => return Err(FieldError::invalid_value("Number", "a numeric or null")),
        };
        let mut attrs = ctx.input_attributes();
        attrs.set_default("value", value);
        Ok(Tag::named("input")
            .attr("type", "number")
            .attributes(&attrs)
            .render())
    }

    fn uses_placeholder(&self) -> bool {
        true
    }
}

impl TextLike for NumberInput {}

impl Field<NumberInput> {
    /// Sets the `min` attribute.
    #[must_use]
    pub fn min(mut self, min: impl Into<Value>) -> Self {
        self.input_attributes.set("min", min.into());
        self
    }

    /// Sets the `max` attribute.
    #[must_use]
    pub fn max(mut self, max: impl Into<Value>) -> Self {
        self.input_attributes.set("max", max.into());
        self
    }

    /// Sets the `step` attribute.
    #[must_use]
    pub fn step(mut self, step: impl Into<Value>) -> Self {
        self.input_attributes.set("step", step.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_model::{AttributeDef, SimpleFormModel};
    use crate::html_options::ValidationRule;
    use serde_json::json;

    fn field() -> Field<NumberInput> {
        Field::number().hide_label().set_input_id(false).without_container()
    }

    #[test]
    fn test_number_values() {
        let html = field().name("n").value(5).min(1).max(10).render().unwrap();
        assert_eq!(
            html,
            "<input type=\"number\" name=\"n\" value=\"5\" min=\"1\" max=\"10\">"
        );
        let html = field().name("n").value("2.5").render().unwrap();
        assert_eq!(html, "<input type=\"number\" name=\"n\" value=\"2.5\">");
        let html = field().name("n").value(Value::Null).render().unwrap();
        assert_eq!(html, "<input type=\"number\" name=\"n\">");
    }

    #[test]
    fn test_rejects_non_numeric() {
        for value in [json!("abc"), json!(true), json!([1])] {
            let err = field().name("n").value(value).render().unwrap_err();
            assert_eq!(err.to_string(), "Number widget must be a numeric or null value.");
        }
    }

    #[test]
    fn test_rules_become_bounds() {
        let form = SimpleFormModel::new("F").attribute(
            "age",
            AttributeDef::new()
                .value(30)
                .rule(ValidationRule::number(Some(18), Some(99))),
        );
        let html = field()
            .for_attribute(&form, "age")
            .enrich_from_validation_rules(true)
            .render()
            .unwrap();
        assert_eq!(
            html,
            "<input type=\"number\" name=\"F[age]\" value=\"30\" min=\"18\" max=\"99\">"
        );
    }
}
