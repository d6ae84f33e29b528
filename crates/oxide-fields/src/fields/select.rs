//! Drop-down and multi-select lists.

use serde_json::Value;

use super::checkbox_list::selected_values;
use super::{scalar_to_string, Field, InputContext, InputGenerator};
use crate::error::{FieldError, Result};
use crate::html::Tag;

/// A `<select>` with one `<option>` per item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    items: Vec<(String, String)>,
    prompt: Option<String>,
    multiple: bool,
    size: Option<usize>,
    unselect_value: Option<String>,
}

impl Select {
    /// Creates a select from `(value, label)` pairs.
    pub fn new<I, V, L>(items: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        Self {
            items: items
                .into_iter()
                .map(|(value, label)| (value.into(), label.into()))
                .collect(),
            prompt: None,
            multiple: false,
            size: None,
            unselect_value: None,
        }
    }

    fn selected(&self, value: &Value) -> Result<Vec<String>> {
        match value {
            Value::Array(_) if self.multiple => selected_values("Select", value),
            Value::Array(_) | Value::Object(_) => {
                Err(FieldError::invalid_value("Select", "a scalar or null"))
            }
            other => Ok(scalar_to_string(other).into_iter().collect()),
        }
    }
}

impl InputGenerator for Select {
    fn widget_name(&self) -> &'static str {
        "Select"
    }

    fn generate(&self, ctx: &InputContext<'_>) -> Result<String> {
        ctx.data()?;
        let selected = self.selected(ctx.value())?;
        let name = ctx.name().unwrap_or_default();

        let mut attrs = ctx.attributes().clone();
        if let Some(id) = ctx.id() {
            attrs.set_default("id", id);
        }
        if self.multiple {
            attrs.set_default("name", format!("{name}[]"));
            attrs.set("multiple", true);
        } else {
            attrs.set_default("name", name);
        }
        if let Some(size) = self.size {
            attrs.set("size", size);
        }

        let mut lines = Vec::with_capacity(self.items.len() + 3);
        let select = Tag::named("select").attributes(&attrs);
        lines.push(select.open());
        if let Some(prompt) = &self.prompt {
            lines.push(Tag::named("option").attr("value", "").content(prompt.as_str()).render());
        }
        for (value, label) in &self.items {
            let mut option = Tag::named("option").attr("value", value.as_str());
            if selected.contains(value) {
                option = option.attr("selected", true);
            }
            lines.push(option.content(label.as_str()).render());
        }
        lines.push(select.close());

        let mut html = String::new();
        if let Some(unselect) = &self.unselect_value {
            html.push_str(
                &Tag::named("input")
                    .attr("type", "hidden")
                    .attr("name", name)
                    .attr("value", unselect.as_str())
                    .render(),
            );
            html.push('\n');
        }
        html.push_str(&lines.join("\n"));
        Ok(html)
    }
}

impl Field<Select> {
    /// Adds a leading option with an empty value.
    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.generator.prompt = Some(prompt.into());
        self
    }

    /// Allows several selected options; the input name gets a `[]` suffix.
    #[must_use]
    pub const fn multiple(mut self, value: bool) -> Self {
        self.generator.multiple = value;
        self
    }

    /// Sets the number of visible rows.
    #[must_use]
    pub const fn size(mut self, size: usize) -> Self {
        self.generator.size = Some(size);
        self
    }

    /// Value submitted through a hidden input when nothing is selected.
    #[must_use]
    pub fn unselect_value(mut self, value: Option<&str>) -> Self {
        self.generator.unselect_value = value.map(str::to_string);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_model::{AttributeDef, SimpleFormModel};
    use serde_json::json;

    fn cities() -> [(&'static str, &'static str); 2] {
        [("1", "Moscu"), ("2", "San Petersburgo")]
    }

    #[test]
    fn test_select() {
        let form = SimpleFormModel::new("TypeForm").attribute("int", AttributeDef::new().value(2));
        let html = Field::select(cities())
            .for_attribute(&form, "int")
            .hide_label()
            .prompt("Select City Birth")
            .without_container()
            .render()
            .unwrap();
        assert_eq!(
            html,
            "<select id=\"typeform-int\" name=\"TypeForm[int]\">\n\
             <option value>Select City Birth</option>\n\
             <option value=\"1\">Moscu</option>\n\
             <option value=\"2\" selected>San Petersburgo</option>\n\
             </select>"
        );
    }

    #[test]
    fn test_multiple_with_unselect_value() {
        let html = Field::select(cities())
            .name("cities")
            .value(json!(["1", "2"]))
            .multiple(true)
            .size(2)
            .unselect_value(Some("0"))
            .without_container()
            .render()
            .unwrap();
        assert_eq!(
            html,
            "<input type=\"hidden\" name=\"cities\" value=\"0\">\n\
             <select name=\"cities[]\" multiple size=\"2\">\n\
             <option value=\"1\" selected>Moscu</option>\n\
             <option value=\"2\" selected>San Petersburgo</option>\n\
             </select>"
        );
    }

    #[test]
    fn test_single_select_rejects_arrays() {
        let err = Field::select(cities())
            .name("city")
            .value(json!(["1"]))
            .render()
            .unwrap_err();
        assert_eq!(err.to_string(), "Select widget must be a scalar or null value.");
    }
}
