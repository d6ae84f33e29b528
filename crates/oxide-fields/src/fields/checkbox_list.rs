//! A group of checkboxes sharing one array-valued attribute.

use serde_json::Value;

use super::{scalar_to_string, Field, InputContext, InputGenerator};
use crate::error::{FieldError, Result};
use crate::html::{encode, Attributes, Tag};

/// A list of labeled checkboxes inside a container tag.
///
/// Each checkbox is named `name[]`; the ones whose value is contained in
/// the attribute value are checked.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxList {
    items: Vec<(String, String)>,
    container_tag: String,
    item_attributes: Attributes,
    separator: String,
    unchecked_value: Option<String>,
}

impl CheckboxList {
    /// Creates a list from `(value, label)` pairs.
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
            container_tag: "div".to_string(),
            item_attributes: Attributes::new(),
            separator: "\n".to_string(),
            unchecked_value: None,
        }
    }

    /// The `(value, label)` pairs, in render order.
    pub fn items(&self) -> &[(String, String)] {
        &self.items
    }

    /// Sets the tag wrapping the list.
    pub fn container_tag(mut self, tag: &str) -> Result<Self> {
        self.container_tag = Tag::new(tag)?.name().to_string();
        Ok(self)
    }

    /// Attributes applied to every checkbox.
    #[must_use]
    pub fn item_attributes(mut self, attributes: Attributes) -> Self {
        self.item_attributes = attributes;
        self
    }

    /// Markup placed between two checkboxes.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Value submitted through a hidden input when nothing is checked.
    #[must_use]
    pub fn unchecked_value(mut self, value: Option<&str>) -> Self {
        self.unchecked_value = value.map(str::to_string);
        self
    }

    /// Renders the list for a name, selected values and container
    /// attributes.
    pub(crate) fn render_list(
        &self,
        name: &str,
        selected: &[String],
        container_attributes: &Attributes,
    ) -> String {
        let items = self
            .items
            .iter()
            .map(|(value, label)| {
                let mut attrs = self.item_attributes.clone();
                attrs.set("name", format!("{name}[]"));
                attrs.set("value", value.as_str());
                if selected.contains(value) {
                    attrs.set("checked", true);
                }
                let input = Tag::named("input").attr("type", "checkbox").attributes(&attrs);
                format!("<label>{} {}</label>", input.render(), encode(label))
            })
            .collect::<Vec<_>>()
            .join(&self.separator);

        let mut html = String::new();
        if let Some(unchecked) = &self.unchecked_value {
            html.push_str(
                &Tag::named("input")
                    .attr("type", "hidden")
                    .attr("name", name)
                    .attr("value", unchecked.as_str())
                    .render(),
            );
            html.push('\n');
        }
        let container = Tag::named(self.container_tag.as_str()).attributes(container_attributes);
        html.push_str(&container.open());
        if !items.is_empty() {
            html.push('\n');
            html.push_str(&items);
        }
        html.push('\n');
        html.push_str(&container.close());
        html
    }
}

/// Reads the selected values of an array-valued attribute.
pub(crate) fn selected_values(widget: &'static str, value: &Value) -> Result<Vec<String>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items.iter().filter_map(scalar_to_string).collect()),
        _ => Err(FieldError::invalid_value(widget, "an array or null")),
    }
}

impl InputGenerator for CheckboxList {
    fn widget_name(&self) -> &'static str {
        "CheckboxList"
    }

    fn generate(&self, ctx: &InputContext<'_>) -> Result<String> {
        ctx.data()?;
        let selected = selected_values("CheckboxList", ctx.value())?;
        let name = ctx.name().unwrap_or_default();
        let mut container = ctx.attributes().clone();
        if let Some(id) = ctx.id() {
            container.set_default("id", id);
        }
        Ok(self.render_list(name, &selected, &container))
    }
}

impl Field<CheckboxList> {
    /// Attributes applied to every checkbox.
    #[must_use]
    pub fn item_attributes(mut self, attributes: Attributes) -> Self {
        self.generator = self.generator.item_attributes(attributes);
        self
    }

    /// Separator placed between items. Defaults to a newline.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.generator = self.generator.separator(separator);
        self
    }

    /// Value sent through a hidden input when nothing is checked.
    #[must_use]
    pub fn unchecked_value(mut self, value: Option<&str>) -> Self {
        self.generator = self.generator.unchecked_value(value);
        self
    }
}
