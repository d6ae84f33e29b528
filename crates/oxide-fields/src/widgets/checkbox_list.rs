//! Standalone checkbox lists.

use crate::error::Result;
use crate::fields::{selected_values, CheckboxList};
use crate::form_model::FormModel;
use crate::html::Attributes;
use crate::html_form::{input_id, input_name};

/// Renders a [`CheckboxList`] for a model attribute without field parts.
#[derive(Debug, Clone)]
pub struct CheckboxListWidget {
    list: CheckboxList,
    name: String,
    id: String,
    value: serde_json::Value,
    attributes: Attributes,
}

impl CheckboxListWidget {
    /// Creates the list for one attribute of a model.
    pub fn for_attribute(model: &dyn FormModel, attribute: &str, list: CheckboxList) -> Self {
        Self {
            list,
            name: input_name(model.form_name(), attribute),
            id: input_id(model.form_name(), attribute),
            value: model.attribute_value(attribute).cloned().unwrap_or_default(),
            attributes: Attributes::new(),
        }
    }

    /// Container attributes.
    #[must_use]
    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Renders the list; fails on a non-list value.
    pub fn render(&self) -> Result<String> {
        let selected = selected_values("CheckboxList", &self.value)?;
        let mut container = self.attributes.clone();
        container.set_default("id", self.id.as_str());
        Ok(self.list.render_list(&self.name, &selected, &container))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_model::{AttributeDef, SimpleFormModel};
    use serde_json::json;

    #[test]
    fn test_widget() {
        let form = SimpleFormModel::new("TypeForm")
            .attribute("array", AttributeDef::new().value(json!(["1"])));
        let list = CheckboxList::new([("1", "Female"), ("2", "Male")]);
        let html = CheckboxListWidget::for_attribute(&form, "array", list)
            .attributes(Attributes::new().with("class", "list"))
            .render()
            .unwrap();
        assert_eq!(
            html,
            "<div id=\"typeform-array\" class=\"list\">\n\
             <label><input type=\"checkbox\" name=\"TypeForm[array][]\" value=\"1\" checked> Female</label>\n\
             <label><input type=\"checkbox\" name=\"TypeForm[array][]\" value=\"2\"> Male</label>\n\
             </div>"
        );
    }

    #[test]
    fn test_rejects_scalar() {
        let form = SimpleFormModel::new("F").attribute("a", AttributeDef::new().value("1"));
        let list = CheckboxList::new([("1", "One")]);
        assert!(CheckboxListWidget::for_attribute(&form, "a", list).render().is_err());
    }
}
