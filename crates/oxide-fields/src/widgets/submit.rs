//! Submit inputs.

use crate::html::{Attributes, Tag};

/// An `<input type="submit">`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitButton {
    attributes: Attributes,
}

impl SubmitButton {
    /// Creates a submit input without a caption.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `id`.
    #[must_use]
    pub fn id(mut self, id: Option<&str>) -> Self {
        self.attributes.set("id", id);
        self
    }

    /// Sets the `name`.
    #[must_use]
    pub fn name(mut self, name: Option<&str>) -> Self {
        self.attributes.set("name", name);
        self
    }

    /// Sets the button caption.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.attributes.set("value", value.into());
        self
    }

    /// Replaces the attributes.
    #[must_use]
    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
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

    /// Renders the `<input>`.
    pub fn render(&self) -> String {
        Tag::named("input")
            .attr("type", "submit")
            .attributes(&self.attributes)
            .render()
    }
}
