//! Attribute hints.

use crate::error::Result;
use crate::form_model::FormModel;
use crate::html::{Attributes, Tag};

/// Renders the hint of one attribute.
///
/// The hint comes from an explicit value or, when that is left empty,
/// from the form model. An empty hint renders nothing.
#[derive(Debug, Clone)]
pub struct Hint {
    model_hint: Option<String>,
    hint: Option<String>,
    tag: String,
    encode: bool,
    attributes: Attributes,
}

impl Default for Hint {
    fn default() -> Self {
        Self {
            model_hint: None,
            hint: Some(String::new()),
            tag: "div".to_string(),
            encode: true,
            attributes: Attributes::new(),
        }
    }
}

impl Hint {
    /// Creates a hint widget with no content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hint for a model attribute.
    pub fn for_attribute(model: &dyn FormModel, attribute: &str) -> Self {
        Self {
            model_hint: Some(model.attribute_hint(attribute)),
            ..Self::default()
        }
    }

    /// Hint part of a field: fixed content, tag and attributes.
    pub(crate) fn part(tag: &str, attributes: &Attributes, content: String) -> Self {
        Self {
            hint: Some(content),
            tag: tag.to_string(),
            attributes: attributes.clone(),
            ..Self::default()
        }
    }

    /// Sets the hint. `None` renders nothing, `Some("")` falls back to the
    /// model hint.
    #[must_use]
    pub fn hint(mut self, hint: Option<&str>) -> Self {
        self.hint = hint.map(str::to_string);
        self
    }

    /// Sets the tag name; an empty name fails.
    pub fn tag(mut self, tag: &str) -> Result<Self> {
        self.tag = Tag::new(tag)?.name().to_string();
        Ok(self)
    }

    /// Whether the content is HTML-encoded. Defaults to `true`.
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

    /// Renders the hint, or an empty string when there is none.
    pub fn render(&self) -> String {
        let content = match self.hint.as_deref() {
            None => return String::new(),
            Some("") => self.model_hint.as_deref().unwrap_or_default(),
            Some(hint) => hint,
        };
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
