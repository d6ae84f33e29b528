//! A single HTML element.

use crate::error::{FieldError, Result};

use super::{encode, Attributes};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// An HTML element with attributes and text content.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    name: String,
    attributes: Attributes,
    content: String,
    encode: bool,
}

impl Tag {
    /// Creates a tag, failing on an empty name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FieldError::EmptyTagName);
        }
        Ok(Self::named(name))
    }

    /// Creates a tag whose name is known to be valid.
    pub(crate) fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            content: String::new(),
            encode: true,
        }
    }

    /// The tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tag attributes.
    pub fn attrs(&self) -> &Attributes {
        &self.attributes
    }

    /// The raw content, before encoding.
    pub fn get_content(&self) -> &str {
        &self.content
    }

    /// Merges attributes into the tag.
    #[must_use]
    pub fn attributes(mut self, attributes: &Attributes) -> Self {
        self.attributes.merge(attributes);
        self
    }

    /// Sets a single attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Sets the tag content.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Whether content is HTML-encoded on render. Defaults to `true`.
    #[must_use]
    pub const fn encode(mut self, encode: bool) -> Self {
        self.encode = encode;
        self
    }

    /// Whether the element has no closing tag.
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name.as_str())
    }

    /// Renders the opening tag.
    pub fn open(&self) -> String {
        format!("<{}{}>", self.name, self.attributes.render())
    }

    /// Renders the closing tag (empty for void elements).
    pub fn close(&self) -> String {
        if self.is_void() {
            String::new()
        } else {
            format!("</{}>", self.name)
        }
    }

    /// Renders the whole element.
    pub fn render(&self) -> String {
        if self.is_void() {
            return self.open();
        }
        let content = if self.encode {
            encode(&self.content)
        } else {
            self.content.clone()
        };
        format!("{}{}{}", self.open(), content, self.close())
    }
}
