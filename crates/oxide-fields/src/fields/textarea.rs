//! Multi-line text inputs.

use serde_json::Value;

use super::text::TextLike;
use super::{Field, InputContext, InputGenerator};
use crate::error::{FieldError, Result};
use crate::html::Tag;

/// A `<textarea>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Textarea;

impl Textarea {
    /// Creates a textarea.
    pub const fn new() -> Self {
        Self
    }
}

impl InputGenerator for Textarea {
    fn widget_name(&self) -> &'static str {
        "Textarea"
    }

    fn generate(&self, ctx: &InputContext<'_>) -> Result<String> {
        ctx.data()?;
        let content = match ctx.value() {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            _ => return Err(FieldError::invalid_value("Textarea", "a string or null")),
        };
        Ok(Tag::named("textarea")
            .attributes(&ctx.input_attributes())
            .content(content)
            .render())
    }

    fn uses_placeholder(&self) -> bool {
        true
    }
}

impl TextLike for Textarea {}

impl Field<Textarea> {
    /// Sets the number of visible text lines.
    #[must_use]
    pub fn rows(mut self, rows: usize) -> Self {
        self.input_attributes.set("rows", rows);
        self
    }

    /// Sets the visible width in characters.
    #[must_use]
    pub fn cols(mut self, cols: usize) -> Self {
        self.input_attributes.set("cols", cols);
        self
    }
}
