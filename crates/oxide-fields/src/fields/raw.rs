//! Pre-rendered input markup.

use super::{Field, InputContext, InputGenerator};
use crate::error::Result;

/// Emits caller-supplied markup as the input part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    html: String,
    begin_html: String,
    end_html: String,
}

impl RawInput {
    /// Wraps pre-rendered input markup.
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            ..Self::default()
        }
    }
}

impl InputGenerator for RawInput {
    fn widget_name(&self) -> &'static str {
        "Raw"
    }

    fn generate(&self, _ctx: &InputContext<'_>) -> Result<String> {
        Ok(self.html.clone())
    }

    fn generate_begin(&self, _ctx: &InputContext<'_>) -> Result<String> {
        Ok(self.begin_html.clone())
    }

    fn generate_end(&self, _ctx: &InputContext<'_>) -> Result<String> {
        Ok(self.end_html.clone())
    }
}

impl Field<RawInput> {
    /// Markup used as `{input}` by [`Field::render_begin`].
    #[must_use]
    pub fn begin_html(mut self, html: impl Into<String>) -> Self {
        self.generator.begin_html = html.into();
        self
    }

    /// Markup used as `{input}` by [`Field::render_end`].
    #[must_use]
    pub fn end_html(mut self, html: impl Into<String>) -> Self {
        self.generator.end_html = html.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_end_without_input() {
        let field = Field::raw("<input>").label("Name").hint("Required.");
        assert_eq!(field.render_begin().unwrap(), "<div>\n<label>Name</label>");
        assert_eq!(field.render_end().unwrap(), "<div>Required.</div>\n</div>");
    }

    #[test]
    fn test_begin_end_html() {
        let field = Field::raw("")
            .begin_html("<span>")
            .end_html("</span>")
            .without_container();
        assert_eq!(field.render_begin().unwrap(), "<span>");
        assert_eq!(field.render_end().unwrap(), "</span>");
    }
}
