//! Field sets.

use super::{Field, InputContext, InputGenerator};
use crate::error::Result;
use crate::html::Tag;

/// A `<fieldset>` with an optional legend.
///
/// Rendered in one go it wraps its content; rendered with
/// [`Field::render_begin`] and [`Field::render_end`] it opens and closes
/// around whatever the caller emits in between.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fieldset {
    legend: Option<String>,
    content: String,
}

impl Fieldset {
    /// Creates a fieldset without a legend.
    pub fn new() -> Self {
        Self::default()
    }

    fn tag(ctx: &InputContext<'_>) -> Tag {
        let mut attrs = ctx.attributes().clone();
        if let Some(id) = ctx.id() {
            attrs.set_default("id", id);
        }
        Tag::named("fieldset").attributes(&attrs)
    }

    fn open(&self, ctx: &InputContext<'_>) -> String {
        let mut html = Self::tag(ctx).open();
        if let Some(legend) = &self.legend {
            html.push('\n');
            html.push_str(&Tag::named("legend").content(legend.as_str()).render());
        }
        html
    }
}

impl InputGenerator for Fieldset {
    fn widget_name(&self) -> &'static str {
        "Fieldset"
    }

    fn generate(&self, ctx: &InputContext<'_>) -> Result<String> {
        let mut html = self.open(ctx);
        if !self.content.is_empty() {
            html.push('\n');
            html.push_str(&self.content);
        }
        html.push('\n');
        html.push_str(&Self::tag(ctx).close());
        Ok(html)
    }

    fn generate_begin(&self, ctx: &InputContext<'_>) -> Result<String> {
        Ok(self.open(ctx))
    }

    fn generate_end(&self, ctx: &InputContext<'_>) -> Result<String> {
        Ok(Self::tag(ctx).close())
    }

    fn hides_label(&self) -> bool {
        true
    }
}

impl Field<Fieldset> {
    /// Sets the `<legend>` text.
    #[must_use]
    pub fn legend(mut self, legend: impl Into<String>) -> Self {
        self.generator.legend = Some(legend.into());
        self
    }

    /// Sets pre-rendered inner markup for single-shot rendering.
    #[must_use]
    pub fn content(mut self, html: impl Into<String>) -> Self {
        self.generator.content = html.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fieldset_render() {
        let html = Field::fieldset()
            .legend("Account")
            .content("<input name=\"a\">")
            .without_container()
            .render()
            .unwrap();
        assert_eq!(
            html,
            "<fieldset>\n<legend>Account</legend>\n<input name=\"a\">\n</fieldset>"
        );
    }

    #[test]
    fn test_fieldset_begin_end() {
        let field = Field::fieldset().legend("Account");
        assert_eq!(
            field.render_begin().unwrap(),
            "<div>\n<fieldset>\n<legend>Account</legend>"
        );
        assert_eq!(field.render_end().unwrap(), "</fieldset>\n</div>");
    }
}
