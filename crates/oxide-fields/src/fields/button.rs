//! Buttons.

use super::{Field, InputContext, InputGenerator};
use crate::error::Result;
use crate::html::Tag;

/// A `<button>` of type `submit`, `reset` or `button`.
///
/// Buttons do not need bound data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    button_type: &'static str,
    content: String,
    encode: bool,
}

impl Button {
    const fn with_type(button_type: &'static str) -> Self {
        Self {
            button_type,
            content: String::new(),
            encode: true,
        }
    }

    /// Creates a `type="submit"` button.
    pub const fn submit() -> Self {
        Self::with_type("submit")
    }

    /// Creates a `type="reset"` button.
    pub const fn reset() -> Self {
        Self::with_type("reset")
    }

    /// Creates a plain `type="button"` button.
    pub const fn button() -> Self {
        Self::with_type("button")
    }
}

impl InputGenerator for Button {
    fn widget_name(&self) -> &'static str {
        "Button"
    }

    fn generate(&self, ctx: &InputContext<'_>) -> Result<String> {
        let mut attrs = ctx.attributes().clone();
        if let Some(id) = ctx.id() {
            attrs.set_default("id", id);
        }
        if let Some(name) = ctx.name() {
            attrs.set_default("name", name);
        }
        Ok(Tag::named("button")
            .attr("type", self.button_type)
            .attributes(&attrs)
            .content(self.content.as_str())
            .encode(self.encode)
            .render())
    }

    fn hides_label(&self) -> bool {
        true
    }
}

impl Field<Button> {
    /// Sets the button content.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.generator.content = content.into();
        self
    }

    /// Whether the content is HTML-encoded. Defaults to `true`.
    #[must_use]
    pub const fn encode_content(mut self, value: bool) -> Self {
        self.generator.encode = value;
        self
    }

    /// Sets `aria-describedby`.
    #[must_use]
    pub fn aria_described_by(mut self, value: impl Into<String>) -> Self {
        self.input_attributes.set("aria-describedby", value.into());
        self
    }

    /// Sets `aria-label`.
    #[must_use]
    pub fn aria_label(mut self, value: impl Into<String>) -> Self {
        self.input_attributes.set("aria-label", value.into());
        self
    }

    /// Sets the `autofocus` flag.
    #[must_use]
    pub fn autofocus(mut self, value: bool) -> Self {
        self.input_attributes.set("autofocus", value);
        self
    }

    /// Sets `tabindex`.
    #[must_use]
    pub fn tab_index(mut self, index: i32) -> Self {
        self.input_attributes.set("tabindex", index);
        self
    }

    /// Sets the `disabled` flag.
    #[must_use]
    pub fn disabled(mut self, value: bool) -> Self {
        self.input_attributes.set("disabled", value);
        self
    }

    /// Associates the button with a form element by id.
    #[must_use]
    pub fn form(mut self, form: impl Into<String>) -> Self {
        self.input_attributes.set("form", form.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_button() {
        let html = Field::submit_button().content("Send").render().unwrap();
        assert_eq!(html, "<div>\n<button type=\"submit\">Send</button>\n</div>");
    }

    #[test]
    fn test_button_attributes() {
        let html = Field::reset_button()
            .content("<b>Reset</b>")
            .encode_content(false)
            .input_id(Some("r"))
            .disabled(true)
            .tab_index(2)
            .aria_label("Reset form")
            .without_container()
            .render()
            .unwrap();
        assert_eq!(
            html,
            "<button type=\"reset\" id=\"r\" disabled tabindex=\"2\" \
             aria-label=\"Reset form\"><b>Reset</b></button>"
        );
    }

    #[test]
    fn test_encoded_content() {
        let html = Field::button()
            .content("a & b")
            .without_container()
            .render()
            .unwrap();
        assert_eq!(html, "<button type=\"button\">a &amp; b</button>");
    }
}
