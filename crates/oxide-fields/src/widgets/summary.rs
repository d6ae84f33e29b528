//! Form-wide error summaries.

use ironhtml::typed::Element;
use ironhtml_elements::{Div, Li, Ul, P};

use crate::form_model::FormModel;

const DEFAULT_HEADER: &str = "Please fix the following errors:";

/// Renders every error of a form as a list under a header.
///
/// ```rust
/// use oxide_fields::{AttributeDef, ErrorSummary, SimpleFormModel};
///
/// let mut form = SimpleFormModel::new("LoginForm")
///     .attribute("login", AttributeDef::new());
/// form.add_error("login", "Login is required.");
///
/// let html = ErrorSummary::for_model(&form).render();
/// assert_eq!(
///     html,
///     "<div><p>Please fix the following errors:</p><ul><li>Login is required.</li></ul></div>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ErrorSummary {
    errors: Vec<String>,
    first_errors: Vec<String>,
    show_all: bool,
    header: String,
    class: Option<String>,
    id: Option<String>,
}

impl ErrorSummary {
    /// Collects the errors of a model, in attribute order.
    pub fn for_model(model: &dyn FormModel) -> Self {
        let errors = model.form_errors();
        Self {
            errors: errors.error_summary().into_iter().map(str::to_string).collect(),
            first_errors: errors
                .error_summary_first_errors()
                .into_iter()
                .map(str::to_string)
                .collect(),
            show_all: true,
            header: DEFAULT_HEADER.to_string(),
            class: None,
            id: None,
        }
    }

    /// Whether every error is listed, or only the first one per attribute.
    #[must_use]
    pub const fn show_all(mut self, value: bool) -> Self {
        self.show_all = value;
        self
    }

    /// Sets the header text; an empty header is omitted.
    #[must_use]
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Sets the `class` of the wrapping `<div>`.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the `id` of the wrapping `<div>`.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Renders the summary, or an empty string when there is no error.
    pub fn render(&self) -> String {
        let errors = if self.show_all {
            &self.errors
        } else {
            &self.first_errors
        };
        if errors.is_empty() {
            return String::new();
        }
        let class = self.class.clone().unwrap_or_default();
        let id = self.id.clone().unwrap_or_default();

        Element::<Div>::new()
            .when(!class.is_empty(), |d| d.attr("class", &class))
            .when(!id.is_empty(), |d| d.attr("id", &id))
            .when(!self.header.is_empty(), |d| {
                d.child::<P, _>(|p| p.text(&self.header))
            })
            .child::<Ul, _>(|ul| ul.children(errors.iter(), |e, li: Element<Li>| li.text(e)))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_model::{AttributeDef, SimpleFormModel};

    fn form() -> SimpleFormModel {
        let mut form = SimpleFormModel::new("LoginForm")
            .attribute("login", AttributeDef::new())
            .attribute("password", AttributeDef::new());
        form.add_error("login", "Login is required.");
        form.add_error("login", "Login is too short.");
        form.add_error("password", "Password & login mismatch.");
        form
    }

    #[test]
    fn test_all_errors() {
        let html = ErrorSummary::for_model(&form()).class("alert").id("s").render();
        assert_eq!(
            html,
            "<div class=\"alert\" id=\"s\"><p>Please fix the following errors:</p><ul>\
             <li>Login is required.</li>\
             <li>Login is too short.</li>\
             <li>Password &amp; login mismatch.</li>\
             </ul></div>"
        );
    }

    #[test]
    fn test_first_errors_only() {
        let html = ErrorSummary::for_model(&form())
            .show_all(false)
            .header("")
            .render();
        assert_eq!(
            html,
            "<div><ul><li>Login is required.</li><li>Password &amp; login mismatch.</li></ul></div>"
        );
    }

    #[test]
    fn test_no_errors() {
        let form = SimpleFormModel::new("LoginForm");
        assert_eq!(ErrorSummary::for_model(&form).render(), "");
    }
}
