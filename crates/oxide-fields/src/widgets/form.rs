//! The `<form>` element.

use crate::html::{Attributes, Tag};

/// Default name of the CSRF hidden input.
pub const DEFAULT_CSRF_NAME: &str = "_csrf";

/// Renders the opening and closing `<form>` tags.
///
/// For `GET` forms the query string of the action moves into hidden
/// inputs, since browsers drop it on submit. For other methods a CSRF
/// token, when set, is rendered as a hidden input.
///
/// ```rust
/// use oxide_fields::Form;
///
/// let form = Form::new().action("/search?page=2").method("get");
/// assert_eq!(
///     form.begin(),
///     "<form action=\"/search\" method=\"GET\">\n\
///      <input type=\"hidden\" name=\"page\" value=\"2\">"
/// );
/// assert_eq!(form.end(), "</form>");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    action: String,
    method: String,
    csrf_name: String,
    csrf_token: Option<String>,
    attributes: Attributes,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            action: String::new(),
            method: "POST".to_string(),
            csrf_name: DEFAULT_CSRF_NAME.to_string(),
            csrf_token: None,
            attributes: Attributes::new(),
        }
    }
}

impl Form {
    /// Creates a `POST` form without an action.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `action` URL. An empty action is not rendered.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Sets the submit method. It is rendered upper-cased.
    #[must_use]
    pub fn method(mut self, method: impl AsRef<str>) -> Self {
        self.method = method.as_ref().to_uppercase();
        self
    }

    /// Sets the CSRF token sent with non-`GET` submits.
    #[must_use]
    pub fn csrf(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Sets the name of the CSRF hidden input.
    #[must_use]
    pub fn csrf_name(mut self, name: impl Into<String>) -> Self {
        self.csrf_name = name.into();
        self
    }

    /// Merges extra attributes into the form tag.
    #[must_use]
    pub fn attributes(mut self, attributes: &Attributes) -> Self {
        self.attributes.merge(attributes);
        self
    }

    /// Sets `accept-charset`.
    #[must_use]
    pub fn accept_charset(mut self, charset: impl Into<String>) -> Self {
        self.attributes.set("accept-charset", charset.into());
        self
    }

    /// Sets `autocomplete` to `on` or `off`.
    #[must_use]
    pub fn autocomplete(mut self, value: bool) -> Self {
        self.attributes
            .set("autocomplete", if value { "on" } else { "off" });
        self
    }

    /// Sets `enctype`, e.g. `multipart/form-data`.
    #[must_use]
    pub fn enctype(mut self, enctype: impl Into<String>) -> Self {
        self.attributes.set("enctype", enctype.into());
        self
    }

    /// Sets the form `id`.
    #[must_use]
    pub fn id(mut self, id: Option<&str>) -> Self {
        self.attributes.set("id", id);
        self
    }

    /// Adds `novalidate`, turning off browser-side validation.
    #[must_use]
    pub fn no_html_validation(mut self) -> Self {
        self.attributes.set("novalidate", true);
        self
    }

    /// Sets `target`.
    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.attributes.set("target", target.into());
        self
    }

    /// Renders the opening tag followed by any hidden inputs, one per line.
    pub fn begin(&self) -> String {
        let mut hidden = Vec::new();
        let mut action = self.action.as_str();

        if self.method == "GET" {
            if let Some((path, query)) = action.split_once('?') {
                action = path;
                hidden.extend(
                    query
                        .split('&')
                        .filter(|pair| !pair.is_empty())
                        .map(|pair| {
                            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
                            hidden_input(&decode_component(name), &decode_component(value))
                        }),
                );
            }
        } else if let Some(token) = self.csrf_token.as_deref().filter(|t| !t.is_empty()) {
            if !self.csrf_name.is_empty() {
                hidden.push(hidden_input(&self.csrf_name, token));
            }
        }

        let mut tag = Tag::named("form");
        if !action.is_empty() {
            tag = tag.attr("action", action);
        }
        let open = tag
            .attr("method", self.method.as_str())
            .attributes(&self.attributes)
            .open();

        std::iter::once(open)
            .chain(hidden)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders the closing tag.
    pub fn end(&self) -> String {
        Tag::named("form").close()
    }
}

fn hidden_input(name: &str, value: &str) -> String {
    Tag::named("input")
        .attr("type", "hidden")
        .attr("name", name)
        .attr("value", value)
        .render()
}

/// Decodes one `application/x-www-form-urlencoded` component.
fn decode_component(s: &str) -> String {
    let bytes = urlencoding::decode_binary(s.replace('+', " ").as_bytes()).into_owned();
    String::from_utf8_lossy(&bytes).into_owned()
}
