//! Ordered HTML attribute maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::encode;

/// Attributes rendered ahead of all others, in this order.
const ATTRIBUTE_ORDER: &[&str] = &[
    "type", "id", "class", "name", "value", "href", "loading", "src", "srcset", "form", "action",
    "method", "selected", "checked", "readonly", "disabled", "multiple", "size", "maxlength",
    "minlength", "width", "height", "rows", "cols", "alt", "title", "rel", "media",
];

/// HTML attributes of a tag.
///
/// Keys keep insertion order. Values are JSON values so configuration can
/// be deserialized directly:
/// - `true` renders the bare attribute name, `false` and `null` omit it;
/// - an empty string renders the bare name;
/// - arrays are joined with spaces (used for `class`);
/// - objects are rendered as encoded JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    attrs: IndexMap<String, Value>,
}

impl Attributes {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, keeping its position if it already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    /// Gets an attribute as a string slice, if it holds a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str)
    }

    /// Removes an attribute, preserving the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.attrs.shift_remove(key)
    }

    /// Returns whether an attribute is present (even if it renders nothing).
    pub fn contains(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// Whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Iterates over attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merges `other` into this map. Keys from `other` win.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.attrs {
            self.attrs.insert(key.clone(), value.clone());
        }
    }

    /// Sets `key` only when it is not present yet.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attrs.entry(key.into()).or_insert_with(|| value.into());
    }

    /// Returns the current class list.
    pub fn classes(&self) -> Vec<String> {
        match self.attrs.get("class") {
            Some(Value::String(s)) => s.split_whitespace().map(str::to_string).collect(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .flat_map(|s| {
                    s.split_whitespace()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Appends classes to the class list.
    ///
    /// Space-separated values are split. Nothing is de-duplicated, so the
    /// list keeps the order of declaration.
    pub fn add_class<I, S>(&mut self, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = self.classes();
        list.extend(split_classes(classes));
        if !list.is_empty() {
            self.set("class", list);
        }
    }

    /// Replaces the class list. An empty list removes the attribute.
    pub fn replace_class<I, S>(&mut self, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = split_classes(classes);
        if list.is_empty() {
            self.remove("class");
        } else {
            self.set("class", list);
        }
    }

    /// Renders attributes as an HTML attribute string with a leading space
    /// before each attribute.
    pub fn render(&self) -> String {
        let mut html = String::new();
        for key in ATTRIBUTE_ORDER {
            if let Some(value) = self.attrs.get(*key) {
                render_attribute(&mut html, key, value);
            }
        }
        for (key, value) in &self.attrs {
            if !ATTRIBUTE_ORDER.contains(&key.as_str()) {
                render_attribute(&mut html, key, value);
            }
        }
        html
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.set(key, value);
        }
        attrs
    }
}

fn split_classes<I, S>(classes: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    classes
        .into_iter()
        .flat_map(|c| {
            c.as_ref()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

fn render_attribute(html: &mut String, key: &str, value: &Value) {
    match value {
        Value::Null | Value::Bool(false) => {}
        Value::Bool(true) => {
            html.push(' ');
            html.push_str(key);
        }
        Value::String(s) => push_pair(html, key, s),
        Value::Number(n) => push_pair(html, key, &n.to_string()),
        Value::Array(items) => {
            if items.is_empty() {
                return;
            }
            let joined = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join(" ");
            push_pair(html, key, &joined);
        }
        Value::Object(_) => push_pair(html, key, &value.to_string()),
    }
}

fn push_pair(html: &mut String, key: &str, value: &str) {
    html.push(' ');
    html.push_str(key);
    if !value.is_empty() {
        html.push_str("=\"");
        html.push_str(&encode(value));
        html.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let attrs = Attributes::new()
            .with("placeholder", "Name")
            .with("name", "company")
            .with("type", "text")
            .with("class", "form-control")
            .with("id", "company");
        assert_eq!(
            attrs.render(),
            r#" type="text" id="company" class="form-control" name="company" placeholder="Name""#
        );
    }

    #[test]
    fn test_value_kinds() {
        let attrs = Attributes::new()
            .with("value", "")
            .with("disabled", true)
            .with("readonly", false)
            .with("size", 20)
            .with("form", Value::Null)
            .with("data-x", serde_json::json!({"a": 1}));
        assert_eq!(
            attrs.render(),
            r#" value disabled size="20" data-x="{&quot;a&quot;:1}""#
        );
    }

    #[test]
    fn test_merge_overrides() {
        let mut attrs = Attributes::new().with("class", "red").with("id", "a");
        attrs.merge(&Attributes::new().with("id", "KEY"));
        assert_eq!(attrs.render(), r#" id="KEY" class="red""#);
    }

    #[test]
    fn test_add_class_appends_without_dedup() {
        let mut attrs = Attributes::new();
        attrs.add_class(["main"]);
        attrs.add_class(["italic bold", "main"]);
        assert_eq!(attrs.classes(), vec!["main", "italic", "bold", "main"]);
        assert_eq!(attrs.render(), r#" class="main italic bold main""#);
    }

    #[test]
    fn test_replace_class() {
        let mut attrs = Attributes::new();
        attrs.add_class(["red"]);
        attrs.replace_class(["blue"]);
        assert_eq!(attrs.classes(), vec!["blue"]);

        attrs.replace_class(Vec::<&str>::new());
        assert!(!attrs.contains("class"));
        assert_eq!(attrs.render(), "");
    }

    #[test]
    fn test_add_class_to_string_class() {
        let mut attrs = Attributes::new().with("class", "a b");
        attrs.add_class(["c"]);
        assert_eq!(attrs.classes(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_iter_and_deserialize() {
        let attrs: Attributes = [("id", "x"), ("class", "y")].into_iter().collect();
        assert_eq!(attrs.len(), 2);

        let parsed: Attributes =
            serde_json::from_str(r#"{"rel": "a", "class": ["b", "c"]}"#).unwrap();
        assert_eq!(parsed.render(), r#" class="b c" rel="a""#);
    }
}
