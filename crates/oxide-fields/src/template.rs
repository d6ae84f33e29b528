//! Token-substitution templates.
//!
//! A template is a plain string holding `{name}` placeholders. Rendering
//! replaces each placeholder that has a value, leaves unknown placeholders
//! untouched, then drops lines left blank by empty fragments.

use std::fmt::Display;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;

use crate::error::{value_type_name, FieldError, Result};

/// Token names reserved for the field parts.
pub const BUILTIN_TOKENS: [&str; 4] = ["{label}", "{input}", "{hint}", "{error}"];

/// Default single-shot field layout.
pub const DEFAULT_TEMPLATE: &str = "{label}\n{input}\n{hint}\n{error}";

/// A run of horizontal whitespace at a line start followed by vertical
/// whitespace.
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[\t \x{a0}]*[\n\x0b\x0c\r\x{85}\x{2028}\x{2029}]+")
        .expect("valid blank line pattern")
});

/// Custom tokens registered on a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    tokens: IndexMap<String, String>,
}

impl Tokens {
    /// Creates an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a custom token.
    ///
    /// The name should include the braces (`{icon}`). Built-in names are
    /// rejected.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(FieldError::EmptyTokenName);
        }
        if BUILTIN_TOKENS.contains(&name.as_str()) {
            return Err(FieldError::BuiltinToken(name));
        }
        self.tokens.insert(name, value.to_string());
        Ok(())
    }

    /// Builds tokens from a configuration object of `name -> string`.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(FieldError::InvalidTokens(value_type_name(value)));
        };
        let mut tokens = Self::new();
        for (name, value) in map {
            match value {
                Value::String(s) => tokens.insert(name.clone(), s)?,
                other => return Err(FieldError::InvalidTokenValue(value_type_name(other))),
            }
        }
        Ok(tokens)
    }

    /// Merges `other` into this set; tokens from `other` win.
    pub fn merge(&mut self, other: &Self) {
        for (name, value) in &other.tokens {
            self.tokens.insert(name.clone(), value.clone());
        }
    }

    /// Value of a token, looked up by its braced name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens.get(name).map(String::as_str)
    }

    /// Whether no token is registered.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of registered tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Iterates tokens in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Sets a built-in part. Only the renderer does this.
    pub(crate) fn set_part(&mut self, name: &'static str, value: String) {
        self.tokens.insert(name.to_string(), value);
    }
}

/// Replaces every `{name}` placeholder found in `parts`.
///
/// Substituted values are not scanned again, and placeholders without a
/// value are kept literally.
pub fn substitute(template: &str, parts: &Tokens) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find('}') else {
            rest = tail;
            break;
        };
        if let Some(value) = parts.get(&tail[..=end]) {
            out.push_str(value);
            rest = &tail[end + 1..];
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Trims the text and removes lines that hold only whitespace.
pub fn strip_blank_lines(text: &str) -> String {
    BLANK_LINES.replace_all(text.trim(), "").into_owned()
}

/// Substitutes parts into a template and strips blank lines.
pub fn render_template(template: &str, parts: &Tokens) -> String {
    strip_blank_lines(&substitute(template, parts))
}
