//! Themes: named sets of field defaults.
//!
//! A [`ThemeRegistry`] is built once from configuration and then only
//! read. Fields receive their theme explicitly, either through
//! [`Field::themed`] or through the registry.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{FieldError, Result};
use crate::fields::{Field, InputGenerator};
use crate::html::Attributes;
use crate::html_options::SharedEnricher;
use crate::template::Tokens;

/// Field defaults applied by a theme.
///
/// Unset values keep the field defaults. Class lists are appended to the
/// field's class lists.
///
/// ```rust
/// use oxide_fields::Theme;
///
/// let theme: Theme = serde_json::from_str(r#"{
///     "container_class": ["mb-3"],
///     "input_class": ["form-control"],
///     "invalid_class": "has-error",
///     "tokens": {"{icon}": "<span class=\"icon\"></span>"}
/// }"#).unwrap();
/// assert_eq!(theme.tokens.get("{icon}"), Some("<span class=\"icon\"></span>"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub container_tag: Option<String>,
    pub container_attributes: Attributes,
    pub container_class: Vec<String>,
    pub use_container: Option<bool>,

    pub template: Option<String>,
    pub template_begin: Option<String>,
    pub template_end: Option<String>,
    #[serde(deserialize_with = "deserialize_tokens")]
    pub tokens: Tokens,

    pub input_container_tag: Option<String>,
    pub input_container_attributes: Attributes,
    pub input_container_class: Vec<String>,
    pub input_attributes: Attributes,
    pub input_class: Vec<String>,

    pub label_attributes: Attributes,
    pub label_class: Vec<String>,
    pub hint_tag: Option<String>,
    pub hint_attributes: Attributes,
    pub hint_class: Vec<String>,
    pub error_tag: Option<String>,
    pub error_attributes: Attributes,
    pub error_class: Vec<String>,

    pub valid_class: Option<String>,
    pub invalid_class: Option<String>,
    pub input_valid_class: Option<String>,
    pub input_invalid_class: Option<String>,

    pub enrich_from_validation_rules: bool,
}

fn deserialize_tokens<'de, D>(deserializer: D) -> std::result::Result<Tokens, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Tokens::from_json(&value).map_err(serde::de::Error::custom)
}

impl Theme {
    /// Checks that every configured tag name is non-empty.
    pub fn validate(&self) -> Result<()> {
        let tags = [
            &self.container_tag,
            &self.input_container_tag,
            &self.hint_tag,
            &self.error_tag,
        ];
        if tags
            .into_iter()
            .flatten()
            .any(|tag| tag.trim().is_empty())
        {
            return Err(FieldError::EmptyTagName);
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct RegistryConfig {
    #[serde(default)]
    themes: IndexMap<String, Theme>,
    #[serde(default)]
    default_theme: Option<String>,
}

/// Named themes plus the default theme and the rule enricher.
///
/// ```rust
/// use oxide_fields::ThemeRegistry;
/// use oxide_fields::fields::TextInput;
///
/// let registry = ThemeRegistry::from_json(r#"{
///     "themes": {"compact": {"use_container": false}},
///     "default_theme": "compact"
/// }"#).unwrap();
///
/// let html = registry
///     .field(TextInput::text())
///     .name("q")
///     .value("rust")
///     .render()
///     .unwrap();
/// assert_eq!(html, "<input type=\"text\" name=\"q\" value=\"rust\">");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: IndexMap<String, Theme>,
    default_theme: Option<String>,
    enricher: Option<SharedEnricher>,
}

impl ThemeRegistry {
    /// Builds a registry, validating every theme and the default name.
    pub fn new<I, N>(themes: I, default_theme: Option<&str>) -> Result<Self>
    where
        I: IntoIterator<Item = (N, Theme)>,
        N: Into<String>,
    {
        let themes: IndexMap<String, Theme> = themes
            .into_iter()
            .map(|(name, theme)| (name.into(), theme))
            .collect();
        for theme in themes.values() {
            theme.validate()?;
        }
        if let Some(name) = default_theme {
            if !themes.contains_key(name) {
                return Err(FieldError::UnknownTheme(name.to_string()));
            }
        }
        debug!(
            themes = themes.len(),
            default_theme = default_theme.unwrap_or(""),
            "theme registry built"
        );
        Ok(Self {
            themes,
            default_theme: default_theme.map(str::to_string),
            enricher: None,
        })
    }

    /// Builds a registry from a JSON document
    /// `{"themes": {name: theme}, "default_theme": name}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RegistryConfig = serde_json::from_str(json)?;
        Self::new(config.themes, config.default_theme.as_deref())
    }

    /// Sets the enricher handed to every field created by the registry.
    #[must_use]
    pub fn with_enricher(mut self, enricher: SharedEnricher) -> Self {
        self.enricher = Some(enricher);
        self
    }

    /// Looks up a theme by name.
    pub fn theme(&self, name: &str) -> Result<&Theme> {
        trace!(theme = name, "theme lookup");
        self.themes
            .get(name)
            .ok_or_else(|| FieldError::UnknownTheme(name.to_string()))
    }

    /// The theme named as default, if any.
    pub fn default_theme(&self) -> Option<&Theme> {
        self.default_theme
            .as_deref()
            .and_then(|name| self.themes.get(name))
    }

    /// Registered theme names.
    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Creates a field with the default theme, if any.
    pub fn field<G: InputGenerator>(&self, generator: G) -> Field<G> {
        let field = match self.default_theme() {
            Some(theme) => Field::themed(generator, theme),
            None => Field::new(generator),
        };
        self.attach_enricher(field)
    }

    /// Creates a field with a named theme.
    pub fn field_with_theme<G: InputGenerator>(&self, name: &str, generator: G) -> Result<Field<G>> {
        let theme = self.theme(name)?;
        Ok(self.attach_enricher(Field::themed(generator, theme)))
    }

    fn attach_enricher<G: InputGenerator>(&self, field: Field<G>) -> Field<G> {
        match &self.enricher {
            Some(enricher) => field.rules_enricher(enricher.clone()),
            None => field,
        }
    }
}
