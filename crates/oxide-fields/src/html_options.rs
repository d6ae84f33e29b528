//! Mapping of validation rules to HTML input attributes.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::html::Attributes;

/// Description of a validation rule attached to a form attribute.
///
/// Validation itself happens elsewhere; these descriptions only feed the
/// HTML constraint attributes of the rendered input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ValidationRule {
    Required,
    Number {
        min: Option<Number>,
        max: Option<Number>,
    },
    Length {
        min: Option<usize>,
        max: Option<usize>,
    },
    Pattern {
        pattern: String,
    },
    Email,
}

impl ValidationRule {
    /// Creates a number rule.
    pub fn number(min: Option<impl Into<Number>>, max: Option<impl Into<Number>>) -> Self {
        Self::Number {
            min: min.map(Into::into),
            max: max.map(Into::into),
        }
    }

    /// Creates a length rule.
    pub const fn length(min: Option<usize>, max: Option<usize>) -> Self {
        Self::Length { min, max }
    }

    /// Creates a pattern rule.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
        }
    }
}

impl HtmlOptionsProvider for ValidationRule {
    fn html_options(&self) -> Attributes {
        match self {
            Self::Required => RequiredHtmlOptions.html_options(),
            Self::Number { min, max } => NumberHtmlOptions::new(min.clone(), max.clone()).html_options(),
            Self::Length { min, max } => LengthHtmlOptions::new(*min, *max).html_options(),
            Self::Pattern { pattern } => PatternHtmlOptions::new(pattern.clone()).html_options(),
            Self::Email => Attributes::new(),
        }
    }
}

/// Something that can describe itself as HTML attributes.
pub trait HtmlOptionsProvider {
    fn html_options(&self) -> Attributes;
}

/// `required` attribute for a required rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredHtmlOptions;

impl HtmlOptionsProvider for RequiredHtmlOptions {
    fn html_options(&self) -> Attributes {
        Attributes::new().with("required", true)
    }
}

/// `type`, `min` and `max` attributes for a number rule.
#[derive(Debug, Clone, Default)]
pub struct NumberHtmlOptions {
    min: Option<Number>,
    max: Option<Number>,
}

impl NumberHtmlOptions {
    /// Creates number options.
    pub const fn new(min: Option<Number>, max: Option<Number>) -> Self {
        Self { min, max }
    }
}

impl HtmlOptionsProvider for NumberHtmlOptions {
    fn html_options(&self) -> Attributes {
        Attributes::new()
            .with("type", "number")
            .with("min", self.min.clone().map_or(Value::Null, Value::Number))
            .with("max", self.max.clone().map_or(Value::Null, Value::Number))
    }
}

/// `minlength` and `maxlength` attributes for a length rule.
#[derive(Debug, Clone, Default)]
pub struct LengthHtmlOptions {
    min: Option<usize>,
    max: Option<usize>,
}

impl LengthHtmlOptions {
    /// Creates length options.
    pub const fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }
}

impl HtmlOptionsProvider for LengthHtmlOptions {
    fn html_options(&self) -> Attributes {
        let mut attrs = Attributes::new();
        if let Some(min) = self.min {
            attrs.set("minlength", min);
        }
        if let Some(max) = self.max {
            attrs.set("maxlength", max);
        }
        attrs
    }
}

/// `pattern` attribute for a regular expression rule.
#[derive(Debug, Clone)]
pub struct PatternHtmlOptions {
    pattern: String,
}

impl PatternHtmlOptions {
    /// Creates pattern options.
    pub const fn new(pattern: String) -> Self {
        Self { pattern }
    }
}

impl HtmlOptionsProvider for PatternHtmlOptions {
    fn html_options(&self) -> Attributes {
        Attributes::new().with("pattern", self.pattern.as_str())
    }
}

/// Turns the validation rules of an attribute into input attributes.
///
/// `widget` is the name of the rendering widget (`"Text"`, `"Number"`,
/// ...), so an enricher can decide which rules apply to which input.
pub trait RulesEnricher: Send + Sync {
    fn enrich(&self, widget: &str, rules: &[ValidationRule]) -> Attributes;
}

impl<F> RulesEnricher for F
where
    F: Fn(&str, &[ValidationRule]) -> Attributes + Send + Sync,
{
    fn enrich(&self, widget: &str, rules: &[ValidationRule]) -> Attributes {
        self(widget, rules)
    }
}

/// A cloneable, shareable [`RulesEnricher`] handle.
#[derive(Clone)]
pub struct SharedEnricher(Arc<dyn RulesEnricher>);

impl SharedEnricher {
    /// Wraps an enricher for sharing between fields.
    pub fn new(enricher: impl RulesEnricher + 'static) -> Self {
        Self(Arc::new(enricher))
    }
}

impl fmt::Debug for SharedEnricher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedEnricher").finish_non_exhaustive()
    }
}

impl RulesEnricher for SharedEnricher {
    fn enrich(&self, widget: &str, rules: &[ValidationRule]) -> Attributes {
        self.0.enrich(widget, rules)
    }
}

/// Enricher used when a theme asks for rule-based attributes and no custom
/// enricher was configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRulesEnricher;

impl RulesEnricher for DefaultRulesEnricher {
    fn enrich(&self, widget: &str, rules: &[ValidationRule]) -> Attributes {
        let mut attrs = Attributes::new();
        for rule in rules {
            let applies = match rule {
                ValidationRule::Required => true,
                ValidationRule::Number { .. } => widget == "Number",
                ValidationRule::Length { .. } | ValidationRule::Pattern { .. } => {
                    matches!(
                        widget,
                        "Text" | "Email" | "Password" | "Search" | "Telephone" | "Url" | "Textarea"
                    )
                }
                ValidationRule::Email => false,
            };
            if applies {
                attrs.merge(&rule.html_options());
            }
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_html_options() {
        let attrs = NumberHtmlOptions::new(Some(1.into()), Some(10.into())).html_options();
        assert_eq!(attrs.render(), r#" type="number" min="1" max="10""#);
    }

    #[test]
    fn test_number_without_bounds() {
        let attrs = ValidationRule::number(None::<i64>, Some(5)).html_options();
        assert_eq!(attrs.get("type"), Some(&Value::from("number")));
        assert_eq!(attrs.render(), r#" type="number" max="5""#);
    }

    #[test]
    fn test_default_enricher() {
        let rules = vec![
            ValidationRule::Required,
            ValidationRule::length(Some(4), Some(40)),
            ValidationRule::number(Some(0), None::<i64>),
        ];
        let text = DefaultRulesEnricher.enrich("Text", &rules);
        assert_eq!(text.render(), r#" maxlength="40" minlength="4" required"#);

        let number = DefaultRulesEnricher.enrich("Number", &rules);
        assert_eq!(number.render(), r#" type="number" required min="0""#);
    }

    #[test]
    fn test_closure_enricher() {
        let enricher = |widget: &str, _: &[ValidationRule]| Attributes::new().with("data-widget", widget);
        assert_eq!(enricher.enrich("Text", &[]).render(), r#" data-widget="Text""#);
    }

    #[test]
    fn test_shared_enricher() {
        let shared = SharedEnricher::new(DefaultRulesEnricher);
        let copy = shared.clone();
        assert_eq!(
            copy.enrich("Text", &[ValidationRule::Required]).render(),
            " required"
        );
    }

    #[test]
    fn test_rule_deserialize() {
        let rule: ValidationRule =
            serde_json::from_str(r#"{"rule": "length", "min": 2, "max": null}"#).unwrap();
        assert_eq!(rule, ValidationRule::length(Some(2), None));
    }
}
