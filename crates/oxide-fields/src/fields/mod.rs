//! Field rendering.
//!
//! A [`Field`] renders a complete labeled block for one attribute:
//! label, input, hint and error, substituted into a token template and
//! optionally wrapped in a container tag. The input markup comes from an
//! [`InputGenerator`], so one renderer type serves every input kind.
//!
//! Fields are immutable values: every setter consumes the field and
//! returns the updated one, render methods only borrow it.

mod blocks;
mod button;
mod checkbox;
mod checkbox_list;
mod fieldset;
mod number;
mod raw;
mod select;
mod text;
mod textarea;

use std::fmt::Display;

use serde_json::Value;
use tracing::debug;

pub(crate) use checkbox_list::selected_values;

pub use blocks::FieldBlocks;
pub use button::Button;
pub use checkbox::Checkbox;
pub use checkbox_list::CheckboxList;
pub use fieldset::Fieldset;
pub use number::NumberInput;
pub use raw::RawInput;
pub use select::Select;
pub use text::{TextInput, TextLike};
pub use textarea::Textarea;

use crate::error::{AttributeError, FieldError, Result};
use crate::form_model::FormModel;
use crate::html::{Attributes, Tag};
use crate::html_options::{DefaultRulesEnricher, RulesEnricher, SharedEnricher};
use crate::input_data::{InputData, PureInputData};
use crate::template::{render_template, Tokens, DEFAULT_TEMPLATE};
use crate::theme::Theme;
use crate::widgets::{ErrorMessage, Hint};

const DEFAULT_TEMPLATE_BEGIN: &str = "{label}\n{input}";
const DEFAULT_TEMPLATE_END: &str = "{input}\n{hint}\n{error}";

static NULL: Value = Value::Null;

/// Produces the input markup of a field.
pub trait InputGenerator: Clone + std::fmt::Debug {
    /// Name used in error messages and for rule enrichment.
    fn widget_name(&self) -> &'static str;

    /// Renders the input for a single-shot render.
    fn generate(&self, ctx: &InputContext<'_>) -> Result<String>;

    /// Renders the `{input}` part of the begin template.
    fn generate_begin(&self, _ctx: &InputContext<'_>) -> Result<String> {
        Ok(String::new())
    }

    /// Renders the `{input}` part of the end template.
    fn generate_end(&self, _ctx: &InputContext<'_>) -> Result<String> {
        Ok(String::new())
    }

    /// Whether the field label is rendered by the input itself.
    fn hides_label(&self) -> bool {
        false
    }

    /// Whether the model placeholder is used when none is set explicitly.
    fn uses_placeholder(&self) -> bool {
        false
    }
}

/// Everything a generator needs to render its input.
#[derive(Debug)]
pub struct InputContext<'a> {
    data: Option<&'a PureInputData>,
    id: Option<String>,
    label: String,
    attributes: Attributes,
}

impl<'a> InputContext<'a> {
    /// Bound input data; fails when nothing was bound.
    pub fn data(&self) -> Result<&'a PureInputData> {
        self.data.ok_or(FieldError::FormModelNotSet)
    }

    /// Current value, `null` when nothing is bound.
    pub fn value(&self) -> &Value {
        self.data.map_or(&NULL, |data| data.value())
    }

    /// Input name, if any.
    pub fn name(&self) -> Option<&str> {
        self.data.and_then(|data| data.name())
    }

    /// Computed input id, `None` when id generation is off.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Resolved label content, empty when the label is hidden.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Input attributes without `id` and `name`.
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Input attributes with `id` and `name` filled in unless set already.
    pub fn input_attributes(&self) -> Attributes {
        let mut attrs = self.attributes.clone();
        if let Some(id) = self.id() {
            attrs.set_default("id", id);
        }
        if let Some(name) = self.name() {
            attrs.set_default("name", name);
        }
        attrs
    }
}

#[derive(Debug, Clone)]
struct LabelPart {
    content: Option<String>,
    attributes: Attributes,
    hidden: bool,
    set_for: bool,
}

#[derive(Debug, Clone)]
struct TextPart {
    content: Option<String>,
    tag: String,
    attributes: Attributes,
}

impl TextPart {
    fn new() -> Self {
        Self {
            content: None,
            tag: "div".to_string(),
            attributes: Attributes::new(),
        }
    }
}

/// A renderable form field.
///
/// ```rust
/// use oxide_fields::{AttributeDef, Field, SimpleFormModel};
///
/// let form = SimpleFormModel::new("LoginForm")
///     .attribute("login", AttributeDef::new().value("admin").label("Login"));
///
/// let html = Field::text()
///     .for_attribute(&form, "login")
///     .add_input_class(["form-control"])
///     .render()
///     .unwrap();
///
/// assert_eq!(
///     html,
///     "<div>\n\
///      <label for=\"loginform-login\">Login</label>\n\
///      <input type=\"text\" id=\"loginform-login\" class=\"form-control\" \
///      name=\"LoginForm[login]\" value=\"admin\">\n\
///      </div>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Field<G> {
    generator: G,
    data: Option<PureInputData>,
    binding_error: Option<AttributeError>,

    template: String,
    template_begin: String,
    template_end: String,
    tokens: Tokens,

    use_container: bool,
    container_tag: String,
    container_attributes: Attributes,

    input_id: Option<String>,
    set_input_id: bool,
    input_attributes: Attributes,
    before_input: String,
    after_input: String,
    input_container_tag: Option<String>,
    input_container_attributes: Attributes,

    label: LabelPart,
    hint: TextPart,
    error: TextPart,

    valid_class: Option<String>,
    invalid_class: Option<String>,
    input_valid_class: Option<String>,
    input_invalid_class: Option<String>,

    enrich_from_rules: bool,
    enricher: Option<SharedEnricher>,
}

impl<G: InputGenerator> Field<G> {
    /// Creates an unthemed field around an input generator.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            data: None,
            binding_error: None,
            template: DEFAULT_TEMPLATE.to_string(),
            template_begin: DEFAULT_TEMPLATE_BEGIN.to_string(),
            template_end: DEFAULT_TEMPLATE_END.to_string(),
            tokens: Tokens::new(),
            use_container: true,
            container_tag: "div".to_string(),
            container_attributes: Attributes::new(),
            input_id: None,
            set_input_id: true,
            input_attributes: Attributes::new(),
            before_input: String::new(),
            after_input: String::new(),
            input_container_tag: None,
            input_container_attributes: Attributes::new(),
            label: LabelPart {
                content: None,
                attributes: Attributes::new(),
                hidden: false,
                set_for: true,
            },
            hint: TextPart::new(),
            error: TextPart::new(),
            valid_class: None,
            invalid_class: None,
            input_valid_class: None,
            input_invalid_class: None,
            enrich_from_rules: false,
            enricher: None,
        }
    }

    /// Creates a field with the defaults of a theme applied.
    pub fn themed(generator: G, theme: &Theme) -> Self {
        Self::new(generator).with_theme(theme)
    }

    /// Applies theme defaults on top of the current settings.
    ///
    /// Call this before per-instance setters; later setters override or
    /// extend what the theme set.
    #[must_use]
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        if let Some(tag) = &theme.container_tag {
            self.container_tag.clone_from(tag);
        }
        self.container_attributes.merge(&theme.container_attributes);
        self.container_attributes.add_class(&theme.container_class);
        if let Some(use_container) = theme.use_container {
            self.use_container = use_container;
        }
        if let Some(template) = &theme.template {
            self.template.clone_from(template);
        }
        if let Some(template) = &theme.template_begin {
            self.template_begin.clone_from(template);
        }
        if let Some(template) = &theme.template_end {
            self.template_end.clone_from(template);
        }
        self.tokens.merge(&theme.tokens);

        if theme.input_container_tag.is_some() {
            self.input_container_tag.clone_from(&theme.input_container_tag);
        }
        self.input_container_attributes
            .merge(&theme.input_container_attributes);
        self.input_container_attributes
            .add_class(&theme.input_container_class);
        self.input_attributes.merge(&theme.input_attributes);
        self.input_attributes.add_class(&theme.input_class);

        self.label.attributes.merge(&theme.label_attributes);
        self.label.attributes.add_class(&theme.label_class);
        if let Some(tag) = &theme.hint_tag {
            self.hint.tag.clone_from(tag);
        }
        self.hint.attributes.merge(&theme.hint_attributes);
        self.hint.attributes.add_class(&theme.hint_class);
        if let Some(tag) = &theme.error_tag {
            self.error.tag.clone_from(tag);
        }
        self.error.attributes.merge(&theme.error_attributes);
        self.error.attributes.add_class(&theme.error_class);

        for (slot, class) in [
            (&mut self.valid_class, &theme.valid_class),
            (&mut self.invalid_class, &theme.invalid_class),
            (&mut self.input_valid_class, &theme.input_valid_class),
            (&mut self.input_invalid_class, &theme.input_invalid_class),
        ] {
            if class.is_some() {
                slot.clone_from(class);
            }
        }
        self.enrich_from_rules = theme.enrich_from_validation_rules;
        self
    }

    /// The input generator of this field.
    pub const fn generator(&self) -> &G {
        &self.generator
    }

    // Binding

    /// Binds the field to one attribute of a form model.
    ///
    /// An attribute the model cannot resolve makes every render fail.
    #[must_use]
    pub fn for_attribute(mut self, model: &dyn FormModel, attribute: &str) -> Self {
        self.binding_error = model.check_attribute(attribute).err();
        self.data = Some(PureInputData::from_model(model, attribute));
        self
    }

    /// Binds the field to explicit input data.
    #[must_use]
    pub fn input_data(mut self, data: &dyn InputData) -> Self {
        self.binding_error = None;
        self.data = Some(PureInputData::from_input(data));
        self
    }

    /// Sets the input name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.data.get_or_insert_with(PureInputData::new).set_name(name.into());
        self
    }

    /// Sets the input value.
    #[must_use]
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.data.get_or_insert_with(PureInputData::new).set_value(value.into());
        self
    }

    // Layout

    /// Sets the single-shot layout template.
    #[must_use]
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Sets the template rendered by [`Field::render_begin`].
    #[must_use]
    pub fn template_begin(mut self, template: impl Into<String>) -> Self {
        self.template_begin = template.into();
        self
    }

    /// Sets the template rendered by [`Field::render_end`].
    #[must_use]
    pub fn template_end(mut self, template: impl Into<String>) -> Self {
        self.template_end = template.into();
        self
    }

    /// Registers a custom token.
    pub fn token(mut self, name: impl Into<String>, value: impl Display) -> Result<Self> {
        self.tokens.insert(name, value)?;
        Ok(self)
    }

    /// Registers several custom tokens.
    pub fn tokens<I, N, V>(mut self, tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Display,
    {
        for (name, value) in tokens {
            self.tokens.insert(name, value)?;
        }
        Ok(self)
    }

    /// Whether the field is wrapped in its container tag.
    #[must_use]
    pub const fn use_container(mut self, use_container: bool) -> Self {
        self.use_container = use_container;
        self
    }

    /// Renders the field without its container tag.
    #[must_use]
    pub const fn without_container(self) -> Self {
        self.use_container(false)
    }

    /// Sets the container tag name.
    pub fn container_tag(mut self, tag: &str) -> Result<Self> {
        self.container_tag = Tag::new(tag)?.name().to_string();
        Ok(self)
    }

    /// Replaces the container attributes.
    #[must_use]
    pub fn container_attributes(mut self, attributes: Attributes) -> Self {
        self.container_attributes = attributes;
        self
    }

    /// Merges attributes into the container.
    #[must_use]
    pub fn add_container_attributes(mut self, attributes: &Attributes) -> Self {
        self.container_attributes.merge(attributes);
        self
    }

    /// Sets the container `id`; `None` removes it.
    #[must_use]
    pub fn container_id(mut self, id: Option<&str>) -> Self {
        self.container_attributes.set("id", id);
        self
    }

    /// Replaces the container classes.
    #[must_use]
    pub fn container_class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.container_attributes.replace_class(classes);
        self
    }

    /// Appends container classes.
    #[must_use]
    pub fn add_container_class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.container_attributes.add_class(classes);
        self
    }

    // Input

    /// Overrides the computed input id.
    #[must_use]
    pub fn input_id(mut self, id: Option<&str>) -> Self {
        self.input_id = id.map(str::to_string);
        self
    }

    /// Whether the input gets an `id` attribute at all.
    #[must_use]
    pub const fn set_input_id(mut self, value: bool) -> Self {
        self.set_input_id = value;
        self
    }

    /// Replaces the input attributes.
    #[must_use]
    pub fn input_attributes(mut self, attributes: Attributes) -> Self {
        self.input_attributes = attributes;
        self
    }

    /// Merges attributes into the input.
    #[must_use]
    pub fn add_input_attributes(mut self, attributes: &Attributes) -> Self {
        self.input_attributes.merge(attributes);
        self
    }

    /// Replaces the input classes.
    #[must_use]
    pub fn input_class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.input_attributes.replace_class(classes);
        self
    }

    /// Appends input classes.
    #[must_use]
    pub fn add_input_class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.input_attributes.add_class(classes);
        self
    }

    /// Markup placed right before the input.
    #[must_use]
    pub fn before_input(mut self, html: impl Into<String>) -> Self {
        self.before_input = html.into();
        self
    }

    /// Markup placed right after the input.
    #[must_use]
    pub fn after_input(mut self, html: impl Into<String>) -> Self {
        self.after_input = html.into();
        self
    }

    /// Wraps the input in a tag; `None` removes the wrapper.
    pub fn input_container_tag(mut self, tag: Option<&str>) -> Result<Self> {
        self.input_container_tag = match tag {
            Some(tag) => Some(Tag::new(tag)?.name().to_string()),
            None => None,
        };
        Ok(self)
    }

    /// Replaces the input wrapper attributes.
    #[must_use]
    pub fn input_container_attributes(mut self, attributes: Attributes) -> Self {
        self.input_container_attributes = attributes;
        self
    }

    /// Merges attributes into the input wrapper.
    #[must_use]
    pub fn add_input_container_attributes(mut self, attributes: &Attributes) -> Self {
        self.input_container_attributes.merge(attributes);
        self
    }

    /// Replaces the input wrapper classes.
    #[must_use]
    pub fn input_container_class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.input_container_attributes.replace_class(classes);
        self
    }

    /// Appends input wrapper classes.
    #[must_use]
    pub fn add_input_container_class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.input_container_attributes.add_class(classes);
        self
    }

    // Label

    /// Sets the label content; an empty string renders no label.
    #[must_use]
    pub fn label(mut self, content: impl Into<String>) -> Self {
        self.label.content = Some(content.into());
        self
    }

    /// Suppresses the label part.
    #[must_use]
    pub const fn hide_label(mut self) -> Self {
        self.label.hidden = true;
        self
    }

    /// Whether the label gets a `for` attribute pointing at the input.
    #[must_use]
    pub const fn set_label_for(mut self, value: bool) -> Self {
        self.label.set_for = value;
        self
    }

    /// Sets the label `id`.
    #[must_use]
    pub fn label_id(mut self, id: Option<&str>) -> Self {
        self.label.attributes.set("id", id);
        self
    }

    /// Replaces the label attributes.
    #[must_use]
    pub fn label_attributes(mut self, attributes: Attributes) -> Self {
        self.label.attributes = attributes;
        self
    }

    /// Merges attributes into the label.
    #[must_use]
    pub fn add_label_attributes(mut self, attributes: &Attributes) -> Self {
        self.label.attributes.merge(attributes);
        self
    }

    /// Replaces the label classes.
    #[must_use]
    pub fn label_class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.label.attributes.replace_class(classes);
        self
    }

    /// Appends label classes.
    #[must_use]
    pub fn add_label_class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.label.attributes.add_class(classes);
        self
    }

    // Hint

    /// Sets the hint content; an empty string renders no hint.
    #[must_use]
    pub fn hint(mut self, content: impl Into<String>) -> Self {
        self.hint.content = Some(content.into());
        self
    }

    /// Sets the hint tag name; an empty name fails.
    pub fn hint_tag(mut self, tag: &str) -> Result<Self> {
        self.hint.tag = Tag::new(tag)?.name().to_string();
        Ok(self)
    }

    /// Sets the hint `id`.
    #[must_use]
    pub fn hint_id(mut self, id: Option<&str>) -> Self {
        self.hint.attributes.set("id", id);
        self
    }

    /// Replaces the hint attributes.
    #[must_use]
    pub fn hint_attributes(mut self, attributes: Attributes) -> Self {
        self.hint.attributes = attributes;
        self
    }

    /// Merges attributes into the hint.
    #[must_use]
    pub fn add_hint_attributes(mut self, attributes: &Attributes) -> Self {
        self.hint.attributes.merge(attributes);
        self
    }

    /// Replaces the hint classes.
    #[must_use]
    pub fn hint_class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.hint.attributes.replace_class(classes);
        self
    }

    /// Appends hint classes.
    #[must_use]
    pub fn add_hint_class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.hint.attributes.add_class(classes);
        self
    }

    // Error

    /// Sets the error content; an empty string renders no error.
    #[must_use]
    pub fn error(mut self, content: impl Into<String>) -> Self {
        self.error.content = Some(content.into());
        self
    }

    /// Sets the error tag name; an empty name fails.
    pub fn error_tag(mut self, tag: &str) -> Result<Self> {
        self.error.tag = Tag::new(tag)?.name().to_string();
        Ok(self)
    }

    /// Sets the error `id`.
    #[must_use]
    pub fn error_id(mut self, id: Option<&str>) -> Self {
        self.error.attributes.set("id", id);
        self
    }

    /// Replaces the error attributes.
    #[must_use]
    pub fn error_attributes(mut self, attributes: Attributes) -> Self {
        self.error.attributes = attributes;
        self
    }

    /// Merges attributes into the error.
    #[must_use]
    pub fn add_error_attributes(mut self, attributes: &Attributes) -> Self {
        self.error.attributes.merge(attributes);
        self
    }

    /// Replaces the error classes.
    #[must_use]
    pub fn error_class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.error.attributes.replace_class(classes);
        self
    }

    /// Appends error classes.
    #[must_use]
    pub fn add_error_class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.error.attributes.add_class(classes);
        self
    }

    // Validation state

    /// Container class used once the attribute validated without errors.
    #[must_use]
    pub fn valid_class(mut self, class: Option<&str>) -> Self {
        self.valid_class = class.map(str::to_string);
        self
    }

    /// Container class used when the attribute has validation errors.
    #[must_use]
    pub fn invalid_class(mut self, class: Option<&str>) -> Self {
        self.invalid_class = class.map(str::to_string);
        self
    }

    /// Input class used once the attribute validated without errors.
    #[must_use]
    pub fn input_valid_class(mut self, class: Option<&str>) -> Self {
        self.input_valid_class = class.map(str::to_string);
        self
    }

    /// Input class used when the attribute has validation errors.
    #[must_use]
    pub fn input_invalid_class(mut self, class: Option<&str>) -> Self {
        self.input_invalid_class = class.map(str::to_string);
        self
    }

    /// Whether validation rules of the attribute become input attributes.
    #[must_use]
    pub const fn enrich_from_validation_rules(mut self, value: bool) -> Self {
        self.enrich_from_rules = value;
        self
    }

    /// Sets the enricher used for rule-based input attributes.
    #[must_use]
    pub fn rules_enricher(mut self, enricher: SharedEnricher) -> Self {
        self.enricher = Some(enricher);
        self
    }

    // Rendering

    /// Renders the whole field.
    pub fn render(&self) -> Result<String> {
        debug!(widget = self.generator.widget_name(), "rendering field");
        self.check_binding()?;
        let ctx = self.input_context();
        let mut parts = self.common_parts();
        parts.set_part("{input}", self.input_block(&ctx)?);
        let content = render_template(&self.template, &parts);
        if !self.use_container {
            return Ok(content);
        }
        let tag = self.container();
        let mut html = tag.open();
        if !content.is_empty() {
            html.push('\n');
            html.push_str(&content);
        }
        html.push('\n');
        html.push_str(&tag.close());
        Ok(html)
    }

    /// Renders the opening half of the field: the container open tag and
    /// the begin template.
    pub fn render_begin(&self) -> Result<String> {
        self.check_binding()?;
        let ctx = self.input_context();
        let mut parts = self.common_parts();
        parts.set_part("{input}", self.generator.generate_begin(&ctx)?);
        let content = render_template(&self.template_begin, &parts);
        if !self.use_container {
            return Ok(content);
        }
        let mut html = self.container().open();
        if !content.is_empty() {
            html.push('\n');
            html.push_str(&content);
        }
        Ok(html)
    }

    /// Renders the closing half of the field: the end template and the
    /// container close tag.
    pub fn render_end(&self) -> Result<String> {
        self.check_binding()?;
        let ctx = self.input_context();
        let mut parts = self.common_parts();
        parts.set_part("{input}", self.generator.generate_end(&ctx)?);
        let content = render_template(&self.template_end, &parts);
        if !self.use_container {
            return Ok(content);
        }
        let mut html = String::new();
        if !content.is_empty() {
            html.push_str(&content);
            html.push('\n');
        }
        html.push_str(&self.container().close());
        Ok(html)
    }

    fn check_binding(&self) -> Result<()> {
        match &self.binding_error {
            Some(err) => Err(err.clone().into()),
            None => Ok(()),
        }
    }

    fn common_parts(&self) -> Tokens {
        let mut parts = self.tokens.clone();
        parts.set_part("{label}", self.render_label());
        parts.set_part("{hint}", self.render_hint());
        parts.set_part("{error}", self.render_error());
        parts
    }

    fn computed_input_id(&self) -> Option<String> {
        if !self.set_input_id {
            return None;
        }
        self.input_id.clone().or_else(|| {
            self.data
                .as_ref()
                .and_then(|data| data.id())
                .map(str::to_string)
        })
    }

    fn label_content(&self) -> String {
        self.label
            .content
            .clone()
            .or_else(|| {
                self.data
                    .as_ref()
                    .and_then(|data| data.label())
                    .map(str::to_string)
            })
            .unwrap_or_default()
    }

    /// Validation outcome: `None` before validation, then whether the
    /// attribute is free of errors.
    fn validation_state(&self) -> Option<bool> {
        self.data
            .as_ref()
            .filter(|data| data.is_validated())
            .map(|data| data.validation_errors().is_empty())
    }

    fn input_context(&self) -> InputContext<'_> {
        let data = self.data.as_ref();
        let mut attributes = Attributes::new();
        if self.enrich_from_rules {
            if let Some(data) = data {
                let widget = self.generator.widget_name();
                let enriched = match &self.enricher {
                    Some(enricher) => enricher.enrich(widget, data.validation_rules()),
                    None => DefaultRulesEnricher.enrich(widget, data.validation_rules()),
                };
                attributes.merge(&enriched);
            }
        }
        attributes.merge(&self.input_attributes);

        let state_class = match self.validation_state() {
            Some(true) => self.input_valid_class.as_deref(),
            Some(false) => self.input_invalid_class.as_deref(),
            None => None,
        };
        if let Some(class) = state_class {
            attributes.add_class([class]);
        }

        if self.generator.uses_placeholder() && !attributes.contains("placeholder") {
            if let Some(placeholder) = data
                .and_then(|data| data.placeholder())
                .filter(|p| !p.is_empty())
            {
                attributes.set("placeholder", placeholder);
            }
        }

        InputContext {
            data,
            id: self.computed_input_id(),
            label: if self.label.hidden {
                String::new()
            } else {
                self.label_content()
            },
            attributes,
        }
    }

    fn input_block(&self, ctx: &InputContext<'_>) -> Result<String> {
        let input = self.generator.generate(ctx)?;
        let inner = format!("{}{}{}", self.before_input, input, self.after_input);
        Ok(match &self.input_container_tag {
            Some(tag) => Tag::named(tag.as_str())
                .attributes(&self.input_container_attributes)
                .content(inner)
                .encode(false)
                .render(),
            None => inner,
        })
    }

    fn container(&self) -> Tag {
        let mut attributes = self.container_attributes.clone();
        let state_class = match self.validation_state() {
            Some(true) => self.valid_class.as_deref(),
            Some(false) => self.invalid_class.as_deref(),
            None => None,
        };
        if let Some(class) = state_class {
            attributes.add_class([class]);
        }
        Tag::named(self.container_tag.as_str()).attributes(&attributes)
    }

    fn render_label(&self) -> String {
        if self.label.hidden || self.generator.hides_label() {
            return String::new();
        }
        let content = self.label_content();
        if content.is_empty() {
            return String::new();
        }
        let mut tag = Tag::named("label").attributes(&self.label.attributes);
        if self.label.set_for && !tag.attrs().contains("for") {
            if let Some(id) = self.computed_input_id() {
                tag = tag.attr("for", id);
            }
        }
        tag.content(content).render()
    }

    fn render_hint(&self) -> String {
        let content = self.hint.content.clone().or_else(|| {
            self.data
                .as_ref()
                .and_then(|data| data.hint())
                .map(str::to_string)
        });
        Hint::part(&self.hint.tag, &self.hint.attributes, content.unwrap_or_default()).render()
    }

    fn render_error(&self) -> String {
        let content = self.error.content.clone().or_else(|| {
            self.data
                .as_ref()
                .and_then(|data| data.validation_errors().first().cloned())
        });
        ErrorMessage::part(&self.error.tag, &self.error.attributes, content.unwrap_or_default())
            .render()
    }
}

/// Shorthand constructors.
impl Field<TextInput> {
    /// A `type="text"` input field.
    pub fn text() -> Self {
        Self::new(TextInput::text())
    }

    /// A `type="email"` input field.
    pub fn email() -> Self {
        Self::new(TextInput::email())
    }

    /// A `type="password"` input field.
    pub fn password() -> Self {
        Self::new(TextInput::password())
    }

    /// A `type="search"` input field.
    pub fn search() -> Self {
        Self::new(TextInput::search())
    }

    /// A `type="tel"` input field.
    pub fn tel() -> Self {
        Self::new(TextInput::tel())
    }

    /// A `type="url"` input field.
    pub fn url() -> Self {
        Self::new(TextInput::url())
    }
}

impl Field<NumberInput> {
    /// A `type="number"` input field.
    pub fn number() -> Self {
        Self::new(NumberInput::new())
    }
}

impl Field<Textarea> {
    /// A `<textarea>` field.
    pub fn textarea() -> Self {
        Self::new(Textarea::new())
    }
}

impl Field<Checkbox> {
    /// A checkbox field with a hidden unchecked value.
    pub fn checkbox() -> Self {
        Self::new(Checkbox::new())
    }
}

impl Field<CheckboxList> {
    /// A group of checkboxes built from `(value, label)` pairs.
    pub fn checkbox_list<I, V, L>(items: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        Self::new(CheckboxList::new(items))
    }
}

impl Field<Select> {
    /// A `<select>` field built from `(value, label)` pairs.
    pub fn select<I, V, L>(items: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        Self::new(Select::new(items))
    }
}

impl Field<Button> {
    /// A `<button type="submit">` field.
    pub fn submit_button() -> Self {
        Self::new(Button::submit())
    }

    /// A `<button type="reset">` field.
    pub fn reset_button() -> Self {
        Self::new(Button::reset())
    }

    /// A `<button type="button">` field.
    pub fn button() -> Self {
        Self::new(Button::button())
    }
}

impl Field<Fieldset> {
    /// A `<fieldset>` field, usually rendered in begin/end halves.
    pub fn fieldset() -> Self {
        Self::new(Fieldset::new())
    }
}

impl Field<RawInput> {
    /// A field whose input is pre-rendered markup.
    pub fn raw(html: impl Into<String>) -> Self {
        Self::new(RawInput::new(html))
    }
}

/// Renders a scalar JSON value as an attribute/option string.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some("0".to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
