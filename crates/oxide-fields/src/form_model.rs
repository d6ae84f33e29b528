//! The form model contract and an in-memory implementation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AttributeError;
use crate::form_errors::FormErrors;
use crate::html_form::humanize;
use crate::html_options::ValidationRule;

/// A form model: attribute values, labels, hints, placeholders and the
/// validation errors of one submitted form.
///
/// Attribute names may be dotted paths (`user.login`) when the model
/// supports nested attributes.
pub trait FormModel {
    /// Name used to scope input names (`Form[attribute]`). May be empty.
    fn form_name(&self) -> &str;

    /// Current value of an attribute, `None` if the attribute is unknown.
    fn attribute_value(&self, attribute: &str) -> Option<&Value>;

    /// Label of an attribute; unknown attributes get a humanized name.
    fn attribute_label(&self, attribute: &str) -> String;

    /// Hint of an attribute, empty when none is declared.
    fn attribute_hint(&self, attribute: &str) -> String;

    fn attribute_placeholder(&self, attribute: &str) -> Option<String>;

    /// Validation rules declared for an attribute.
    fn attribute_rules(&self, _attribute: &str) -> &[ValidationRule] {
        &[]
    }

    fn has_attribute(&self, attribute: &str) -> bool;

    /// Resolves an attribute, reporting why it cannot be bound.
    fn check_attribute(&self, attribute: &str) -> Result<(), AttributeError> {
        if self.has_attribute(attribute) {
            Ok(())
        } else {
            Err(AttributeError::Unknown(attribute.to_string()))
        }
    }

    fn form_errors(&self) -> &FormErrors;

    /// Whether validation has run on the current values.
    fn is_validated(&self) -> bool {
        false
    }

    fn has_errors(&self, attribute: Option<&str>) -> bool {
        self.form_errors().has_errors(attribute)
    }

    fn first_error(&self, attribute: &str) -> &str {
        self.form_errors().first_error(attribute)
    }

    fn errors(&self, attribute: &str) -> &[String] {
        self.form_errors().errors(attribute)
    }

    fn error_summary(&self) -> Vec<&str> {
        self.form_errors().error_summary()
    }
}

/// Declared type of an attribute. Loaded values are cast to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    Bool,
    Int,
    Float,
    String,
}

impl AttributeType {
    /// Casts a scalar to this type. `null`, arrays and objects pass through.
    ///
    /// Strings that do not parse as numbers become zero; `""`, `"0"` and
    /// `"false"` are the false strings.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn cast(self, value: &Value) -> Value {
        match (self, value) {
            (_, Value::Null | Value::Array(_) | Value::Object(_)) => value.clone(),
            (Self::Bool, Value::Bool(_))
            | (Self::String, Value::String(_))
            | (Self::Float, Value::Number(_)) => value.clone(),
            (Self::Int, Value::Number(n)) if n.is_i64() || n.is_u64() => value.clone(),

            (Self::Bool, Value::Number(n)) => Value::Bool(n.as_f64().is_some_and(|f| f != 0.0)),
            (Self::Bool, Value::String(s)) => Value::Bool(
                !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false")),
            ),

            (Self::Int, Value::Number(n)) => Value::from(n.as_f64().unwrap_or_default() as i64),
            (Self::Int, Value::Bool(b)) => Value::from(i64::from(*b)),
            (Self::Int, Value::String(s)) => {
                let s = s.trim();
                Value::from(s.parse::<i64>().unwrap_or_else(|_| {
                    s.parse::<f64>().map_or(0, |f| f as i64)
                }))
            }

            (Self::Float, Value::Bool(b)) => Value::from(if *b { 1.0 } else { 0.0 }),
            (Self::Float, Value::String(s)) => Value::from(s.trim().parse::<f64>().unwrap_or(0.0)),

            (Self::String, Value::Bool(b)) => Value::from(if *b { "1" } else { "" }),
            (Self::String, Value::Number(n)) => Value::from(n.to_string()),
        }
    }
}

/// Declaration of one attribute of a [`SimpleFormModel`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeDef {
    value: Value,
    label: Option<String>,
    hint: Option<String>,
    placeholder: Option<String>,
    rules: Vec<ValidationRule>,
    kind: Option<AttributeType>,
    nested: Option<Box<SimpleFormModel>>,
}

impl AttributeDef {
    /// Creates a declaration with a `null` value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial value.
    #[must_use]
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the label; defaults to the humanized name.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the hint text.
    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Adds a validation rule.
    #[must_use]
    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Declares the attribute type; loaded values are cast to it.
    #[must_use]
    pub const fn typed(mut self, kind: AttributeType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Makes this a nested attribute backed by another model, reachable
    /// as `attribute.child`.
    #[must_use]
    pub fn nested(mut self, model: SimpleFormModel) -> Self {
        self.nested = Some(Box::new(model));
        self
    }

    fn assign(&mut self, value: &Value) {
        self.value = match self.kind {
            Some(kind) => kind.cast(value),
            None => value.clone(),
        };
    }
}

/// An attribute resolved from a possibly dotted path.
enum Resolved<'m, 'a> {
    Declared(&'m AttributeDef, &'a str),
    /// A key of an object value reached through a dotted path.
    Member(&'m Value, &'a str),
}

impl<'m> Resolved<'m, '_> {
    const fn value(&self) -> &'m Value {
        match *self {
            Self::Declared(def, _) => &def.value,
            Self::Member(value, _) => value,
        }
    }

    fn label(&self) -> String {
        match *self {
            Self::Declared(def, name) => def.label.clone().unwrap_or_else(|| humanize(name)),
            Self::Member(_, name) => humanize(name),
        }
    }

    fn def(&self) -> Option<&'m AttributeDef> {
        match *self {
            Self::Declared(def, _) => Some(def),
            Self::Member(..) => None,
        }
    }
}

/// An in-memory form model.
///
/// ```rust
/// use oxide_fields::{AttributeDef, FormModel, SimpleFormModel};
///
/// let mut form = SimpleFormModel::new("LoginForm")
///     .attribute("login", AttributeDef::new().label("Login:"))
///     .attribute("password", AttributeDef::new());
///
/// let loaded = form.load(&serde_json::json!({
///     "LoginForm": {"login": "admin", "password": "123456"}
/// }));
/// assert!(loaded);
/// assert_eq!(form.attribute_label("password"), "Password");
/// assert_eq!(form.attribute_value("login"), Some(&serde_json::json!("admin")));
/// ```
///
/// Nested models are addressed with dotted paths:
///
/// ```rust
/// use oxide_fields::{AttributeDef, FormModel, SimpleFormModel};
///
/// let user = SimpleFormModel::new("User")
///     .attribute("login", AttributeDef::new().label("Login:"));
/// let mut form = SimpleFormModel::new("Signup")
///     .attribute("user", AttributeDef::new().nested(user));
///
/// form.load(&serde_json::json!({"Signup": {"user.login": "admin"}}));
/// assert_eq!(form.attribute_label("user.login"), "Login:");
/// assert_eq!(form.attribute_value("user.login"), Some(&serde_json::json!("admin")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleFormModel {
    form_name: String,
    attributes: IndexMap<String, AttributeDef>,
    errors: FormErrors,
    validated: bool,
}

impl SimpleFormModel {
    /// Creates an empty model with the given form name.
    pub fn new(form_name: impl Into<String>) -> Self {
        Self {
            form_name: form_name.into(),
            ..Self::default()
        }
    }

    /// Declares an attribute.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, def: AttributeDef) -> Self {
        self.attributes.insert(name.into(), def);
        self
    }

    /// Sets an attribute value, declaring the attribute if needed.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<Value>) {
        self.attributes.entry(name.to_string()).or_default().value = value.into();
    }

    /// Loads submitted data scoped by the form name.
    ///
    /// With a form name, values are read from `data[form_name]`; without
    /// one, from `data` itself. Returns whether the scoped data was
    /// present.
    pub fn load(&mut self, data: &Value) -> bool {
        let scope = self.form_name.clone();
        self.load_with_scope(data, &scope)
    }

    /// Loads submitted data read from `data[scope]`, or from `data` itself
    /// when `scope` is empty.
    ///
    /// Unknown attributes are ignored. Dotted keys (`user.login`) reach
    /// nested attributes, and values are cast to declared types.
    pub fn load_with_scope(&mut self, data: &Value, scope: &str) -> bool {
        let scoped = if scope.is_empty() {
            data.as_object().filter(|map| !map.is_empty())
        } else {
            data.get(scope).and_then(Value::as_object)
        };
        let Some(values) = scoped else {
            return false;
        };
        for (name, value) in values {
            self.assign(name, value);
        }
        true
    }

    /// Returns the model behind a nested attribute.
    pub fn nested(&self, attribute: &str) -> Option<&Self> {
        self.attributes
            .get(attribute)
            .and_then(|def| def.nested.as_deref())
    }

    /// Resolves an attribute, failing like a bound field would.
    pub fn try_attribute_value(&self, attribute: &str) -> Result<&Value, AttributeError> {
        self.resolve(attribute).map(|resolved| resolved.value())
    }

    /// Mutable access to the validation errors.
    pub fn form_errors_mut(&mut self) -> &mut FormErrors {
        &mut self.errors
    }

    /// Adds an error for an attribute.
    pub fn add_error(&mut self, attribute: &str, message: impl Into<String>) {
        self.errors.add_error(attribute, message);
    }

    /// Records that validation ran, so fields show valid/invalid state.
    pub fn mark_validated(&mut self) {
        self.validated = true;
    }

    /// Returns every declared label, in declaration order.
    pub fn attribute_labels(&self) -> IndexMap<&str, String> {
        self.attributes
            .keys()
            .map(|name| (name.as_str(), self.attribute_label(name)))
            .collect()
    }

    fn resolve<'m, 'a>(&'m self, attribute: &'a str) -> Result<Resolved<'m, 'a>, AttributeError> {
        if let Some(def) = self.attributes.get(attribute) {
            return Ok(Resolved::Declared(def, attribute));
        }
        let Some((head, rest)) = attribute.split_once('.') else {
            return Err(AttributeError::Unknown(attribute.to_string()));
        };
        let def = self
            .attributes
            .get(head)
            .ok_or_else(|| AttributeError::Unknown(head.to_string()))?;
        if let Some(nested) = &def.nested {
            return nested.resolve(rest);
        }
        match &def.value {
            Value::Object(map) => map
                .get(rest)
                .map(|value| Resolved::Member(value, rest))
                .ok_or_else(|| AttributeError::Unknown(rest.to_string())),
            _ => Err(AttributeError::NotNested(head.to_string())),
        }
    }

    fn assign(&mut self, attribute: &str, value: &Value) -> bool {
        if let Some(def) = self.attributes.get_mut(attribute) {
            def.assign(value);
            return true;
        }
        let Some((head, rest)) = attribute.split_once('.') else {
            return false;
        };
        let Some(def) = self.attributes.get_mut(head) else {
            return false;
        };
        if let Some(nested) = def.nested.as_mut() {
            return nested.assign(rest, value);
        }
        match def.value.as_object_mut().and_then(|map| map.get_mut(rest)) {
            Some(slot) => {
                *slot = value.clone();
                true
            }
            None => false,
        }
    }
}

impl FormModel for SimpleFormModel {
    fn form_name(&self) -> &str {
        &self.form_name
    }

    fn attribute_value(&self, attribute: &str) -> Option<&Value> {
        self.resolve(attribute).ok().map(|resolved| resolved.value())
    }

    fn attribute_label(&self, attribute: &str) -> String {
        self.resolve(attribute)
            .map_or_else(|_| humanize(attribute), |resolved| resolved.label())
    }

    fn attribute_hint(&self, attribute: &str) -> String {
        self.resolve(attribute)
            .ok()
            .and_then(|resolved| resolved.def())
            .and_then(|def| def.hint.clone())
            .unwrap_or_default()
    }

    fn attribute_placeholder(&self, attribute: &str) -> Option<String> {
        self.resolve(attribute)
            .ok()
            .and_then(|resolved| resolved.def())
            .and_then(|def| def.placeholder.clone())
    }

    fn attribute_rules(&self, attribute: &str) -> &[ValidationRule] {
        self.resolve(attribute)
            .ok()
            .and_then(|resolved| resolved.def())
            .map(|def| def.rules.as_slice())
            .unwrap_or(&[])
    }

    fn has_attribute(&self, attribute: &str) -> bool {
        self.resolve(attribute).is_ok()
    }

    fn check_attribute(&self, attribute: &str) -> Result<(), AttributeError> {
        self.resolve(attribute).map(|_| ())
    }

    fn form_errors(&self) -> &FormErrors {
        &self.errors
    }

    fn is_validated(&self) -> bool {
        self.validated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn login_form() -> SimpleFormModel {
        SimpleFormModel::new("LoginForm")
            .attribute(
                "login",
                AttributeDef::new()
                    .label("Login:")
                    .hint("Write your id or email.")
                    .placeholder("Type Usernamer or Email."),
            )
            .attribute(
                "password",
                AttributeDef::new()
                    .label("Password:")
                    .hint("Write your password.")
                    .placeholder("Type Password."),
            )
            .attribute("rememberMe", AttributeDef::new().value(false))
    }

    #[test]
    fn test_labels_and_hints() {
        let form = login_form();
        assert_eq!(form.attribute_label("login"), "Login:");
        assert_eq!(form.attribute_label("testme"), "Testme");
        assert_eq!(form.attribute_hint("password"), "Write your password.");
        assert_eq!(form.attribute_hint("noExist"), "");
        assert_eq!(
            form.attribute_placeholder("login").as_deref(),
            Some("Type Usernamer or Email.")
        );
        assert_eq!(form.attribute_placeholder("noExist"), None);
    }

    #[test]
    fn test_attribute_labels() {
        let form = login_form();
        let labels: Vec<_> = form.attribute_labels().into_iter().collect();
        assert_eq!(
            labels,
            vec![
                ("login", "Login:".to_string()),
                ("password", "Password:".to_string()),
                ("rememberMe", "Remember Me".to_string()),
            ]
        );
    }

    #[test]
    fn test_has_attribute() {
        let form = login_form();
        assert!(form.has_attribute("rememberMe"));
        assert!(!form.has_attribute("noExist"));
    }

    #[test]
    fn test_load() {
        let mut form = login_form();
        let data = json!({
            "LoginForm": {
                "login": "admin",
                "password": "123456",
                "rememberMe": true,
                "noExist": "noExist",
            }
        });
        assert!(form.load(&data));
        assert_eq!(form.attribute_value("login"), Some(&json!("admin")));
        assert_eq!(form.attribute_value("rememberMe"), Some(&json!(true)));
        assert!(!form.has_attribute("noExist"));
    }

    #[test]
    fn test_failed_load() {
        let mut form = login_form();
        assert!(!form.load(&json!({"LoginForm2": {"login": "admin"}})));
        assert!(!form.load(&json!({})));

        let mut anonymous = SimpleFormModel::new("");
        assert!(anonymous.load(&json!({"LoginForm2": {"login": "admin"}})));
        assert!(!anonymous.load(&json!({})));
    }

    #[test]
    fn test_set_attribute() {
        let mut form = SimpleFormModel::new("");
        form.set_attribute("property", json!([]));
        assert_eq!(form.attribute_value("property"), Some(&json!([])));
        form.set_attribute("property", 1.2563);
        assert_eq!(form.attribute_value("property"), Some(&json!(1.2563)));
    }

    #[test]
    fn test_errors() {
        let mut form = login_form();
        form.add_error("password", "Invalid password.");
        form.form_errors_mut()
            .add_error("form", "Invalid username and/or password.");
        assert!(form.has_errors(None));
        assert_eq!(form.first_error("password"), "Invalid password.");
        assert_eq!(
            form.first_error("form"),
            "Invalid username and/or password."
        );
        assert_eq!(form.error_summary().len(), 2);
    }

    fn nested_form() -> SimpleFormModel {
        SimpleFormModel::new("FormWithNestedAttribute")
            .attribute("id", AttributeDef::new())
            .attribute("user", AttributeDef::new().nested(login_form()))
            .attribute("profile", AttributeDef::new().value("x"))
            .attribute("meta", AttributeDef::new().value(json!({"login": "x"})))
    }

    #[test]
    fn test_nested_attribute_lookup() {
        let mut form = nested_form();
        assert!(form.load(&json!({"FormWithNestedAttribute": {"user.login": "admin"}})));
        assert_eq!(form.attribute_value("user.login"), Some(&json!("admin")));
        assert_eq!(
            form.nested("user").and_then(|user| user.attribute_value("login")),
            Some(&json!("admin"))
        );
        assert_eq!(form.attribute_label("user.login"), "Login:");
        assert_eq!(form.attribute_hint("user.login"), "Write your id or email.");
        assert_eq!(
            form.attribute_placeholder("user.login").as_deref(),
            Some("Type Usernamer or Email.")
        );
        assert!(form.has_attribute("user.password"));
    }

    #[test]
    fn test_nested_attribute_errors() {
        let form = nested_form();
        assert_eq!(
            form.try_attribute_value("profile.user"),
            Err(AttributeError::NotNested("profile".to_string()))
        );
        assert_eq!(
            form.check_attribute("profile.user").unwrap_err().to_string(),
            "Attribute \"profile\" is not a nested attribute."
        );
        assert_eq!(
            form.try_attribute_value("user.noExist"),
            Err(AttributeError::Unknown("noExist".to_string()))
        );
        assert!(!form.has_attribute("user.noExist"));
        assert_eq!(form.attribute_value("profile.user"), None);
    }

    #[test]
    fn test_object_value_members() {
        let mut form = nested_form();
        assert_eq!(form.attribute_value("meta.login"), Some(&json!("x")));
        assert_eq!(form.attribute_label("meta.login"), "Login");

        assert!(form.load(&json!({"FormWithNestedAttribute": {
            "meta.login": "admin",
            "meta.other": "ignored",
        }})));
        assert_eq!(form.attribute_value("meta"), Some(&json!({"login": "admin"})));
    }

    #[test]
    fn test_load_casts_declared_types() {
        let mut form = SimpleFormModel::new("")
            .attribute("int", AttributeDef::new().value(1).typed(AttributeType::Int))
            .attribute("float", AttributeDef::new().value(2.5).typed(AttributeType::Float))
            .attribute("bool", AttributeDef::new().value(true).typed(AttributeType::Bool))
            .attribute("string", AttributeDef::new().value("string").typed(AttributeType::String))
            .attribute("untyped", AttributeDef::new());
        assert!(form.load_with_scope(
            &json!({
                "int": "2",
                "float": "3.15",
                "bool": "false",
                "string": 555,
                "untyped": "7",
            }),
            "",
        ));
        assert_eq!(form.attribute_value("int"), Some(&json!(2)));
        assert_eq!(form.attribute_value("float"), Some(&json!(3.15)));
        assert_eq!(form.attribute_value("bool"), Some(&json!(false)));
        assert_eq!(form.attribute_value("string"), Some(&json!("555")));
        assert_eq!(form.attribute_value("untyped"), Some(&json!("7")));
    }

    #[test]
    fn test_cast_edge_cases() {
        assert_eq!(AttributeType::Int.cast(&json!("abc")), json!(0));
        assert_eq!(AttributeType::Int.cast(&json!(2.9)), json!(2));
        assert_eq!(AttributeType::Int.cast(&json!(true)), json!(1));
        assert_eq!(AttributeType::Bool.cast(&json!("0")), json!(false));
        assert_eq!(AttributeType::Bool.cast(&json!("yes")), json!(true));
        assert_eq!(AttributeType::Bool.cast(&json!(0)), json!(false));
        assert_eq!(AttributeType::String.cast(&json!(false)), json!(""));
        assert_eq!(AttributeType::Float.cast(&Value::Null), Value::Null);
        assert_eq!(AttributeType::String.cast(&json!([1])), json!([1]));
    }
}
