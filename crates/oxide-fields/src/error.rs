//! Error types for field rendering.

use thiserror::Error;

/// Field and widget errors.
///
/// Every variant is raised at the point of misuse; none of them is
/// recoverable inside a render call.
#[derive(Debug, Error)]
pub enum FieldError {
    /// A custom token was registered with an empty name.
    #[error("Token must be non-empty string.")]
    EmptyTokenName,

    /// A custom token reused one of the built-in names.
    #[error("Token name \"{0}\" is built-in.")]
    BuiltinToken(String),

    /// A configured token value was not a string.
    #[error("Token value should be string. {0} given.")]
    InvalidTokenValue(&'static str),

    /// Configured tokens were not a name/value object.
    #[error("Tokens should be an object. {0} given.")]
    InvalidTokens(&'static str),

    /// The field needs input data but nothing was bound.
    #[error("Form model is not set.")]
    FormModelNotSet,

    /// `end()` was called without an open block.
    #[error("Unexpected end() call. A matching begin() is not found.")]
    EndWithoutBegin,

    /// `begin()` was called while another block is still open.
    #[error("A field block is already open. Call end() first.")]
    BlockAlreadyOpen,

    /// The attribute value does not fit the widget's accepted domain.
    #[error("{widget} widget must be {expected} value.")]
    InvalidValue {
        widget: &'static str,
        expected: &'static str,
    },

    /// A tag name was required but empty.
    #[error("Tag name cannot be empty.")]
    EmptyTagName,

    /// A theme name was not found in the registry.
    #[error("Theme \"{0}\" is not registered.")]
    UnknownTheme(String),

    /// A bound attribute could not be resolved on its model.
    #[error(transparent)]
    Attribute(#[from] AttributeError),

    /// Theme configuration could not be parsed.
    #[error("invalid theme configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Attribute lookup failures of a form model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("Undefined attribute \"{0}\".")]
    Unknown(String),

    /// A dotted path went through an attribute that holds no nested model.
    #[error("Attribute \"{0}\" is not a nested attribute.")]
    NotNested(String),
}

impl FieldError {
    /// Builds the error for a value outside a widget's accepted domain.
    pub(crate) const fn invalid_value(widget: &'static str, expected: &'static str) -> Self {
        Self::InvalidValue { widget, expected }
    }
}

/// Returns a short type name for a JSON value, used in error messages.
pub(crate) const fn value_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Result type alias for field operations.
pub type Result<T> = std::result::Result<T, FieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            FieldError::BuiltinToken("{hint}".into()).to_string(),
            "Token name \"{hint}\" is built-in."
        );
        assert_eq!(
            FieldError::invalid_value("Text", "a string or null").to_string(),
            "Text widget must be a string or null value."
        );
        assert_eq!(
            FieldError::InvalidTokenValue("number").to_string(),
            "Token value should be string. number given."
        );
        assert_eq!(
            FieldError::from(AttributeError::NotNested("profile".into())).to_string(),
            "Attribute \"profile\" is not a nested attribute."
        );
    }

    #[test]
    fn test_value_type_name() {
        assert_eq!(value_type_name(&serde_json::json!([1])), "array");
        assert_eq!(value_type_name(&serde_json::json!({})), "object");
        assert_eq!(value_type_name(&serde_json::Value::Null), "null");
    }
}
