//! Validation errors of a form, keyed by attribute.

use indexmap::IndexMap;

/// Collection of validation errors by attribute.
///
/// Attributes keep the order in which their first error was added. An
/// attribute without an entry has no errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: IndexMap<String, Vec<String>>,
}

impl FormErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an error for an attribute.
    pub fn add_error(&mut self, attribute: &str, message: impl Into<String>) {
        self.errors
            .entry(attribute.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns all errors grouped by attribute.
    pub const fn all_errors(&self) -> &IndexMap<String, Vec<String>> {
        &self.errors
    }

    /// Returns the errors of one attribute.
    pub fn errors(&self, attribute: &str) -> &[String] {
        self.errors
            .get(attribute)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the first error of an attribute, or an empty string.
    pub fn first_error(&self, attribute: &str) -> &str {
        self.errors
            .get(attribute)
            .and_then(|messages| messages.first())
            .map_or("", String::as_str)
    }

    /// Returns the first error of every attribute that has one.
    pub fn first_errors(&self) -> IndexMap<&str, &str> {
        self.errors
            .iter()
            .filter_map(|(attribute, messages)| {
                messages
                    .first()
                    .map(|first| (attribute.as_str(), first.as_str()))
            })
            .collect()
    }

    /// Returns every error message, flattened in insertion order.
    pub fn error_summary(&self) -> Vec<&str> {
        self.errors
            .values()
            .flat_map(|messages| messages.iter().map(String::as_str))
            .collect()
    }

    /// Returns the first error of each attribute, flattened.
    pub fn error_summary_first_errors(&self) -> Vec<&str> {
        self.first_errors().into_values().collect()
    }

    /// With `None`, returns whether there are any errors at all; otherwise
    /// whether the given attribute has an entry.
    pub fn has_errors(&self, attribute: Option<&str>) -> bool {
        match attribute {
            Some(attribute) => self.errors.contains_key(attribute),
            None => !self.errors.is_empty(),
        }
    }

    /// Clears the errors of one attribute, or all of them.
    pub fn clear(&mut self, attribute: Option<&str>) {
        match attribute {
            Some(attribute) => {
                self.errors.shift_remove(attribute);
            }
            None => self.errors.clear(),
        }
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (attribute, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{attribute}: {message}")?;
            }
        }
        Ok(())
    }
}
