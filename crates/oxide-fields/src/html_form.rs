//! Naming helpers shared by fields and widgets.

use std::sync::LazyLock;

use regex::Regex;

static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid word boundary pattern"));

/// Returns the input name of an attribute: `Form[attribute]`, or the bare
/// attribute when the form name is empty.
pub fn input_name(form_name: &str, attribute: &str) -> String {
    if form_name.is_empty() {
        attribute.to_string()
    } else {
        format!("{form_name}[{attribute}]")
    }
}

/// Returns the input id of an attribute, derived from its input name.
///
/// `TypeForm[string]` becomes `typeform-string`; dots, spaces and bracket
/// pairs turn into hyphens.
pub fn input_id(form_name: &str, attribute: &str) -> String {
    input_name(form_name, attribute)
        .replace("[]", "")
        .replace("][", "-")
        .replace('[', "-")
        .replace(']', "")
        .replace([' ', '.'], "-")
        .to_lowercase()
}

/// Generates a human readable label from an attribute name.
///
/// `fieldCheck` becomes `Field Check`, `first_name` becomes `First Name`.
pub fn humanize(attribute: &str) -> String {
    let spaced = WORD_BOUNDARY.replace_all(attribute, "$1 $2");
    spaced
        .replace(['-', '_', '.'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
