//! HTML primitives: escaping, attribute maps and tags.

mod attributes;
mod tag;

pub use attributes::Attributes;
pub use tag::Tag;

/// Escapes HTML special characters.
pub fn encode(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
