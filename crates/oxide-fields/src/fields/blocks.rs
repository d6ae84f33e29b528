//! Begin/end block rendering.

use tracing::trace;

use super::{Field, InputGenerator};
use crate::error::{FieldError, Result};

trait BlockEnd: std::fmt::Debug {
    fn close(&self) -> Result<String>;
}

impl<G: InputGenerator> BlockEnd for Field<G> {
    fn close(&self) -> Result<String> {
        self.render_end()
    }
}

/// Tracks one open field block.
///
/// `begin` renders the opening half of a field and keeps the field until
/// `end` renders its closing half, so the caller can emit arbitrary markup
/// in between.
///
/// ```rust
/// use oxide_fields::{Field, FieldBlocks};
///
/// let mut blocks = FieldBlocks::new();
/// let mut html = blocks.begin(&Field::fieldset().legend("Account")).unwrap();
/// html.push_str("\n<input name=\"login\">\n");
/// html.push_str(&blocks.end().unwrap());
///
/// assert_eq!(
///     html,
///     "<div>\n<fieldset>\n<legend>Account</legend>\n<input name=\"login\">\n</fieldset>\n</div>"
/// );
/// ```
#[derive(Debug, Default)]
pub struct FieldBlocks {
    open: Option<Box<dyn BlockEnd>>,
}

impl FieldBlocks {
    /// Creates a tracker with no open block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the opening half of `field` and marks the block open.
    pub fn begin<G: InputGenerator + 'static>(&mut self, field: &Field<G>) -> Result<String> {
        if self.open.is_some() {
            return Err(FieldError::BlockAlreadyOpen);
        }
        let html = field.render_begin()?;
        trace!(widget = field.generator().widget_name(), "field block opened");
        self.open = Some(Box::new(field.clone()));
        Ok(html)
    }

    /// Renders the closing half of the open block.
    pub fn end(&mut self) -> Result<String> {
        let field = self.open.take().ok_or(FieldError::EndWithoutBegin)?;
        trace!("field block closed");
        field.close()
    }

    /// Whether a block is waiting for `end`.
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_without_begin() {
        let err = FieldBlocks::new().end().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected end() call. A matching begin() is not found."
        );
    }

    #[test]
    fn test_begin_twice() {
        let mut blocks = FieldBlocks::new();
        blocks.begin(&Field::raw("")).unwrap();
        assert!(blocks.is_open());
        let err = blocks.begin(&Field::raw("")).unwrap_err();
        assert!(matches!(err, FieldError::BlockAlreadyOpen));

        blocks.end().unwrap();
        assert!(!blocks.is_open());
        assert!(matches!(blocks.end(), Err(FieldError::EndWithoutBegin)));
    }

    #[test]
    fn test_end_renders_closing_half() {
        let mut blocks = FieldBlocks::new();
        let field = Field::raw("").template_begin("{label}").label("x");
        assert!(blocks.begin(&field).is_ok());
        assert_eq!(blocks.end().unwrap(), "</div>");
    }
}
