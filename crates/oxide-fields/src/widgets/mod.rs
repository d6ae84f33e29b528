//! Standalone widgets.
//!
//! Widgets render a single fragment, usually for a model attribute. The hint and
//! error widgets also render the matching parts of every
//! [`Field`](crate::Field).

mod checkbox_list;
mod error;
mod form;
mod hint;
mod submit;
mod summary;

pub use checkbox_list::CheckboxListWidget;
pub use error::ErrorMessage;
pub use form::{Form, DEFAULT_CSRF_NAME};
pub use hint::Hint;
pub use submit::SubmitButton;
pub use summary::ErrorSummary;
