//! # oxide-fields
//!
//! Immutable form field builders rendered through token templates.
//!
//! This crate provides:
//! - A form model contract and an in-memory model
//! - Field builders for text, number, textarea, checkbox, select and
//!   button inputs, with label, hint and error parts
//! - Token templates with custom tokens and begin/end rendering
//! - Themes loaded from JSON configuration
//! - Standalone form, hint, error, error summary and submit widgets
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_fields::{AttributeDef, Field, SimpleFormModel};
//!
//! let mut form = SimpleFormModel::new("LoginForm")
//!     .attribute("login", AttributeDef::new().hint("Write your id or email."));
//! form.load(&serde_json::json!({"LoginForm": {"login": "admin"}}));
//!
//! let html = Field::text()
//!     .for_attribute(&form, "login")
//!     .render()
//!     .unwrap();
//!
//! assert_eq!(
//!     html,
//!     "<div>\n\
//!      <label for=\"loginform-login\">Login</label>\n\
//!      <input type=\"text\" id=\"loginform-login\" name=\"LoginForm[login]\" value=\"admin\">\n\
//!      <div>Write your id or email.</div>\n\
//!      </div>"
//! );
//! ```
//!
//! ## Custom Tokens
//!
//! ```rust
//! use oxide_fields::Field;
//!
//! let html = Field::raw("<span class=\"icon\"></span>")
//!     .template("{before}\n{input}\n{after}")
//!     .token("{before}", "<section>")
//!     .unwrap()
//!     .token("{after}", "</section>")
//!     .unwrap()
//!     .render()
//!     .unwrap();
//!
//! assert_eq!(html, "<div>\n<section>\n<span class=\"icon\"></span>\n</section>\n</div>");
//! ```
//!
//! ## Themes
//!
//! Themes are plain configuration. Build a [`ThemeRegistry`] once and
//! create fields from it, or apply a [`Theme`] directly with
//! [`Field::themed`].

mod error;
pub mod fields;
mod form_errors;
mod form_model;
pub mod html;
mod html_form;
mod html_options;
mod input_data;
pub mod template;
mod theme;
pub mod widgets;

pub use error::{AttributeError, FieldError, Result};
pub use fields::{Field, FieldBlocks, InputContext, InputGenerator};
pub use form_errors::FormErrors;
pub use form_model::{AttributeDef, AttributeType, FormModel, SimpleFormModel};
pub use html::{Attributes, Tag};
pub use html_form::{humanize, input_id, input_name};
pub use html_options::{
    DefaultRulesEnricher, HtmlOptionsProvider, LengthHtmlOptions, NumberHtmlOptions,
    PatternHtmlOptions, RequiredHtmlOptions, RulesEnricher, SharedEnricher, ValidationRule,
};
pub use input_data::{InputData, PureInputData};
pub use template::Tokens;
pub use theme::{Theme, ThemeRegistry};
pub use widgets::{CheckboxListWidget, ErrorMessage, ErrorSummary, Form, Hint, SubmitButton};
