//! Tests for begin/end rendering.

mod common;
use common::*;

use oxide_fields::{Field, FieldBlocks, FieldError};
use pretty_assertions::assert_eq;

#[test]
fn begin_end_matches_single_shot() {
    let field = Field::raw("<span>\n</span>")
        .begin_html("<span>")
        .end_html("</span>")
        .label("Name")
        .hint("Your name.");

    let single = render(field.clone());
    let begin = field.render_begin().unwrap();
    let end = field.render_end().unwrap();
    assert_eq!(format!("{begin}\n{end}"), single);
    assert_eq!(
        single,
        "<div>\n<label>Name</label>\n<span>\n</span>\n<div>Your name.</div>\n</div>"
    );
}

#[test]
fn begin_end_without_container() {
    let field = Field::raw("<i>\n</i>")
        .begin_html("<i>")
        .end_html("</i>")
        .without_container();
    let begin = field.render_begin().unwrap();
    let end = field.render_end().unwrap();
    assert_eq!(format!("{begin}\n{end}"), render(field));
}

#[test]
fn nested_markup_between_halves() {
    let form = login_form();
    let mut blocks = FieldBlocks::new();

    let mut html = blocks
        .begin(&Field::fieldset().legend("Credentials").add_container_class(["group"]))
        .unwrap();
    html.push('\n');
    html.push_str(&render(
        Field::text()
            .for_attribute(&form, "login")
            .hint("")
            .without_container(),
    ));
    html.push('\n');
    html.push_str(&blocks.end().unwrap());

    assert_eq!(
        html,
        "<div class=\"group\">\n\
         <fieldset>\n\
         <legend>Credentials</legend>\n\
         <label for=\"loginform-login\">Login:</label>\n\
         <input type=\"text\" id=\"loginform-login\" name=\"LoginForm[login]\">\n\
         </fieldset>\n\
         </div>"
    );
}

#[test]
fn end_without_begin_fails() {
    let mut blocks = FieldBlocks::new();
    let err = blocks.end().unwrap_err();
    assert!(matches!(err, FieldError::EndWithoutBegin));
    assert_eq!(
        err.to_string(),
        "Unexpected end() call. A matching begin() is not found."
    );
}

#[test]
fn begin_requires_end_first() {
    let mut blocks = FieldBlocks::new();
    blocks.begin(&Field::fieldset()).unwrap();
    let err = blocks.begin(&Field::fieldset()).unwrap_err();
    assert_eq!(err.to_string(), "A field block is already open. Call end() first.");
    assert_eq!(blocks.end().unwrap(), "</fieldset>\n</div>");
    assert!(blocks.begin(&Field::fieldset()).is_ok());
}
