//! Tests for templates and custom tokens.

mod common;
use common::*;

use oxide_fields::template::{render_template, strip_blank_lines, substitute};
use oxide_fields::{Field, FieldError, Tokens};
use pretty_assertions::assert_eq;

#[test]
fn icon_token_between_wrappers() {
    let html = render(
        Field::raw("<input>")
            .template("{before}\n{input}\n{icon}\n{after}")
            .tokens([
                ("{before}", "<section>"),
                ("{icon}", "<span class=\"icon\"></span>"),
                ("{after}", "</section>"),
            ])
            .unwrap(),
    );
    assert_eq!(
        html,
        "<div>\n<section>\n<input>\n<span class=\"icon\"></span>\n</section>\n</div>"
    );
}

#[test]
fn builtin_tokens_are_reserved() {
    for name in ["{label}", "{input}", "{hint}", "{error}"] {
        let err = Field::raw("").token(name, "x").unwrap_err();
        assert!(matches!(err, FieldError::BuiltinToken(ref n) if n == name));
    }
    let err = Field::raw("").token("", "x").unwrap_err();
    assert!(matches!(err, FieldError::EmptyTokenName));
}

#[test]
fn unknown_tokens_stay_literal() {
    let html = render(Field::raw("<input>").template("{input}\n{unknown}"));
    assert_eq!(html, "<div>\n<input>\n{unknown}\n</div>");

    let mut tokens = Tokens::new();
    tokens.insert("{a}", 1).unwrap();
    assert_eq!(substitute("{a}{b}{a}", &tokens), "1{b}1");
}

#[test]
fn empty_parts_leave_no_blank_lines() {
    let html = render(
        Field::raw("<input>")
            .label("")
            .template("{label}\n\n{input}\n  \n{hint}\n{error}"),
    );
    assert_eq!(html, "<div>\n<input>\n</div>");
}

#[test]
fn strip_blank_lines_is_idempotent() {
    let samples = ["", "a", "\n\na\n\n", "a\n \t\nb", "  a  \n\n  b  ", "a\r\n\r\nb"];
    for sample in samples {
        let once = strip_blank_lines(sample);
        assert_eq!(strip_blank_lines(&once), once, "sample {sample:?}");
    }
}

#[test]
fn render_template_substitutes_once() {
    let mut tokens = Tokens::new();
    tokens.insert("{x}", "{y}").unwrap();
    tokens.insert("{y}", "never").unwrap();
    assert_eq!(render_template("{x}", &tokens), "{y}");
}

#[test]
fn token_values_are_not_encoded() {
    let html = render(
        Field::raw("")
            .template("{raw}")
            .token("{raw}", "<b>&</b>")
            .unwrap()
            .without_container(),
    );
    assert_eq!(html, "<b>&</b>");
}
