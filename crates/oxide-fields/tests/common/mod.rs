#![allow(dead_code)]

use oxide_fields::{AttributeDef, Field, FieldError, InputGenerator, SimpleFormModel};
use serde_json::json;

pub fn type_form() -> SimpleFormModel {
    SimpleFormModel::new("TypeForm")
        .attribute("array", AttributeDef::new().value(json!([])))
        .attribute("bool", AttributeDef::new().value(false))
        .attribute("int", AttributeDef::new().value(0))
        .attribute("number", AttributeDef::new().value(1.5))
        .attribute("object", AttributeDef::new().value(json!({"a": 1})))
        .attribute(
            "string",
            AttributeDef::new()
                .value("")
                .hint("Write your text string.")
                .placeholder("Typed your text string."),
        )
        .attribute("toNull", AttributeDef::new())
}

pub fn company_form() -> SimpleFormModel {
    SimpleFormModel::new("").attribute("company", AttributeDef::new().value(""))
}

pub fn login_form() -> SimpleFormModel {
    SimpleFormModel::new("LoginForm")
        .attribute(
            "login",
            AttributeDef::new()
                .label("Login:")
                .hint("Write your id or email."),
        )
        .attribute("password", AttributeDef::new().label("Password:"))
        .attribute("rememberMe", AttributeDef::new().value(false))
}

pub fn render<G: InputGenerator>(field: Field<G>) -> String {
    field
        .render()
        .unwrap_or_else(|e| panic!("Failed to render field: {e}"))
}

pub fn render_err<G: InputGenerator>(field: Field<G>) -> FieldError {
    match field.render() {
        Ok(html) => panic!("Expected render error, got {html}"),
        Err(e) => e,
    }
}
