use pretty_assertions::assert_eq;
use siv_validator::config::{ValidatorConfig, from_json};
use siv_validator::prelude::*;

const SIGNUP_FORM: &str = r#"
{
    "composite": [
        "not_empty",
        { "length": { "limit": 10, "policy": "lenient" } },
        { "pattern": "^[0-9 +()/.-]*$" },
        "phone"
    ]
}
"#;

#[test]
fn builds_from_document() {
    let validator = from_json(SIGNUP_FORM).unwrap();

    assert_eq!(
        validator.to_string(),
        "CompositeValidator: NotEmpty, LengthLimit: 10, RegEX: ^[0-9 +()/.-]*$, PhoneNumber,"
    );

    assert_eq!(
        validator.validate(Some("089 123456")),
        Outcome::valid()
    );
    assert_eq!(
        validator.validate(Some("01 58058-0")),
        Outcome::valid()
    );
    assert_eq!(
        validator.validate(Some("0 30 12345")),
        Outcome::valid()
    );
    // short but valid number: only the informational mismatch remains
    assert_eq!(
        validator.validate(Some("089 12345")),
        Outcome::valid_with(ResultFlags::LENGTH_MISMATCH)
    );

    assert_eq!(
        validator.validate(Some("")),
        Outcome::invalid(ResultFlags::EMPTY_STRING)
    );
    assert_eq!(
        validator.validate(Some("+49 89 123456 123")),
        Outcome::invalid(ResultFlags::LENGTH_EXCEEDED | ResultFlags::LENGTH_MISMATCH)
    );
}

#[test]
fn config_round_trips_through_json() {
    let config = ValidatorConfig::from_json(SIGNUP_FORM).unwrap();
    let text = serde_json::to_string(&config).unwrap();
    assert_eq!(ValidatorConfig::from_json(&text).unwrap(), config);
}

fn build_error(document: &str) -> ConfigError {
    let Err(error) = from_json(document) else {
        panic!("expected a config error for {document}");
    };
    error
}

#[test]
fn malformed_document() {
    let error = build_error("{ \"length\": { \"limit\": -1 } }");
    assert!(matches!(error, ConfigError::Parse(_)));

    let error = build_error("{ \"length\": { \"limit\": 1, \"max\": 2 } }");
    assert!(matches!(error, ConfigError::Parse(_)));
}

#[test]
fn logs_are_emitted_under_a_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        assert!(from_json(r#"{ "pattern": "(" }"#).is_err());
        let validator = from_json(r#"{ "composite": ["numeric"] }"#).unwrap();
        assert!(validator.validate(Some("1")).is_valid());
    });
}
