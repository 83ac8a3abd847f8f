//! Building validators from a JSON config document.
//!
//! Run: `cargo run -p siv-validator --example json_validation`

use siv_validator::config::{ValidatorConfig, from_json};
use siv_validator::foundation::ConfigError;

const SIGNUP_FORM: &str = r#"
{ "composite": [
    "not_empty",
    { "length": { "limit": 12, "policy": "lenient" } },
    "alphanumeric"
] }
"#;

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let config = ValidatorConfig::from_json(SIGNUP_FORM)?;
    println!("=== Parsed config ({}) ===\n{config:#?}\n", config.kind());

    let username = config.build()?;
    println!("=== Built validator ===\n{username}\n");

    for input in ["alice", "alice_smith", "averyverylongname", ""] {
        println!("  {input:>20?} -> {}", username.validate(Some(input)));
    }

    println!("\n=== Config errors ===\n");
    for document in [
        r#"{ "pattern": "a)(b" }"#,
        r#"{ "composite": [] }"#,
        r#""email""#,
    ] {
        match from_json(document) {
            Ok(validator) => println!("  {document} -> {validator}"),
            Err(error) => println!("  {document} -> {error}"),
        }
    }

    Ok(())
}
