//! Combinators example for siv-validator
//!
//! Run: `cargo run -p siv-validator --example combinators`

use siv_validator::prelude::*;

fn main() {
    // Every member runs, every failure is reported
    let zip = compose![length_limit(5), not_empty(), numeric()];

    println!("Testing {zip}\n");

    for input in ["80331", "", "absdefgh"] {
        let outcome = zip.validate(Some(input));
        println!("  {input:?} -> {outcome}");
        if outcome.is_empty() {
            println!("    empty input");
        }
        if outcome.has_max_length_exceeded() {
            println!("    too long");
        }
        if !outcome.contains_only_valid_characters() {
            println!("    contains non-digit characters");
        }
    }

    // Lenient length checks report a shortfall without failing
    let lenient = not_empty().and(LengthValidator::lenient(5));
    println!("\n{lenient}");
    println!("  \"803\" -> {}", lenient.validate(Some("803")));

    // Composites nest and contribute one merged outcome
    let nested = compose![alphanumeric(), compose![length_limit(3), not_empty()]];
    println!("\n{nested}");
    println!("  \"a-b\" -> {}", nested.validate(Some("a-b")));
}
