//! Basic usage example for siv-validator
//!
//! Run: `cargo run -p siv-validator --example basic_usage`

use siv_validator::prelude::*;

fn main() {
    let zip = length_limit(5);

    println!("Testing {zip}:\n");

    for input in ["80331", "803", "803311", ""] {
        println!("  {input:>8?} -> {}", zip.validate(Some(input)));
    }

    let phone = phone_number();

    println!("\nTesting {phone}:\n");

    for input in ["+49 (30) 1234567", "030 1234567 / 089 7654321", "call me"] {
        println!("  {input:>28?} -> {}", phone.validate(Some(input)));
    }

    match numeric().validate(Some("12a4")).into_result() {
        Ok(extra) => println!("\nnumeric accepted the input ({extra:?})"),
        Err(failure) => println!("\nnumeric rejected the input: {failure}"),
    }
}
