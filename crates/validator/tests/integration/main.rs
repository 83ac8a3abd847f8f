//! Integration tests for siv-validator.
//!
//! Exercises the public API the way a consumer does: through the prelude,
//! against the behaviour documented for each validator.

mod composite;
mod config;
mod validators;
