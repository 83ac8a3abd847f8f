//! # siv-validator
//!
//! Composable string input validation with multi-error reporting.
//!
//! ## Quick Start
//!
//! ```
//! use siv_validator::prelude::*;
//!
//! let validator = compose![length_limit(5), not_empty()];
//! let outcome = validator.validate(Some(""));
//!
//! assert!(!outcome.is_valid());
//! assert!(outcome.is_empty());
//! assert!(outcome.has_length_mismatch());
//! assert_eq!(outcome.flags().to_string(), "[EmptyString, LengthMismatch]");
//! ```
//!
//! ## Validators
//!
//! Every validator implements [`Validate`](foundation::Validate): it takes
//! an `Option<&str>` and returns an [`Outcome`](foundation::Outcome).
//!
//! - [`NotEmptyValidator`](validators::NotEmptyValidator)
//! - [`LengthValidator`](validators::LengthValidator)
//! - [`PatternValidator`](validators::PatternValidator), with the shared
//!   [`numeric`](validators::numeric) and [`alphanumeric`](validators::alphanumeric) instances
//! - [`PhoneNumberValidator`](validators::PhoneNumberValidator)
//! - [`CompositeValidator`](combinators::CompositeValidator), which runs the
//!   others and reports every failure
//!
//! Validator trees can also be described in JSON, see [`config`].

#![warn(missing_docs)]

pub mod combinators;
pub mod config;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
