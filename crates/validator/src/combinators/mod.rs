//! Validator combinators
//!
//! Combinators build one validator out of several. The crate ships the
//! [`CompositeValidator`]: every member runs, any failure fails the whole,
//! and every failure reason is reported.
//!
//! # Examples
//!
//! ```
//! use siv_validator::prelude::*;
//!
//! // macro form
//! let a = compose![length_limit(5), not_empty()];
//!
//! // method form
//! let b = length_limit(5).and(not_empty());
//!
//! // runtime list
//! let c = CompositeValidator::new(vec![length_limit(5).boxed(), not_empty().boxed()]).unwrap();
//!
//! for validator in [&a, &b, &c] {
//!     assert_eq!(validator.validate(Some("")), a.validate(Some("")));
//! }
//! ```

pub mod composite;

pub use composite::CompositeValidator;
