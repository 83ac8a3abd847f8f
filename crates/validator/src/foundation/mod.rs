//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Flags**: [`ResultFlags`], the set of reasons a validator reports
//! - **Outcomes**: [`Outcome`], valid (optionally annotated) or invalid
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ConfigError`], [`ValidationFailure`]
//!
//! # Architecture
//!
//! ## 1. Failures are data
//!
//! `validate` never fails in the Rust sense. It returns an [`Outcome`], and
//! an invalid outcome carries *every* reason at once:
//!
//! ```
//! use siv_validator::prelude::*;
//!
//! let outcome = length_limit(5).validate(Some("0123456789"));
//! assert_eq!(
//!     outcome,
//!     Outcome::invalid(ResultFlags::LENGTH_EXCEEDED | ResultFlags::LENGTH_MISMATCH),
//! );
//! ```
//!
//! ## 2. Composition
//!
//! Validators compose into a [`CompositeValidator`](crate::combinators::CompositeValidator),
//! which is itself a validator:
//!
//! ```
//! use siv_validator::prelude::*;
//!
//! let validator = compose![numeric(), compose![length_limit(5), not_empty()]];
//! let outcome = validator.validate(Some("absdefgh"));
//! assert!(!outcome.contains_only_valid_characters());
//! assert!(outcome.has_max_length_exceeded());
//! ```
//!
//! ## 3. Construction can fail, validation cannot
//!
//! Building a [`PatternValidator`](crate::validators::PatternValidator) from
//! a pattern that does not compile returns a [`ConfigError`] up front.

pub mod error;
pub mod flags;
pub mod outcome;
pub mod traits;

pub use error::{ConfigError, ValidationFailure};
pub use flags::ResultFlags;
pub use outcome::Outcome;
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with several validators and merges their outcomes.
///
/// Same combination rule as a composite validator, without building one:
/// every validator runs, any failure makes the result invalid, and all
/// failure reasons are reported together.
///
/// ```
/// use siv_validator::foundation::{validate_with_all, Validate};
/// use siv_validator::validators::{LengthValidator, NotEmptyValidator};
///
/// let length = LengthValidator::new(5);
/// let validators: [&dyn Validate; 2] = [&length, &NotEmptyValidator];
/// let outcome = validate_with_all(Some(""), &validators);
/// assert!(outcome.is_empty());
/// assert!(outcome.has_length_mismatch());
/// ```
pub fn validate_with_all(input: Option<&str>, validators: &[&dyn Validate]) -> Outcome {
    merge_outcomes(validators.iter().map(|validator| validator.validate(input)))
}

/// Folds outcomes under the composite rule: any `Invalid` wins and its
/// flags are unioned; otherwise the extra flags of every `Valid` are unioned.
pub fn merge_outcomes<I>(outcomes: I) -> Outcome
where
    I: IntoIterator<Item = Outcome>,
{
    let (errors, extras) = outcomes.into_iter().fold(
        (ResultFlags::empty(), ResultFlags::empty()),
        |(errors, extras), outcome| match outcome {
            Outcome::Invalid(error) => (errors.merge(error), extras),
            Outcome::Valid(Some(extra)) => (errors, extras.merge(extra)),
            Outcome::Valid(None) => (errors, extras),
        },
    );

    if errors.is_empty() {
        Outcome::valid_with(extras)
    } else {
        Outcome::invalid(errors)
    }
}

// ============================================================================
// TESTS
// ============================================================================
