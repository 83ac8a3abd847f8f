//! Core traits for the validation system
//!
//! This module defines the trait every validator implements, and the
//! extension trait that gives validators their combinator methods.

use std::fmt;
use std::sync::Arc;

use crate::combinators::CompositeValidator;
use crate::foundation::Outcome;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// A validator takes an optional string and always produces an [`Outcome`].
/// Absent input is a normal case each validator gives a meaning to, never
/// a panic. `Display` renders the validator's description, which composite
/// validators concatenate.
///
/// Validators are immutable after construction, so the trait requires
/// `Send + Sync` and any validator can be shared between threads.
///
/// # Examples
///
/// ```
/// use std::fmt;
/// use siv_validator::foundation::{Outcome, ResultFlags, Validate};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     fn validate(&self, input: Option<&str>) -> Outcome {
///         match input {
///             Some(text) if text.contains(' ') => Outcome::invalid(ResultFlags::INVALID_FORMAT),
///             _ => Outcome::valid(),
///         }
///     }
/// }
///
/// impl fmt::Display for NoSpaces {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("NoSpaces")
///     }
/// }
///
/// assert!(!NoSpaces.validate(Some("a b")).contains_only_valid_characters());
/// assert!(NoSpaces.validate(None).is_valid());
/// ```
pub trait Validate: fmt::Display + Send + Sync {
    /// Validates the input value.
    ///
    /// Never panics; every input, including `None`, yields an [`Outcome`].
    fn validate(&self, input: Option<&str>) -> Outcome;

    /// Validates a present string. Shorthand for `validate(Some(input))`.
    #[inline]
    fn validate_str(&self, input: &str) -> Outcome {
        self.validate(Some(input))
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    #[inline]
    fn validate(&self, input: Option<&str>) -> Outcome {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    #[inline]
    fn validate(&self, input: Option<&str>) -> Outcome {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every owned `Validate` type.
///
/// # Examples
///
/// ```
/// use siv_validator::prelude::*;
///
/// let validator = length_limit(5).and(not_empty());
/// let outcome = validator.validate(Some(""));
/// assert!(outcome.is_empty());
/// assert!(outcome.has_length_mismatch());
/// ```
pub trait ValidateExt: Validate + Sized + 'static {
    /// Combines two validators into a [`CompositeValidator`].
    ///
    /// Both always run; the result fails if either fails and reports the
    /// reasons of both.
    fn and<V>(self, other: V) -> CompositeValidator
    where
        V: Validate + 'static,
    {
        CompositeValidator::of(self).and(other)
    }

    /// Erases the concrete type.
    fn boxed(self) -> Box<dyn Validate> {
        Box::new(self)
    }
}

impl<T: Validate + 'static> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
