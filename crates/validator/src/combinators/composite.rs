//! Composite combinator - all validators run, all failures are reported
//!
//! This module provides [`CompositeValidator`], which runs an ordered list
//! of validators against the same input and folds their outcomes into one:
//!
//! - any `Invalid` member makes the composite `Invalid`, with the union of
//!   *every* failing member's flags;
//! - otherwise the composite is `Valid`, carrying the union of the members'
//!   informational flags, if any.
//!
//! Evaluation never short-circuits. A composite is itself a validator, so
//! composites nest, and a nested composite contributes one merged outcome.
//!
//! # Examples
//!
//! ```
//! use siv_validator::prelude::*;
//!
//! let validator = compose![length_limit(5), not_empty()];
//! let outcome = validator.validate(Some(""));
//! assert!(outcome.is_empty());
//! assert!(outcome.has_length_mismatch());
//! assert_eq!(validator.to_string(), "CompositeValidator: LengthLimit: 5, NotEmpty,");
//! ```

use std::fmt;

use crate::foundation::{ConfigError, Outcome, Validate, merge_outcomes};

/// Runs every member validator and merges their outcomes.
///
/// Always holds at least one member: [`new`](Self::new) rejects an empty
/// list, and [`of`](Self::of) starts from a single validator.
pub struct CompositeValidator {
    validators: Vec<Box<dyn Validate>>,
}

impl CompositeValidator {
    /// Creates a composite from an ordered list of validators.
    ///
    /// Returns [`ConfigError::EmptyComposite`] if the list is empty.
    pub fn new(validators: Vec<Box<dyn Validate>>) -> Result<Self, ConfigError> {
        if validators.is_empty() {
            return Err(ConfigError::EmptyComposite);
        }
        Ok(Self { validators })
    }

    /// Creates a composite with a single member.
    pub fn of<V>(first: V) -> Self
    where
        V: Validate + 'static,
    {
        Self {
            validators: vec![Box::new(first)],
        }
    }

    /// Appends a member, keeping this composite flat.
    ///
    /// Calling [`ValidateExt::and`](crate::foundation::ValidateExt::and)
    /// explicitly on a composite would nest it inside a new one instead.
    #[must_use = "builder methods must be chained or built"]
    pub fn and<V>(mut self, other: V) -> Self
    where
        V: Validate + 'static,
    {
        self.validators.push(Box::new(other));
        self
    }

    /// Appends an already boxed member.
    pub fn push(&mut self, validator: Box<dyn Validate>) {
        self.validators.push(validator);
    }

    /// Number of direct members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Always false; kept for symmetry with [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// The direct members, in construction order.
    pub fn validators(&self) -> impl Iterator<Item = &(dyn Validate + 'static)> {
        self.validators.iter().map(|validator| &**validator)
    }
}

impl Validate for CompositeValidator {
    fn validate(&self, input: Option<&str>) -> Outcome {
        let outcome = merge_outcomes(
            self.validators
                .iter()
                .map(|validator| validator.validate(input)),
        );

        tracing::trace!(
            members = self.validators.len(),
            valid = outcome.is_valid(),
            flags = %outcome.flags(),
            "composite validation finished"
        );

        outcome
    }
}

impl fmt::Display for CompositeValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CompositeValidator:")?;
        for validator in &self.validators {
            write!(f, " {validator},")?;
        }
        Ok(())
    }
}

impl fmt::Debug for CompositeValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeValidator")
            .field(
                "validators",
                &self
                    .validators
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl TryFrom<Vec<Box<dyn Validate>>> for CompositeValidator {
    type Error = ConfigError;

    fn try_from(validators: Vec<Box<dyn Validate>>) -> Result<Self, Self::Error> {
        Self::new(validators)
    }
}
