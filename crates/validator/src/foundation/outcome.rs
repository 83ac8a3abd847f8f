//! Validation outcomes
//!
//! Every call to [`Validate::validate`](crate::foundation::Validate::validate)
//! returns an [`Outcome`]. Failure is data: an `Invalid` outcome lists every
//! reason the input was rejected.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::foundation::{ResultFlags, ValidationFailure};

/// The result of one validation call.
///
/// Equality is structural: `Valid(None)` and `Valid(Some(empty))` are
/// different values. The constructors below never produce the latter.
///
/// # Examples
///
/// ```
/// use siv_validator::foundation::{Outcome, ResultFlags};
///
/// let outcome = Outcome::invalid(ResultFlags::EMPTY_STRING);
/// assert!(!outcome.is_valid());
/// assert!(outcome.is_empty());
/// assert!(outcome.contains_only_valid_characters());
///
/// let clean = Outcome::valid();
/// assert!(!clean.has_length_mismatch());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "flags", rename_all = "snake_case")]
pub enum Outcome {
    /// Validation passed, optionally with informational flags.
    Valid(Option<ResultFlags>),
    /// Validation failed for every reason in the set.
    Invalid(ResultFlags),
}

impl Outcome {
    /// A clean pass with no flags recorded.
    #[inline]
    #[must_use]
    pub const fn valid() -> Self {
        Self::Valid(None)
    }

    /// A pass carrying informational flags. An empty set yields
    /// [`Outcome::valid`].
    #[must_use]
    pub const fn valid_with(extra: ResultFlags) -> Self {
        if extra.is_empty() {
            Self::Valid(None)
        } else {
            Self::Valid(Some(extra))
        }
    }

    /// A failure for the given reasons.
    #[inline]
    #[must_use]
    pub const fn invalid(error: ResultFlags) -> Self {
        Self::Invalid(error)
    }

    /// True iff the case is `Valid`.
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The flags this outcome carries, whichever case it is.
    /// A clean pass yields the empty set.
    #[must_use]
    pub const fn flags(&self) -> ResultFlags {
        match self {
            Self::Valid(Some(extra)) => *extra,
            Self::Valid(None) => ResultFlags::empty(),
            Self::Invalid(error) => *error,
        }
    }

    /// The failure reasons, if this is `Invalid`.
    #[must_use]
    pub const fn error(&self) -> Option<ResultFlags> {
        match self {
            Self::Invalid(error) => Some(*error),
            Self::Valid(_) => None,
        }
    }

    /// The informational flags of a pass, if any.
    #[must_use]
    pub const fn extra(&self) -> Option<ResultFlags> {
        match self {
            Self::Valid(extra) => *extra,
            Self::Invalid(_) => None,
        }
    }

    /// True iff `EmptyString` is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.flags().contains(ResultFlags::EMPTY_STRING)
    }

    /// True iff `LengthExceeded` is present.
    #[must_use]
    pub const fn has_max_length_exceeded(&self) -> bool {
        self.flags().contains(ResultFlags::LENGTH_EXCEEDED)
    }

    /// True iff `LengthMismatch` is present.
    #[must_use]
    pub const fn has_length_mismatch(&self) -> bool {
        self.flags().contains(ResultFlags::LENGTH_MISMATCH)
    }

    /// True iff `InvalidFormat` is absent.
    #[must_use]
    pub const fn contains_only_valid_characters(&self) -> bool {
        !self.flags().contains(ResultFlags::INVALID_FORMAT)
    }

    /// Converts into a `Result` so failures can be propagated with `?`.
    ///
    /// ```
    /// use siv_validator::prelude::*;
    ///
    /// fn check(input: &str) -> Result<(), ValidationFailure> {
    ///     not_empty().validate(Some(input)).into_result()?;
    ///     Ok(())
    /// }
    ///
    /// assert!(check("x").is_ok());
    /// assert!(check("").unwrap_err().contains(ResultFlags::EMPTY_STRING));
    /// ```
    pub const fn into_result(self) -> Result<Option<ResultFlags>, ValidationFailure> {
        match self {
            Self::Valid(extra) => Ok(extra),
            Self::Invalid(error) => Err(ValidationFailure::new(error)),
        }
    }
}

/// Wire shape of [`Outcome`], checked before it becomes one.
#[derive(Deserialize)]
#[serde(tag = "status", content = "flags", rename_all = "snake_case")]
enum OutcomeRepr {
    Valid(Option<ResultFlags>),
    Invalid(ResultFlags),
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match OutcomeRepr::deserialize(deserializer)? {
            OutcomeRepr::Valid(None) => Ok(Self::Valid(None)),
            OutcomeRepr::Valid(Some(extra)) if extra.is_empty() => Err(de::Error::custom(
                "valid outcome with a flag list must name at least one flag",
            )),
            OutcomeRepr::Valid(Some(extra)) => Ok(Self::Valid(Some(extra))),
            OutcomeRepr::Invalid(error) if error.is_empty() => Err(de::Error::custom(
                "invalid outcome must name at least one flag",
            )),
            OutcomeRepr::Invalid(error) => Ok(Self::Invalid(error)),
        }
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::valid()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(None) => f.write_str("valid"),
            Self::Valid(Some(extra)) => write!(f, "valid {extra}"),
            Self::Invalid(error) => write!(f, "invalid {error}"),
        }
    }
}
