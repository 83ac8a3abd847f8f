//! String length validators
//!
//! This module provides [`NotEmptyValidator`] and [`LengthValidator`].
//! By default, length is measured in extended grapheme clusters, the
//! characters a user sees: `"e\u{301}"` and a flag emoji both count as one.
//! [`LengthMode::Chars`] counts Unicode scalar values instead, and
//! [`LengthMode::Bytes`] counts UTF-8 bytes.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::foundation::{Outcome, ResultFlags, Validate};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values.
    Chars,
    /// Count extended grapheme clusters.
    #[default]
    Graphemes,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
            LengthMode::Graphemes => input.graphemes(true).count(),
        }
    }
}

// ============================================================================
// LENGTH POLICY
// ============================================================================

/// What a [`LengthValidator`] reports for input shorter than its limit.
///
/// This is the one place that decides it. Over-limit input is always
/// invalid, whichever policy is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPolicy {
    /// Too-short input is `Invalid({LengthMismatch})`.
    #[default]
    Strict,
    /// Too-short input is `Valid({LengthMismatch})`, a warning only.
    Lenient,
}

impl LengthPolicy {
    #[inline]
    const fn shortfall(self) -> Outcome {
        match self {
            LengthPolicy::Strict => Outcome::invalid(ResultFlags::LENGTH_MISMATCH),
            LengthPolicy::Lenient => Outcome::valid_with(ResultFlags::LENGTH_MISMATCH),
        }
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

/// Validates that a string is present and not empty.
///
/// Whitespace counts as content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotEmptyValidator;

impl Validate for NotEmptyValidator {
    fn validate(&self, input: Option<&str>) -> Outcome {
        match input {
            Some(text) if !text.is_empty() => Outcome::valid(),
            _ => Outcome::invalid(ResultFlags::EMPTY_STRING),
        }
    }
}

impl fmt::Display for NotEmptyValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NotEmpty")
    }
}

/// Creates a [`NotEmptyValidator`].
#[must_use]
pub const fn not_empty() -> NotEmptyValidator {
    NotEmptyValidator
}

// ============================================================================
// LENGTH
// ============================================================================

/// Validates that a string has exactly `limit` characters.
///
/// | input                | outcome                                  |
/// |----------------------|------------------------------------------|
/// | absent               | `Invalid({LengthMismatch})`              |
/// | longer than limit    | `Invalid({LengthExceeded, LengthMismatch})` |
/// | shorter than limit   | per [`LengthPolicy`]                     |
/// | exactly limit        | `Valid`                                  |
///
/// # Examples
///
/// ```
/// use siv_validator::foundation::{Outcome, ResultFlags, Validate};
/// use siv_validator::validators::LengthValidator;
///
/// let validator = LengthValidator::new(5);
/// assert_eq!(validator.validate(Some("01234")), Outcome::valid());
/// assert_eq!(
///     validator.validate(Some("012")),
///     Outcome::invalid(ResultFlags::LENGTH_MISMATCH),
/// );
///
/// let lenient = LengthValidator::lenient(5);
/// assert_eq!(
///     lenient.validate(Some("012")),
///     Outcome::valid_with(ResultFlags::LENGTH_MISMATCH),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthValidator {
    limit: usize,
    policy: LengthPolicy,
    mode: LengthMode,
}

impl LengthValidator {
    /// Creates a strict length validator counting grapheme clusters.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            limit,
            policy: LengthPolicy::Strict,
            mode: LengthMode::Graphemes,
        }
    }

    /// Creates a validator that only warns about too-short input.
    #[must_use]
    pub const fn lenient(limit: usize) -> Self {
        Self::new(limit).with_policy(LengthPolicy::Lenient)
    }

    /// Creates a strict length validator that counts bytes.
    #[must_use]
    pub const fn bytes(limit: usize) -> Self {
        Self::new(limit).with_mode(LengthMode::Bytes)
    }

    /// Sets the shortfall policy.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_policy(mut self, policy: LengthPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets how length is counted.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_mode(mut self, mode: LengthMode) -> Self {
        self.mode = mode;
        self
    }

    /// The target length.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// The shortfall policy.
    #[must_use]
    pub const fn policy(&self) -> LengthPolicy {
        self.policy
    }

    /// The counting mode.
    #[must_use]
    pub const fn mode(&self) -> LengthMode {
        self.mode
    }
}

impl Validate for LengthValidator {
    fn validate(&self, input: Option<&str>) -> Outcome {
        let Some(text) = input else {
            return Outcome::invalid(ResultFlags::LENGTH_MISMATCH);
        };

        match self.mode.measure(text).cmp(&self.limit) {
            Ordering::Greater => {
                Outcome::invalid(ResultFlags::LENGTH_EXCEEDED | ResultFlags::LENGTH_MISMATCH)
            }
            Ordering::Less => self.policy.shortfall(),
            Ordering::Equal => Outcome::valid(),
        }
    }
}

impl fmt::Display for LengthValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LengthLimit: {}", self.limit)
    }
}

/// Creates a strict [`LengthValidator`].
#[must_use]
pub const fn length_limit(limit: usize) -> LengthValidator {
    LengthValidator::new(limit)
}

// ============================================================================
// TESTS
// ============================================================================
