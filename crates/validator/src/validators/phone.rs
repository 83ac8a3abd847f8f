//! Phone number validator.
//!
//! The validator delegates the actual recognition to a
//! [`PhoneNumberDetector`]. The built-in [`FormatDetector`] accepts the
//! formats people commonly type, national or international.

use std::fmt;

use crate::foundation::{Outcome, ResultFlags, Validate};

// ============================================================================
// DETECTOR
// ============================================================================

/// Recognizes phone numbers spanning a whole string.
///
/// Implementations report how many phone numbers match `subject` anchored
/// at its start and covering all of it. [`PhoneNumberValidator`] accepts
/// the input only when the count is exactly one.
pub trait PhoneNumberDetector: Send + Sync {
    /// Number of full-span phone-number matches in `subject`.
    fn count_matches(&self, subject: &str) -> usize;
}

/// Lenient phone number format recognizer.
///
/// Accepts a string when:
/// - it contains only digits, spaces and `+ - ( ) / .`;
/// - a `+` appears only as the very first character, followed by a digit;
/// - it starts with a digit, `+` or `(` and ends with a digit;
/// - parentheses are balanced, not nested, and hold digits only;
/// - the digit count is within the configured bounds (7 to 15 by default).
///   A leading `00` international prefix is not counted.
///
/// # Examples
///
/// ```
/// use siv_validator::validators::{FormatDetector, PhoneNumberDetector};
///
/// let detector = FormatDetector::new();
/// assert_eq!(detector.count_matches("+49 (30) 12345 - 67"), 1);
/// assert_eq!(detector.count_matches("0 30 / 12 34 56"), 1);
/// assert_eq!(detector.count_matches("call me"), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatDetector {
    min_digits: u8,
    max_digits: u8,
}

impl FormatDetector {
    /// Creates a detector accepting 7 to 15 digits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_digits: 7,
            max_digits: 15,
        }
    }

    /// Sets the minimum number of digits required.
    #[must_use = "builder methods must be chained or built"]
    pub const fn min_digits(mut self, min: u8) -> Self {
        self.min_digits = min;
        self
    }

    /// Sets the maximum number of digits allowed.
    #[must_use = "builder methods must be chained or built"]
    pub const fn max_digits(mut self, max: u8) -> Self {
        self.max_digits = max;
        self
    }

    fn is_phone_number(&self, subject: &str) -> bool {
        let (international, body) = match subject.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, subject),
        };

        let first_ok = if international {
            body.starts_with(|c: char| c.is_ascii_digit())
        } else {
            body.starts_with(|c: char| c.is_ascii_digit() || c == '(')
        };
        if !first_ok || !body.ends_with(|c: char| c.is_ascii_digit()) {
            return false;
        }

        let mut digits = 0usize;
        // Some(n) while inside parentheses, n = digits seen inside
        let mut group: Option<usize> = None;

        for c in body.chars() {
            match (c, group) {
                ('0'..='9', Some(inner)) => {
                    digits += 1;
                    group = Some(inner + 1);
                }
                ('0'..='9', None) => digits += 1,
                ('(', None) => group = Some(0),
                (')', Some(inner)) if inner > 0 => group = None,
                (' ' | '-' | '/' | '.', None) => {}
                _ => return false,
            }
        }

        if group.is_some() {
            return false;
        }

        let counted = if !international && body.starts_with("00") {
            digits.saturating_sub(2)
        } else {
            digits
        };

        (usize::from(self.min_digits)..=usize::from(self.max_digits)).contains(&counted)
    }
}

impl Default for FormatDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneNumberDetector for FormatDetector {
    fn count_matches(&self, subject: &str) -> usize {
        usize::from(self.is_phone_number(subject))
    }
}

// ============================================================================
// PHONE NUMBER VALIDATOR
// ============================================================================

/// Validates that a string is a single phone number.
///
/// - absent or empty input is `Invalid({EmptyString})`;
/// - exactly one full-span match from the detector is `Valid`;
/// - zero or several matches are `Invalid({InvalidFormat})`.
///
/// # Examples
///
/// ```
/// use siv_validator::foundation::{Outcome, ResultFlags, Validate};
/// use siv_validator::validators::PhoneNumberValidator;
///
/// let validator = PhoneNumberValidator::new();
/// assert!(validator.validate(Some("+49 89 123456")).is_valid());
/// assert_eq!(validator.validate(Some("")), Outcome::invalid(ResultFlags::EMPTY_STRING));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PhoneNumberValidator<D = FormatDetector> {
    detector: D,
}

impl PhoneNumberValidator {
    /// Creates a validator using the built-in [`FormatDetector`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            detector: FormatDetector::new(),
        }
    }
}

impl<D: PhoneNumberDetector> PhoneNumberValidator<D> {
    /// Creates a validator using a custom detector.
    #[must_use]
    pub const fn with_detector(detector: D) -> Self {
        Self { detector }
    }

    /// The detector this validator consults.
    #[must_use]
    pub const fn detector(&self) -> &D {
        &self.detector
    }
}

impl<D: PhoneNumberDetector> Validate for PhoneNumberValidator<D> {
    fn validate(&self, input: Option<&str>) -> Outcome {
        let text = match input {
            Some(text) if !text.is_empty() => text,
            _ => return Outcome::invalid(ResultFlags::EMPTY_STRING),
        };

        if self.detector.count_matches(text) == 1 {
            Outcome::valid()
        } else {
            Outcome::invalid(ResultFlags::INVALID_FORMAT)
        }
    }
}

impl<D> fmt::Display for PhoneNumberValidator<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PhoneNumber")
    }
}

/// Creates a [`PhoneNumberValidator`] with the built-in detector.
#[must_use]
pub const fn phone_number() -> PhoneNumberValidator {
    PhoneNumberValidator::new()
}

// ============================================================================
// TESTS
// ============================================================================
