//! Regular expression validator
//!
//! [`PatternValidator`] checks a string against a pattern that must match
//! the *whole* input, starting at offset 0. Two preconfigured instances are
//! shared process-wide: [`numeric`] and [`alphanumeric`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex_automata::meta::Regex;
use regex_syntax::hir::{Hir, Look};

use crate::foundation::{ConfigError, Outcome, ResultFlags, Validate};

/// Pattern of the [`numeric`] validator.
pub const NUMERIC_PATTERN: &str = "^[0-9]*$";

/// Pattern of the [`alphanumeric`] validator.
pub const ALPHANUMERIC_PATTERN: &str = "^[0-9a-zA-Z]*$";

static NUMERIC: LazyLock<PatternValidator> = LazyLock::new(|| {
    PatternValidator::new(NUMERIC_PATTERN).expect("numeric pattern is a valid regex")
});

static ALPHANUMERIC: LazyLock<PatternValidator> = LazyLock::new(|| {
    PatternValidator::new(ALPHANUMERIC_PATTERN).expect("alphanumeric pattern is a valid regex")
});

/// Validates that a string matches a regular expression in full.
///
/// - absent input is `Invalid({InvalidFormat})`;
/// - the empty string is always valid;
/// - any other input must be matched by the pattern from its first to its
///   last character, a matching prefix is not enough.
///
/// Cloning is cheap: the compiled program is shared.
///
/// # Examples
///
/// ```
/// use siv_validator::foundation::Validate;
/// use siv_validator::validators::PatternValidator;
///
/// let hex = PatternValidator::new("[0-9a-f]+").unwrap();
/// assert!(hex.validate(Some("deadbeef")).is_valid());
/// assert!(!hex.validate(Some("beefy")).is_valid()); // only a prefix matches
///
/// assert!(PatternValidator::new("(").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PatternValidator {
    pattern: String,
    anchored: Regex,
}

impl PatternValidator {
    /// Compiles `pattern`.
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the pattern does not
    /// compile; the error is also logged at `warn` level.
    pub fn new(pattern: impl Into<String>) -> Result<Self, ConfigError> {
        let pattern = pattern.into();

        match compile_full_match(&pattern) {
            Ok(anchored) => Ok(Self { pattern, anchored }),
            Err(source) => {
                tracing::warn!(%pattern, error = %source, "rejected validator pattern");
                Err(ConfigError::InvalidPattern { pattern, source })
            }
        }
    }

    /// The shared validator for `^[0-9]*$`.
    #[must_use]
    pub fn numeric() -> Self {
        NUMERIC.clone()
    }

    /// The shared validator for `^[0-9a-zA-Z]*$`.
    #[must_use]
    pub fn alphanumeric() -> Self {
        ALPHANUMERIC.clone()
    }

    /// The pattern as supplied at construction.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns true if the pattern matches all of `text`.
    #[must_use]
    pub fn is_full_match(&self, text: &str) -> bool {
        self.anchored.is_match(text)
    }
}

/// Compiles `pattern` so that a match must span the whole haystack.
///
/// The anchors are added to the parsed expression, not to the pattern text,
/// so flags and comments inside the pattern cannot reach them.
fn compile_full_match(
    pattern: &str,
) -> Result<Regex, Box<dyn std::error::Error + Send + Sync>> {
    let hir = regex_syntax::parse(pattern)?;
    let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);
    Ok(Regex::builder().build_from_hir(&anchored)?)
}

impl Validate for PatternValidator {
    fn validate(&self, input: Option<&str>) -> Outcome {
        match input {
            None => Outcome::invalid(ResultFlags::INVALID_FORMAT),
            Some(text) if !text.is_empty() && !self.is_full_match(text) => {
                Outcome::invalid(ResultFlags::INVALID_FORMAT)
            }
            Some(_) => Outcome::valid(),
        }
    }
}

impl fmt::Display for PatternValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegEX: {}", self.pattern)
    }
}

impl PartialEq for PatternValidator {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for PatternValidator {}

impl Hash for PatternValidator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
    }
}

/// Returns the shared numeric validator.
#[must_use]
pub fn numeric() -> PatternValidator {
    PatternValidator::numeric()
}

/// Returns the shared alphanumeric validator.
#[must_use]
pub fn alphanumeric() -> PatternValidator {
    PatternValidator::alphanumeric()
}

/// Creates a [`PatternValidator`].
pub fn pattern(pattern: impl Into<String>) -> Result<PatternValidator, ConfigError> {
    PatternValidator::new(pattern)
}
