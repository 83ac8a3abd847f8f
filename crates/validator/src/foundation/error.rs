//! Error types
//!
//! Two kinds of failure exist and they never mix:
//!
//! - [`ConfigError`] is returned when a validator cannot be *built*
//!   (a pattern that does not compile, an empty composite, a malformed
//!   config document).
//! - A failed *validation* is ordinary data, an
//!   [`Outcome::Invalid`](crate::foundation::Outcome::Invalid). Callers that
//!   prefer `?` can turn it into a [`ValidationFailure`] with
//!   [`Outcome::into_result`](crate::foundation::Outcome::into_result).

use crate::foundation::ResultFlags;

/// Errors raised while constructing validators.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The pattern could not be parsed or compiled by the regex engine.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// The parse or build error reported by the engine.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A composite validator was given no members.
    #[error("composite validator requires at least one member")]
    EmptyComposite,

    /// A validator config document could not be parsed.
    #[error("malformed validator config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Returns the offending pattern for [`ConfigError::InvalidPattern`].
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::InvalidPattern { pattern, .. } => Some(pattern),
            _ => None,
        }
    }
}

/// A failed validation expressed as an error value.
///
/// Carries every flag the validator reported, not only the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("validation failed: {flags}")]
pub struct ValidationFailure {
    flags: ResultFlags,
}

impl ValidationFailure {
    pub(crate) const fn new(flags: ResultFlags) -> Self {
        Self { flags }
    }

    /// Every reason the input was rejected.
    #[must_use]
    pub const fn flags(&self) -> ResultFlags {
        self.flags
    }

    /// Returns true if `flag` is among the reported reasons.
    #[must_use]
    pub const fn contains(&self, flag: ResultFlags) -> bool {
        self.flags.contains(flag)
    }
}
