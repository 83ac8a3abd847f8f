//! Declarative validator configuration.
//!
//! A [`ValidatorConfig`] describes a validator tree as data, so it can be
//! kept in a JSON document next to the form it guards and built at startup.
//!
//! ```
//! use siv_validator::config::from_json;
//!
//! let validator = from_json(r#"
//!     { "composite": [
//!         { "length": { "limit": 5 } },
//!         "not_empty",
//!         "numeric"
//!     ] }
//! "#).unwrap();
//!
//! assert!(validator.validate(Some("80331")).is_valid());
//! assert_eq!(
//!     validator.to_string(),
//!     "CompositeValidator: LengthLimit: 5, NotEmpty, RegEX: ^[0-9]*$,",
//! );
//! ```
//!
//! Unit variants are plain strings (`"not_empty"`, `"numeric"`,
//! `"alphanumeric"`, `"phone"`); the others are single-key objects
//! (`{"length": {...}}`, `{"pattern": "..."}`, `{"composite": [...]}`).

use serde::{Deserialize, Serialize};

use crate::combinators::CompositeValidator;
use crate::foundation::{ConfigError, Validate};
use crate::validators::{
    LengthMode, LengthPolicy, LengthValidator, NotEmptyValidator, PatternValidator,
    PhoneNumberValidator,
};

/// A validator described as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorConfig {
    /// [`NotEmptyValidator`].
    NotEmpty,
    /// The shared numeric [`PatternValidator`].
    Numeric,
    /// The shared alphanumeric [`PatternValidator`].
    Alphanumeric,
    /// [`PhoneNumberValidator`] with the built-in detector.
    Phone,
    /// [`LengthValidator`].
    Length(LengthConfig),
    /// [`PatternValidator`] for a custom pattern.
    Pattern(String),
    /// [`CompositeValidator`] over nested configs.
    Composite(Vec<ValidatorConfig>),
}

/// Settings of a [`LengthValidator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LengthConfig {
    /// Target length.
    pub limit: usize,
    /// Shortfall policy, `"strict"` when omitted.
    #[serde(default)]
    pub policy: LengthPolicy,
    /// Counting mode, `"graphemes"` when omitted.
    #[serde(default)]
    pub mode: LengthMode,
}

impl ValidatorConfig {
    /// Parses a JSON config document.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Short name of the variant, used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotEmpty => "not_empty",
            Self::Numeric => "numeric",
            Self::Alphanumeric => "alphanumeric",
            Self::Phone => "phone",
            Self::Length(_) => "length",
            Self::Pattern(_) => "pattern",
            Self::Composite(_) => "composite",
        }
    }

    /// Builds the described validator.
    ///
    /// Fails on the first pattern that does not compile or on an empty
    /// composite, at any depth.
    pub fn build(&self) -> Result<Box<dyn Validate>, ConfigError> {
        let validator: Box<dyn Validate> = match self {
            Self::NotEmpty => Box::new(NotEmptyValidator),
            Self::Numeric => Box::new(PatternValidator::numeric()),
            Self::Alphanumeric => Box::new(PatternValidator::alphanumeric()),
            Self::Phone => Box::new(PhoneNumberValidator::new()),
            Self::Length(length) => Box::new(
                LengthValidator::new(length.limit)
                    .with_policy(length.policy)
                    .with_mode(length.mode),
            ),
            Self::Pattern(pattern) => Box::new(PatternValidator::new(pattern.as_str())?),
            Self::Composite(members) => {
                let validators = members
                    .iter()
                    .map(Self::build)
                    .collect::<Result<Vec<_>, _>>()?;
                Box::new(CompositeValidator::new(validators)?)
            }
        };

        tracing::debug!(kind = self.kind(), validator = %validator, "built validator from config");
        Ok(validator)
    }
}

/// Parses a JSON config document and builds the validator it describes.
pub fn from_json(document: &str) -> Result<Box<dyn Validate>, ConfigError> {
    ValidatorConfig::from_json(document)?.build()
}
