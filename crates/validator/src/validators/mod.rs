//! Built-in validators
//!
//! This module provides the ready-to-use string validators.
//!
//! # Categories
//!
//! - **Length**: [`LengthValidator`], [`NotEmptyValidator`]
//! - **Pattern**: [`PatternValidator`] and the shared [`numeric`] /
//!   [`alphanumeric`] instances
//! - **Phone**: [`PhoneNumberValidator`] with a pluggable [`PhoneNumberDetector`]
//!
//! # Examples
//!
//! ```
//! use siv_validator::prelude::*;
//!
//! let zip = compose![length_limit(5), numeric()];
//! assert!(zip.validate(Some("80331")).is_valid());
//! assert!(!zip.validate(Some("8033x")).is_valid());
//! ```

pub mod length;
pub mod pattern;
pub mod phone;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use length::{
    LengthMode, LengthPolicy, LengthValidator, NotEmptyValidator, length_limit, not_empty,
};
pub use pattern::{
    ALPHANUMERIC_PATTERN, NUMERIC_PATTERN, PatternValidator, alphanumeric, numeric, pattern,
};
pub use phone::{
    FormatDetector, PhoneNumberDetector, PhoneNumberValidator, phone_number,
};
