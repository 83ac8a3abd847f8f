//! Prelude module for convenient imports.
//!
//! Provides a single `use siv_validator::prelude::*;` import that brings
//! in all commonly needed traits, types, validators, and combinators.
//!
//! # Examples
//!
//! ```
//! use siv_validator::prelude::*;
//!
//! let zip = compose![length_limit(5), numeric()];
//! let phone = not_empty().and(phone_number());
//! assert!(zip.validate(Some("80331")).is_valid());
//! assert!(phone.validate(Some("+49 89 123456")).is_valid());
//! ```

// ============================================================================
// FOUNDATION: Core traits, flags, outcomes, errors
// ============================================================================

pub use crate::foundation::{
    ConfigError, Outcome, ResultFlags, Validate, ValidateExt, ValidationFailure,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    FormatDetector, LengthMode, LengthPolicy, LengthValidator, NotEmptyValidator,
    PatternValidator, PhoneNumberDetector, PhoneNumberValidator, alphanumeric, length_limit,
    not_empty, numeric, pattern, phone_number,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::CompositeValidator;
pub use crate::compose;
