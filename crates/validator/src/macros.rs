//! Macros for assembling validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`compose!`]: build a [`CompositeValidator`](crate::combinators::CompositeValidator)
//!   from one or more validators
//!
//! # Examples
//!
//! ```
//! use siv_validator::prelude::*;
//!
//! let validator = compose![length_limit(5), not_empty(), numeric()];
//! assert_eq!(validator.len(), 3);
//! ```

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes validators into a flat [`CompositeValidator`](crate::combinators::CompositeValidator).
///
/// Members keep the order they are written in. At least one validator is
/// required, so the result can never be empty. Nest `compose!` to nest
/// composites.
///
/// ```
/// use siv_validator::prelude::*;
///
/// let validator = compose![numeric(), compose![length_limit(5), not_empty()]];
/// assert_eq!(
///     validator.to_string(),
///     "CompositeValidator: RegEX: ^[0-9]*$, CompositeValidator: LengthLimit: 5, NotEmpty,,",
/// );
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::combinators::CompositeValidator::of($first)$(.and($rest))*
    };
}

// ============================================================================
// TESTS
// ============================================================================
