//! Result flag sets
//!
//! [`ResultFlags`] is the vocabulary every validator reports in. A validator
//! may set several flags at once (a string that is both too long and not of
//! the exact target length), and a composite validator unions the flags of
//! all its members.
//!
//! Serialized form is the list of display names, the same names `Display`
//! prints: `["InvalidFormat", "LengthMismatch"]`.

use std::fmt;

use bitflags::bitflags;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Named validation conditions, reported as a set.
    ///
    /// Union ([`merge`](ResultFlags::merge)) is idempotent and commutative,
    /// and the empty set means "no flags recorded".
    ///
    /// # Examples
    ///
    /// ```
    /// use siv_validator::foundation::ResultFlags;
    ///
    /// let flags = ResultFlags::LENGTH_MISMATCH.merge(ResultFlags::INVALID_FORMAT);
    /// assert!(flags.contains(ResultFlags::INVALID_FORMAT));
    /// assert_eq!(flags.to_string(), "[InvalidFormat, LengthMismatch]");
    /// assert_eq!(ResultFlags::empty().to_string(), "[]");
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ResultFlags: u8 {
        /// The input does not have the expected format.
        const INVALID_FORMAT = 1 << 0;
        /// The input is longer than the configured limit.
        const LENGTH_EXCEEDED = 1 << 1;
        /// The input is absent or has zero length.
        const EMPTY_STRING = 1 << 2;
        /// The input length differs from the configured target length.
        const LENGTH_MISMATCH = 1 << 3;
    }
}

/// Display names in ascending bit order. Rendering walks this table, never
/// the declaration order of the flags.
const DISPLAY_NAMES: [(ResultFlags, &str); 4] = [
    (ResultFlags::INVALID_FORMAT, "InvalidFormat"),
    (ResultFlags::LENGTH_EXCEEDED, "LengthExceeded"),
    (ResultFlags::EMPTY_STRING, "EmptyString"),
    (ResultFlags::LENGTH_MISMATCH, "LengthMismatch"),
];

impl ResultFlags {
    /// Returns the union of both sets.
    #[inline]
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        self.union(other)
    }

    /// Display names of the flags present, in ascending bit order.
    pub fn display_names(self) -> impl Iterator<Item = &'static str> {
        DISPLAY_NAMES
            .iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
    }

    /// Looks up a single flag by its display name.
    ///
    /// ```
    /// use siv_validator::foundation::ResultFlags;
    ///
    /// assert_eq!(ResultFlags::from_display_name("EmptyString"), Some(ResultFlags::EMPTY_STRING));
    /// assert_eq!(ResultFlags::from_display_name("EMPTY_STRING"), None);
    /// ```
    #[must_use]
    pub fn from_display_name(name: &str) -> Option<Self> {
        DISPLAY_NAMES
            .iter()
            .find(|(_, display)| *display == name)
            .map(|(flag, _)| *flag)
    }
}

impl Serialize for ResultFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.display_names())
    }
}

impl<'de> Deserialize<'de> for ResultFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        names.iter().try_fold(Self::empty(), |flags, name| {
            Self::from_display_name(name)
                .map(|flag| flags | flag)
                .ok_or_else(|| de::Error::custom(format!("unknown result flag `{name}`")))
        })
    }
}

impl fmt::Display for ResultFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, name) in self.display_names().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        f.write_str("]")
    }
}
