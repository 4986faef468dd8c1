//! Stream kinds.
//!
//! Every stream kind in the system is listed here, resolved at compile time.
//! Only [`StreamKind::Bytes`] is implemented in this crate; the remaining
//! kinds are implemented by the record layers that own them, against the
//! same [`Stream`](crate::Stream) trait.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator for the value domain of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StreamKind {
    /// Arbitrary byte sequence, or unset.
    Bytes,
    /// Fixed-width integer.
    Integer,
    /// Value drawn from a closed set of names.
    Enumerated,
    /// Numeric range with inclusive bounds.
    NumericRange,
    /// Composite record of nested streams.
    StreamSet,
}

impl StreamKind {
    /// Every registered kind, in tag order.
    pub const ALL: [StreamKind; 5] = [
        StreamKind::Bytes,
        StreamKind::Integer,
        StreamKind::Enumerated,
        StreamKind::NumericRange,
        StreamKind::StreamSet,
    ];

    /// Stable lowercase name, used in fingerprints and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            StreamKind::Bytes => "bytes",
            StreamKind::Integer => "integer",
            StreamKind::Enumerated => "enumerated",
            StreamKind::NumericRange => "numeric-range",
            StreamKind::StreamSet => "stream-set",
        }
    }

    /// Resolve a kind from its stable name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Numeric tag for compact encodings.
    pub const fn to_u8(self) -> u8 {
        match self {
            StreamKind::Bytes => 0,
            StreamKind::Integer => 1,
            StreamKind::Enumerated => 2,
            StreamKind::NumericRange => 3,
            StreamKind::StreamSet => 4,
        }
    }

    /// Convert from a numeric tag.
    pub fn from_u8(tag: u8) -> Option<Self> {
        Self::ALL.get(tag as usize).copied()
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for kind in StreamKind::ALL {
            assert_eq!(StreamKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(StreamKind::from_name("string"), None);
    }

    #[test]
    fn test_tag_roundtrip() {
        for kind in StreamKind::ALL {
            assert_eq!(StreamKind::from_u8(kind.to_u8()), Some(kind));
        }
        assert_eq!(StreamKind::from_u8(5), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(StreamKind::NumericRange.to_string(), "numeric-range");
    }
}
