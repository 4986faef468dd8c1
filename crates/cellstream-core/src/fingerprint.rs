//! Content fingerprints for frozen streams.
//!
//! `Hash` on a stream is process-local. A fingerprint is a Blake3 digest of
//! the kind name and canonical cell, stable across processes and platforms,
//! and agrees with `equals`: equal streams of one kind share a fingerprint.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::canonical::encode_frozen;
use crate::kind::StreamKind;
use crate::options::FreezeOptions;
use crate::stream::Stream;

/// Domain separation tag for stream fingerprints.
const DOMAIN: &[u8] = b"cellstream-v0:";

/// A 32-byte Blake3 fingerprint.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(pub [u8; 32]);

impl Fingerprint {
    /// Fingerprint a stream's frozen value.
    pub fn of<S: Stream>(stream: &S) -> Self {
        let frozen = stream.freeze(&FreezeOptions::default());
        Self::of_frozen(stream.kind(), frozen.as_deref())
    }

    /// Fingerprint a frozen value of the given kind.
    pub fn of_frozen(kind: StreamKind, frozen: Option<&[u8]>) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(DOMAIN);
        hasher.update(kind.name().as_bytes());
        hasher.update(b":");
        hasher.update(&encode_frozen(frozen));
        Self(*hasher.finalize().as_bytes())
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
