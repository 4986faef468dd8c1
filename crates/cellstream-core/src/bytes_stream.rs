//! Byte stream: a stream holding an arbitrary byte sequence, or unset.
//!
//! The canonical frozen form is the held bytes verbatim. Changes are
//! whole-value replacements; there are no partial deltas.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{debug, trace};

use crate::kind::StreamKind;
use crate::options::FreezeOptions;
use crate::stream::{Frozen, MergeOutcome, Stream};

/// Number of bytes shown in `Debug` and `Display` previews.
const PREVIEW_LEN: usize = 16;

/// Input accepted by [`ByteStream::set`].
///
/// Text is stored as its UTF-8 encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetInput {
    /// Clear the value to the unset marker.
    Unset,
    /// Raw bytes, stored as-is.
    Bytes(Bytes),
    /// Text, stored as UTF-8.
    Text(String),
}

impl From<Option<Bytes>> for SetInput {
    fn from(value: Option<Bytes>) -> Self {
        match value {
            Some(b) => SetInput::Bytes(b),
            None => SetInput::Unset,
        }
    }
}

impl From<Bytes> for SetInput {
    fn from(value: Bytes) -> Self {
        SetInput::Bytes(value)
    }
}

impl From<Vec<u8>> for SetInput {
    fn from(value: Vec<u8>) -> Self {
        SetInput::Bytes(value.into())
    }
}

impl From<&[u8]> for SetInput {
    fn from(value: &[u8]) -> Self {
        SetInput::Bytes(Bytes::copy_from_slice(value))
    }
}

impl From<String> for SetInput {
    fn from(value: String) -> Self {
        SetInput::Text(value)
    }
}

impl From<&str> for SetInput {
    fn from(value: &str) -> Self {
        SetInput::Text(value.to_owned())
    }
}

/// A versioned byte-sequence value.
///
/// `None` is the unset marker. It orders below every present value,
/// including the empty sequence.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ByteStream {
    value: Option<Bytes>,
}

impl ByteStream {
    /// Create a stream holding the empty byte sequence.
    pub fn new() -> Self {
        Self {
            value: Some(Bytes::new()),
        }
    }

    /// Create an unset stream.
    pub fn unset() -> Self {
        Self { value: None }
    }

    /// Restore a stream from a previously frozen value.
    pub fn from_frozen(frozen: Frozen) -> Self {
        Self { value: frozen }
    }

    /// Replace the value.
    pub fn set(&mut self, input: impl Into<SetInput>) {
        self.value = match input.into() {
            SetInput::Unset => None,
            SetInput::Bytes(b) => Some(b),
            SetInput::Text(s) => Some(Bytes::from(s.into_bytes())),
        };
    }

    /// Get the current value.
    ///
    /// `Bytes` is immutable, so the caller cannot alter the stored value
    /// through the returned handle.
    pub fn get(&self) -> Option<Bytes> {
        self.value.clone()
    }

    /// Borrow the current value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    /// Return to the freshly constructed state (empty, not unset).
    pub fn reset(&mut self) {
        self.value = Some(Bytes::new());
    }

    /// Check if a value is present.
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Length of the held value; zero when unset.
    pub fn len(&self) -> usize {
        self.value.as_ref().map_or(0, Bytes::len)
    }

    /// Check if the stream is unset or holds the empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ByteStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Stream for ByteStream {
    fn kind(&self) -> StreamKind {
        StreamKind::Bytes
    }

    fn freeze(&self, _options: &FreezeOptions) -> Frozen {
        self.value.clone()
    }

    fn thaw(&mut self, frozen: &[u8]) {
        self.value = Some(Bytes::copy_from_slice(frozen));
    }

    fn compare(&self, other: &Self) -> Ordering {
        compare_frozen(self.as_bytes(), other.as_bytes())
    }

    fn diff(&self, reference: &Self) -> Option<Bytes> {
        if !reference.is_set() {
            trace!(kind = %StreamKind::Bytes, "reference unset, no diff");
            return None;
        }

        if self.compare(reference) == Ordering::Equal {
            trace!(kind = %StreamKind::Bytes, "values equal, no diff");
            return None;
        }

        trace!(kind = %StreamKind::Bytes, len = self.len(), "whole-value diff");
        self.freeze(&FreezeOptions::default())
    }

    fn three_way_merge(&mut self, incoming: Option<&[u8]>, peer: &Self) -> MergeOutcome {
        // Local still matches the peer's prior view: take the incoming value.
        if self.compare(peer) == Ordering::Equal {
            self.value = incoming.map(Bytes::copy_from_slice);
            debug!(
                kind = %StreamKind::Bytes,
                outcome = %MergeOutcome::Applied,
                len = self.len(),
                "three-way merge"
            );
            return MergeOutcome::Applied;
        }

        if self.as_bytes() == incoming {
            debug!(kind = %StreamKind::Bytes, outcome = %MergeOutcome::AlreadyApplied, "three-way merge");
            return MergeOutcome::AlreadyApplied;
        }

        debug!(
            kind = %StreamKind::Bytes,
            outcome = %MergeOutcome::Conflict,
            local_len = self.len(),
            incoming_len = incoming.map(<[u8]>::len),
            "three-way merge"
        );
        MergeOutcome::Conflict
    }
}

/// Order two frozen byte values.
///
/// Unset sorts first. Present values compare bytewise over the shared
/// prefix, then the shorter one sorts first.
pub fn compare_frozen(a: Option<&[u8]>, b: Option<&[u8]>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

impl PartialOrd for ByteStream {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteStream {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for ByteStream {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.value {
            None => state.write_u8(0),
            Some(b) => {
                state.write_u8(1);
                b.as_ref().hash(state);
            }
        }
    }
}

impl From<Bytes> for ByteStream {
    fn from(value: Bytes) -> Self {
        Self { value: Some(value) }
    }
}

impl From<Vec<u8>> for ByteStream {
    fn from(value: Vec<u8>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl From<&[u8]> for ByteStream {
    fn from(value: &[u8]) -> Self {
        Self {
            value: Some(Bytes::copy_from_slice(value)),
        }
    }
}

impl From<&str> for ByteStream {
    fn from(value: &str) -> Self {
        Self::from(value.as_bytes())
    }
}

fn write_preview(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    if bytes.len() > PREVIEW_LEN {
        write!(f, "{}..", hex::encode(&bytes[..PREVIEW_LEN]))
    } else {
        write!(f, "{}", hex::encode(bytes))
    }
}

impl fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            None => write!(f, "ByteStream(unset)"),
            Some(b) => {
                write!(f, "ByteStream({} bytes: ", b.len())?;
                write_preview(f, b)?;
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for ByteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            None => write!(f, "unset"),
            Some(b) => write_preview(f, b),
        }
    }
}
