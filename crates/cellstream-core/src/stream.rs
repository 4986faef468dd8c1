//! The stream capability set.
//!
//! Every stream kind, scalar or composite, implements [`Stream`]. A composite
//! record recurses the same operations field by field, so the trait is the
//! only seam between kinds.

use bytes::Bytes;
use std::cmp::Ordering;
use std::fmt;

use crate::kind::StreamKind;
use crate::options::{EqOptions, FreezeOptions};

/// Canonical frozen form of a stream: `None` is the unset marker, which is
/// distinct from a present zero-length value.
pub type Frozen = Option<Bytes>;

/// Outcome of a three-way merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeOutcome {
    /// Local had not diverged from the peer's prior view; the incoming value
    /// was applied.
    Applied,
    /// Local had diverged but already holds the incoming value; nothing changed.
    AlreadyApplied,
    /// Local diverged to a different value; nothing changed.
    Conflict,
}

impl MergeOutcome {
    /// Check if the merge conflicted.
    pub fn is_conflict(&self) -> bool {
        matches!(self, MergeOutcome::Conflict)
    }

    /// Check if the merge changed the local value.
    pub fn is_applied(&self) -> bool {
        matches!(self, MergeOutcome::Applied)
    }
}

impl fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeOutcome::Applied => f.write_str("applied"),
            MergeOutcome::AlreadyApplied => f.write_str("already-applied"),
            MergeOutcome::Conflict => f.write_str("conflict"),
        }
    }
}

/// A versioned value that freezes, orders, diffs, and merges.
///
/// Operations between two streams of the same Rust type cannot mismatch.
/// Kind checks for streams behind trait objects live in the surface crate.
pub trait Stream: Clone + fmt::Debug {
    /// The value domain of this stream.
    fn kind(&self) -> StreamKind;

    /// Produce the canonical frozen form.
    ///
    /// Pure: never mutates the stream.
    fn freeze(&self, options: &FreezeOptions) -> Frozen;

    /// Replace the value from canonical bytes, bypassing input coercion.
    fn thaw(&mut self, frozen: &[u8]);

    /// Total order over two streams of this kind.
    fn compare(&self, other: &Self) -> Ordering;

    /// Equality under `compare`.
    fn equals(&self, other: &Self, options: &EqOptions) -> bool {
        let _ = options;
        self.compare(other) == Ordering::Equal
    }

    /// One-sided difference of `self` relative to `reference`.
    ///
    /// `None` means there is nothing to send.
    fn diff(&self, reference: &Self) -> Option<Bytes>;

    /// Reconcile an incoming change against the peer's prior view.
    ///
    /// `peer` is the value the remote side held before its change and
    /// `incoming` is the diff it produced. `None` as the incoming diff
    /// carries the unset value.
    fn three_way_merge(&mut self, incoming: Option<&[u8]>, peer: &Self) -> MergeOutcome;
}
