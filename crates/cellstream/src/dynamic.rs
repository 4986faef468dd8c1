//! Kind-checked operations over type-erased streams.
//!
//! Records that hold heterogeneous fields work with `dyn DynStream`. Every
//! binary operation checks that both sides are the same stream kind before
//! it reads or mutates anything, and fails with
//! [`StreamError::TypeMismatch`] otherwise.

use bytes::Bytes;
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use cellstream_core::{
    EqOptions, FreezeOptions, Frozen, MergeOutcome, Result, Stream, StreamError, StreamKind,
};

/// Object-safe view of a [`Stream`].
///
/// Implemented for every `Stream + 'static`.
pub trait DynStream: Any + fmt::Debug {
    /// The value domain of this stream.
    fn stream_kind(&self) -> StreamKind;

    /// Upcast for downcasting to the concrete stream type.
    fn as_any(&self) -> &dyn Any;

    /// Produce the canonical frozen form.
    fn freeze_dyn(&self, options: &FreezeOptions) -> Frozen;

    /// Replace the value from canonical bytes.
    fn thaw_dyn(&mut self, frozen: &[u8]);

    /// Order against a stream of the same kind.
    fn compare_dyn(&self, other: &dyn DynStream) -> Result<Ordering>;

    /// Equality against a stream of the same kind.
    fn equals_dyn(&self, other: &dyn DynStream, options: &EqOptions) -> Result<bool>;

    /// Diff against a reference of the same kind.
    fn diff_dyn(&self, reference: &dyn DynStream) -> Result<Option<Bytes>>;

    /// Three-way merge against a peer of the same kind.
    fn three_way_merge_dyn(
        &mut self,
        incoming: Option<&[u8]>,
        peer: &dyn DynStream,
    ) -> Result<MergeOutcome>;

    /// Clone into a new box.
    fn clone_box(&self) -> Box<dyn DynStream>;
}

impl<S: Stream + 'static> DynStream for S {
    fn stream_kind(&self) -> StreamKind {
        Stream::kind(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn freeze_dyn(&self, options: &FreezeOptions) -> Frozen {
        self.freeze(options)
    }

    fn thaw_dyn(&mut self, frozen: &[u8]) {
        self.thaw(frozen);
    }

    fn compare_dyn(&self, other: &dyn DynStream) -> Result<Ordering> {
        let other = same_kind(self, other)?;
        Ok(self.compare(other))
    }

    fn equals_dyn(&self, other: &dyn DynStream, options: &EqOptions) -> Result<bool> {
        let other = same_kind(self, other)?;
        Ok(self.equals(other, options))
    }

    fn diff_dyn(&self, reference: &dyn DynStream) -> Result<Option<Bytes>> {
        let reference = same_kind(self, reference)?;
        Ok(self.diff(reference))
    }

    fn three_way_merge_dyn(
        &mut self,
        incoming: Option<&[u8]>,
        peer: &dyn DynStream,
    ) -> Result<MergeOutcome> {
        let peer = same_kind(&*self, peer)?;
        Ok(self.three_way_merge(incoming, peer))
    }

    fn clone_box(&self) -> Box<dyn DynStream> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn DynStream> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Resolve `other` to the concrete type of `this`, or fail with a kind
/// mismatch.
fn same_kind<'a, S: Stream + 'static>(this: &S, other: &'a dyn DynStream) -> Result<&'a S> {
    let expected = Stream::kind(this);
    let found = other.stream_kind();
    if expected != found {
        tracing::debug!(%expected, %found, "stream kind mismatch");
        return Err(StreamError::TypeMismatch { expected, found });
    }

    // Same kind tag but a different concrete type is still a mismatch.
    other
        .as_any()
        .downcast_ref::<S>()
        .ok_or(StreamError::TypeMismatch { expected, found })
}
