//! # Cellstream Core
//!
//! Pure primitives for cellstream: versioned scalar streams that freeze to a
//! canonical byte form, order deterministically, and reconcile concurrent
//! edits with a three-way merge.
//!
//! This crate contains no I/O, no storage, no networking. A stream is a value
//! cell owned by whatever record embeds it.
//!
//! ## Key Types
//!
//! - [`Stream`] - The capability set every stream kind implements
//! - [`ByteStream`] - The byte-sequence stream (unset or arbitrary bytes)
//! - [`StreamKind`] - Compile-time registry of stream kinds
//! - [`MergeOutcome`] - Result of a three-way merge
//!
//! ## Example
//!
//! ```rust
//! use cellstream_core::{ByteStream, MergeOutcome, Stream};
//!
//! let mut local = ByteStream::from(&b"alpha"[..]);
//! let peer = ByteStream::from(&b"alpha"[..]);
//! let edited = ByteStream::from(&b"beta"[..]);
//!
//! let diff = edited.diff(&peer);
//! assert_eq!(diff.as_deref(), Some(&b"beta"[..]));
//!
//! let outcome = local.three_way_merge(diff.as_deref(), &peer);
//! assert_eq!(outcome, MergeOutcome::Applied);
//! assert_eq!(local.get().as_deref(), Some(&b"beta"[..]));
//! ```

pub mod bytes_stream;
pub mod canonical;
pub mod error;
pub mod fingerprint;
pub mod kind;
pub mod options;
pub mod stream;

pub use bytes_stream::{compare_frozen, ByteStream, SetInput};
pub use canonical::{decode_frozen, encode_frozen};
pub use error::{Result, StreamError};
pub use fingerprint::Fingerprint;
pub use kind::StreamKind;
pub use options::{EqOptions, FreezeOptions};
pub use stream::{Frozen, MergeOutcome, Stream};
