//! # Cellstream
//!
//! The unified API for cellstream: versioned scalar streams that records
//! embed as fields and reconcile across independently edited copies.
//!
//! ## Overview
//!
//! - **Streams**: value cells with a canonical frozen form and a total order
//! - **Diff**: whole-value replacement relative to a reference
//! - **Three-way merge**: apply an incoming change or flag a conflict
//! - **Binding surface**: validated construction and mutation from generic
//!   host values, and kind-checked operations over `dyn` streams
//!
//! ## Usage
//!
//! ```rust
//! use cellstream::{host, ByteStream, DynStream, MergeOutcome};
//! use ciborium::value::Value;
//!
//! let mut local = host::init_from_host(Some(&Value::Bytes(b"orig".to_vec()))).unwrap();
//! let peer = ByteStream::from("orig");
//!
//! let incoming = Value::Bytes(b"edit".to_vec());
//! let outcome = host::merge_from_host(&mut local, &incoming, &peer).unwrap();
//! assert_eq!(outcome, MergeOutcome::Applied);
//!
//! let other: &dyn DynStream = &peer;
//! assert!(local.diff_dyn(other).unwrap().is_some());
//! ```
//!
//! ## Re-exports
//!
//! - `cellstream::core` - Core primitives (ByteStream, Stream, canonical cells)

pub mod dynamic;
pub mod error;
pub mod host;

// Re-export component crates
pub use cellstream_core as core;

// Re-export main types for convenience
pub use dynamic::DynStream;
pub use error::{Result, SurfaceError};

// Re-export commonly used core types
pub use cellstream_core::{
    ByteStream, EqOptions, Fingerprint, Frozen, FreezeOptions, MergeOutcome, SetInput, Stream,
    StreamError, StreamKind,
};
