//! # Cellstream Testkit
//!
//! Testing utilities for cellstream.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known canonical cells for cross-implementation checks
//! - **Generators**: Proptest strategies for streams and merge scenarios
//! - **Fixtures**: Named merge scenarios and a test tracing subscriber
//!
//! ## Golden Vectors
//!
//! ```rust
//! use cellstream_testkit::vectors::{all_vectors, verify_all_vectors};
//!
//! for (name, ok, detail) in verify_all_vectors() {
//!     assert!(ok, "{name}: {detail}");
//! }
//! assert!(!all_vectors().is_empty());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use cellstream_testkit::generators::MergeScenario;
//!
//! proptest! {
//!     #[test]
//!     fn merge_never_panics(scenario: MergeScenario) {
//!         let mut local = scenario.local.clone();
//!         local.three_way_merge(scenario.incoming(), &scenario.peer);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use cellstream_testkit::fixtures::merge_fixtures;
//!
//! for fixture in merge_fixtures() {
//!     fixture.check().unwrap();
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{init_tracing, merge_fixtures, MergeFixture};
pub use generators::{byte_stream, frozen_value, MergeScenario};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
