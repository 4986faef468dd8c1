//! Test fixtures and helpers.
//!
//! Named merge scenarios with known outcomes, and a tracing subscriber for
//! tests that want to see merge decisions.

use bytes::Bytes;
use tracing_subscriber::filter::LevelFilter;

use cellstream_core::{ByteStream, MergeOutcome, Stream};

/// Install a tracing subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}

/// A three-way merge with its expected result.
#[derive(Debug, Clone)]
pub struct MergeFixture {
    pub name: &'static str,
    pub local: ByteStream,
    pub peer: ByteStream,
    pub incoming: Option<Bytes>,
    pub expected: MergeOutcome,
    pub expected_local: ByteStream,
}

impl MergeFixture {
    /// Run the merge on a copy of `local`.
    pub fn run(&self) -> (MergeOutcome, ByteStream) {
        let mut local = self.local.clone();
        let outcome = local.three_way_merge(self.incoming.as_deref(), &self.peer);
        (outcome, local)
    }

    /// Run the merge and compare against the expected result.
    pub fn check(&self) -> Result<(), String> {
        let (outcome, local) = self.run();
        if outcome != self.expected {
            return Err(format!(
                "{}: expected {}, got {}",
                self.name, self.expected, outcome
            ));
        }
        if local != self.expected_local {
            return Err(format!(
                "{}: expected local {:?}, got {:?}",
                self.name, self.expected_local, local
            ));
        }
        Ok(())
    }
}

/// All named merge scenarios.
pub fn merge_fixtures() -> Vec<MergeFixture> {
    let alpha = ByteStream::from("alpha");
    let beta = ByteStream::from("beta");

    vec![
        MergeFixture {
            name: "unchanged local takes incoming edit",
            local: alpha.clone(),
            peer: alpha.clone(),
            incoming: beta.diff(&alpha),
            expected: MergeOutcome::Applied,
            expected_local: beta.clone(),
        },
        MergeFixture {
            name: "both sides edited differently",
            local: ByteStream::from("local-edit"),
            peer: ByteStream::from("orig"),
            incoming: Some(Bytes::from_static(b"other-edit")),
            expected: MergeOutcome::Conflict,
            expected_local: ByteStream::from("local-edit"),
        },
        MergeFixture {
            name: "both sides made the same edit",
            local: beta.clone(),
            peer: alpha.clone(),
            incoming: Some(Bytes::from_static(b"beta")),
            expected: MergeOutcome::AlreadyApplied,
            expected_local: beta.clone(),
        },
        MergeFixture {
            name: "unchanged local takes incoming unset",
            local: alpha.clone(),
            peer: alpha.clone(),
            incoming: None,
            expected: MergeOutcome::Applied,
            expected_local: ByteStream::unset(),
        },
        MergeFixture {
            name: "unset local and unset peer take incoming value",
            local: ByteStream::unset(),
            peer: ByteStream::unset(),
            incoming: Some(Bytes::from_static(b"alpha")),
            expected: MergeOutcome::Applied,
            expected_local: alpha.clone(),
        },
        MergeFixture {
            name: "unset local against edited peer conflicts",
            local: ByteStream::unset(),
            peer: alpha.clone(),
            incoming: Some(Bytes::new()),
            expected: MergeOutcome::Conflict,
            expected_local: ByteStream::unset(),
        },
        MergeFixture {
            name: "empty local is not unset",
            local: ByteStream::new(),
            peer: ByteStream::unset(),
            incoming: Some(Bytes::from_static(b"x")),
            expected: MergeOutcome::Conflict,
            expected_local: ByteStream::new(),
        },
    ]
}
