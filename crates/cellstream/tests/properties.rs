//! Property tests for the stream contract.
//!
//! Every byte stream must satisfy:
//! - thaw(freeze(s)) restores s
//! - compare is a total order consistent with equality and hashing
//! - diff(a, a) is empty, and a present diff thaws back to the new value
//! - three-way merge applies, recognizes an already-applied edit, or
//!   conflicts, and only the first changes the local value

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use ciborium::value::Value;
use proptest::prelude::*;

use cellstream::{host, ByteStream, EqOptions, FreezeOptions, MergeOutcome, Stream};
use cellstream_testkit::generators::{
    byte_stream, colliding_byte_stream, frozen_value, host_value, stream_from, MergeScenario,
};

fn hash_of(s: &ByteStream) -> u64 {
    let mut hasher = DefaultHasher::new();
    s.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn freeze_thaw_roundtrip(value in frozen_value(512)) {
        let original = stream_from(value);
        let frozen = original.freeze(&FreezeOptions::default());

        let restored = match frozen.as_deref() {
            Some(bytes) => {
                let mut s = ByteStream::unset();
                s.thaw(bytes);
                s
            }
            None => ByteStream::from_frozen(None),
        };
        prop_assert_eq!(restored, original);
    }

    #[test]
    fn freeze_is_pure(s in byte_stream()) {
        let before = s.clone();
        let _ = s.freeze(&FreezeOptions::new().skip("ignored"));
        prop_assert_eq!(s, before);
    }

    #[test]
    fn compare_antisymmetric(a in colliding_byte_stream(), b in colliding_byte_stream()) {
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
    }

    #[test]
    fn compare_transitive(
        a in colliding_byte_stream(),
        b in colliding_byte_stream(),
        c in colliding_byte_stream(),
    ) {
        if a.compare(&b) != Ordering::Greater && b.compare(&c) != Ordering::Greater {
            prop_assert_ne!(a.compare(&c), Ordering::Greater);
        }
    }

    #[test]
    fn equals_implies_same_hash(a in colliding_byte_stream(), b in colliding_byte_stream()) {
        let eq = a.equals(&b, &EqOptions::default());
        prop_assert_eq!(eq, a.compare(&b) == Ordering::Equal);
        if eq {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
            prop_assert_eq!(cellstream::Fingerprint::of(&a), cellstream::Fingerprint::of(&b));
        }
    }

    #[test]
    fn diff_identity(a in byte_stream()) {
        prop_assert_eq!(a.diff(&a), None);
    }

    #[test]
    fn diff_thaws_to_new_value(a in colliding_byte_stream(), b in colliding_byte_stream()) {
        if let Some(d) = a.diff(&b) {
            let mut copy = b.clone();
            copy.thaw(&d);
            prop_assert_eq!(copy, a);
        }
    }

    #[test]
    fn merge_outcomes(scenario: MergeScenario) {
        let mut local = scenario.local.clone();
        let outcome = local.three_way_merge(scenario.incoming(), &scenario.peer);

        if scenario.local.compare(&scenario.peer) == Ordering::Equal {
            prop_assert_eq!(outcome, MergeOutcome::Applied);
            prop_assert_eq!(local.as_bytes(), scenario.incoming());
        } else if scenario.local.as_bytes() == scenario.incoming() {
            prop_assert_eq!(outcome, MergeOutcome::AlreadyApplied);
            prop_assert_eq!(local, scenario.local);
        } else {
            prop_assert_eq!(outcome, MergeOutcome::Conflict);
            prop_assert_eq!(local, scenario.local);
        }
    }

    #[test]
    fn merge_of_own_diff_converges(old in colliding_byte_stream(), new in colliding_byte_stream()) {
        // A peer that still holds `old` accepts the diff from `old` to `new`.
        prop_assume!(old.is_set() && new.is_set());
        let diff = new.diff(&old);
        let mut local = old.clone();
        let outcome = local.three_way_merge(diff.as_deref().or(old.as_bytes()), &old);
        prop_assert_eq!(outcome, MergeOutcome::Applied);
        prop_assert_eq!(local, new);
    }

    #[test]
    fn host_set_validates_before_mutating(value in host_value()) {
        let mut s = ByteStream::from("keep");
        let accepted = matches!(value, Value::Null | Value::Bytes(_) | Value::Text(_));
        let result = host::set_from_host(&mut s, &value);
        prop_assert_eq!(result.is_ok(), accepted);
        if !accepted {
            prop_assert_eq!(s, ByteStream::from("keep"));
        }
    }
}
