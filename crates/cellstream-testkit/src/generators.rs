//! Proptest generators for property-based testing.

use bytes::Bytes;
use ciborium::value::Value;
use proptest::prelude::*;

use cellstream_core::ByteStream;

/// Generate a frozen value (unset or bytes) up to `max_len` bytes.
pub fn frozen_value(max_len: usize) -> impl Strategy<Value = Option<Vec<u8>>> {
    prop::option::of(prop::collection::vec(any::<u8>(), 0..=max_len))
}

/// Generate frozen values from a tiny alphabet, so equal values and shared
/// prefixes come up often.
pub fn colliding_frozen_value() -> impl Strategy<Value = Option<Vec<u8>>> {
    prop::option::of(prop::collection::vec(0u8..=2, 0..=3))
}

/// Build a byte stream from a generated frozen value.
pub fn stream_from(frozen: Option<Vec<u8>>) -> ByteStream {
    ByteStream::from_frozen(frozen.map(Bytes::from))
}

/// Generate a byte stream.
pub fn byte_stream() -> impl Strategy<Value = ByteStream> {
    frozen_value(256).prop_map(stream_from)
}

/// Generate a byte stream that often equals another generated one.
pub fn colliding_byte_stream() -> impl Strategy<Value = ByteStream> {
    colliding_frozen_value().prop_map(stream_from)
}

/// Generate a host value of any common shape.
pub fn host_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        prop::collection::vec(any::<u8>(), 0..32).prop_map(Value::Bytes),
        ".{0,16}".prop_map(Value::Text),
        any::<i64>().prop_map(|i| Value::Integer(i.into())),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e6f64..1.0e6).prop_map(Value::Float),
    ]
}

/// Inputs to a three-way merge.
#[derive(Debug, Clone)]
pub struct MergeScenario {
    pub local: ByteStream,
    pub peer: ByteStream,
    pub incoming: Option<Vec<u8>>,
}

impl MergeScenario {
    /// The incoming diff as a borrowed slice.
    pub fn incoming(&self) -> Option<&[u8]> {
        self.incoming.as_deref()
    }
}

impl Arbitrary for MergeScenario {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            colliding_frozen_value(), // local
            colliding_frozen_value(), // peer
            colliding_frozen_value(), // incoming
            any::<bool>(),            // local still matches peer
        )
            .prop_map(|(local, peer, incoming, aligned)| {
                let peer = if aligned { local.clone() } else { peer };
                MergeScenario {
                    local: stream_from(local),
                    peer: stream_from(peer),
                    incoming,
                }
            })
            .boxed()
    }
}
