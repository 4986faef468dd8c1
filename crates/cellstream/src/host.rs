//! Host-value binding for byte streams.
//!
//! Calling code hands the surface generic values ([`ciborium::value::Value`])
//! rather than typed Rust input. Each entry point checks the value's shape
//! before touching the stream, so a rejected call never mutates anything.
//!
//! Accepted shapes:
//!
//! | Operation | Accepts |
//! |---|---|
//! | [`init_from_host`] | absent, null, bytes |
//! | [`set_from_host`] | null, bytes, text |
//! | [`thaw_from_host`] | bytes |
//! | [`merge_from_host`] | null, bytes |

use ciborium::value::Value;
use tracing::debug;

use cellstream_core::{ByteStream, MergeOutcome, SetInput, Stream};

use crate::error::{Result, SurfaceError};

/// Short name of a host value's shape, for error messages.
pub fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bytes(_) => "bytes",
        Value::Text(_) => "text",
        Value::Integer(_) => "integer",
        Value::Float(_) => "float",
        Value::Bool(_) => "bool",
        Value::Array(_) => "array",
        Value::Map(_) => "map",
        Value::Tag(..) => "tag",
        _ => "unknown",
    }
}

fn reject(operation: &'static str, value: &Value) -> SurfaceError {
    let found = shape_name(value);
    debug!(operation, found, "rejected host value");
    SurfaceError::InvalidInput { operation, found }
}

/// Construct a byte stream from an optional frozen host value.
///
/// With no value the stream starts as the empty sequence; `null` restores an
/// unset stream.
pub fn init_from_host(frozen: Option<&Value>) -> Result<ByteStream> {
    match frozen {
        None => Ok(ByteStream::new()),
        Some(Value::Null) => Ok(ByteStream::unset()),
        Some(Value::Bytes(b)) => Ok(ByteStream::from(b.as_slice())),
        Some(other) => Err(reject("init", other)),
    }
}

/// Set a byte stream from a host value. Text is stored as UTF-8.
pub fn set_from_host(stream: &mut ByteStream, value: &Value) -> Result<()> {
    let input = match value {
        Value::Null => SetInput::Unset,
        Value::Bytes(b) => SetInput::from(b.as_slice()),
        Value::Text(s) => SetInput::from(s.as_str()),
        other => return Err(reject("set", other)),
    };
    stream.set(input);
    Ok(())
}

/// Thaw a byte stream from canonical bytes held in a host value.
pub fn thaw_from_host(stream: &mut ByteStream, value: &Value) -> Result<()> {
    match value {
        Value::Bytes(b) => {
            stream.thaw(b);
            Ok(())
        }
        other => Err(reject("thaw", other)),
    }
}

/// Current value as a host value: `null` when unset.
pub fn to_host(stream: &ByteStream) -> Value {
    match stream.as_bytes() {
        Some(b) => Value::Bytes(b.to_vec()),
        None => Value::Null,
    }
}

/// Three-way merge of an incoming diff carried as a host value.
pub fn merge_from_host(
    stream: &mut ByteStream,
    incoming: &Value,
    peer: &ByteStream,
) -> Result<MergeOutcome> {
    let incoming = match incoming {
        Value::Null => None,
        Value::Bytes(b) => Some(b.as_slice()),
        other => return Err(reject("merge", other)),
    };
    Ok(stream.three_way_merge(incoming, peer))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(b: &[u8]) -> Value {
        Value::Bytes(b.to_vec())
    }

    #[test]
    fn test_init_shapes() {
        assert_eq!(init_from_host(None).unwrap(), ByteStream::new());
        assert_eq!(init_from_host(Some(&Value::Null)).unwrap(), ByteStream::unset());
        assert_eq!(
            init_from_host(Some(&bytes(b"alpha"))).unwrap(),
            ByteStream::from("alpha")
        );

        let err = init_from_host(Some(&Value::Text("alpha".into()))).unwrap_err();
        assert!(err.is_type_mismatch());
        assert_eq!(
            err,
            SurfaceError::InvalidInput {
                operation: "init",
                found: "text"
            }
        );
    }

    #[test]
    fn test_set_transcodes_text() {
        let mut s = ByteStream::new();
        set_from_host(&mut s, &Value::Text("naïve".into())).unwrap();
        assert_eq!(s.as_bytes(), Some("naïve".as_bytes()));

        set_from_host(&mut s, &Value::Null).unwrap();
        assert!(!s.is_set());

        set_from_host(&mut s, &bytes(b"\x00\x01")).unwrap();
        assert_eq!(s.as_bytes(), Some(&b"\x00\x01"[..]));
    }

    #[test]
    fn test_set_rejects_other_shapes_without_mutation() {
        let mut s = ByteStream::from("keep");
        for value in [
            Value::Integer(7.into()),
            Value::Float(1.5),
            Value::Bool(true),
            Value::Array(vec![]),
            Value::Map(vec![]),
        ] {
            let err = set_from_host(&mut s, &value).unwrap_err();
            assert!(err.is_type_mismatch());
            assert_eq!(s, ByteStream::from("keep"));
        }
    }

    #[test]
    fn test_thaw_accepts_only_bytes() {
        let mut s = ByteStream::unset();
        assert!(thaw_from_host(&mut s, &Value::Text("x".into())).is_err());
        assert!(thaw_from_host(&mut s, &Value::Null).is_err());
        assert!(!s.is_set());

        thaw_from_host(&mut s, &bytes(b"frozen")).unwrap();
        assert_eq!(s.as_bytes(), Some(&b"frozen"[..]));
    }

    #[test]
    fn test_to_host() {
        assert_eq!(to_host(&ByteStream::unset()), Value::Null);
        assert_eq!(to_host(&ByteStream::new()), bytes(b""));
    }

    #[test]
    fn test_merge_from_host() {
        let peer = ByteStream::from("orig");

        let mut local = ByteStream::from("orig");
        let outcome = merge_from_host(&mut local, &Value::Null, &peer).unwrap();
        assert_eq!(outcome, MergeOutcome::Applied);
        assert!(!local.is_set());

        let mut local = ByteStream::from("local-edit");
        let outcome = merge_from_host(&mut local, &bytes(b"other-edit"), &peer).unwrap();
        assert_eq!(outcome, MergeOutcome::Conflict);

        let err = merge_from_host(&mut local, &Value::Text("x".into()), &peer).unwrap_err();
        assert!(err.is_type_mismatch());
        assert_eq!(local, ByteStream::from("local-edit"));
    }
}
