//! Canonical cell encoding for frozen values.
//!
//! Freeze output is raw bytes whose length is tracked by the caller. When a
//! frozen value has to cross a storage boundary on its own, it is wrapped as
//! a single deterministic CBOR item:
//! - unset encodes as `null` (0xf6)
//! - a present value encodes as a byte string with the shortest length header
//!
//! Decoding accepts only the canonical form.

use ciborium::value::Value;

use crate::error::{Result, StreamError};
use crate::stream::Frozen;

/// CBOR major type for byte strings.
const MAJOR_BYTES: u8 = 2;

/// CBOR simple value `null`.
const CBOR_NULL: u8 = 0xf6;

/// Encode a frozen value as a canonical CBOR cell.
pub fn encode_frozen(frozen: Option<&[u8]>) -> Vec<u8> {
    match frozen {
        None => vec![CBOR_NULL],
        Some(bytes) => {
            let mut buf = Vec::with_capacity(bytes.len() + 9);
            encode_uint(&mut buf, MAJOR_BYTES, bytes.len() as u64);
            buf.extend_from_slice(bytes);
            buf
        }
    }
}

/// Decode a canonical CBOR cell back to a frozen value.
pub fn decode_frozen(cell: &[u8]) -> Result<Frozen> {
    if cell.is_empty() {
        return Err(StreamError::Decoding("empty cell".into()));
    }

    let cursor = std::io::Cursor::new(cell);
    let value: Value =
        ciborium::from_reader(cursor).map_err(|e| StreamError::Decoding(e.to_string()))?;

    let frozen: Frozen = match value {
        Value::Null => None,
        Value::Bytes(b) => Some(b.into()),
        _ => return Err(StreamError::Decoding("expected null or byte string".into())),
    };

    // Rejects trailing bytes, long length headers, and indefinite lengths.
    if encode_frozen(frozen.as_deref()) != cell {
        return Err(StreamError::Decoding("non-canonical cell".into()));
    }

    Ok(frozen)
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffffffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}
