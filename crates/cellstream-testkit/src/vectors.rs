//! Golden test vectors for canonical cells.
//!
//! These vectors pin the canonical cell encoding so that every
//! implementation wraps frozen values identically.

use serde::Serialize;

use cellstream_core::{decode_frozen, encode_frozen, ByteStream, Fingerprint, Stream};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Frozen value; `None` is unset.
    pub value: Option<Vec<u8>>,
    /// Expected canonical cell (hex).
    pub expected_cell: String,
}

impl GoldenVector {
    /// The stream this vector describes.
    pub fn stream(&self) -> ByteStream {
        ByteStream::from_frozen(self.value.clone().map(Into::into))
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "unset",
            value: None,
            expected_cell: "f6".into(),
        },
        GoldenVector {
            name: "empty",
            value: Some(Vec::new()),
            expected_cell: "40".into(),
        },
        GoldenVector {
            name: "alpha",
            value: Some(b"alpha".to_vec()),
            expected_cell: "45616c706861".into(),
        },
        GoldenVector {
            name: "beta",
            value: Some(b"beta".to_vec()),
            expected_cell: "4462657461".into(),
        },
        GoldenVector {
            name: "utf-8 text",
            value: Some("é".as_bytes().to_vec()),
            expected_cell: "42c3a9".into(),
        },
        GoldenVector {
            name: "23 bytes, inline length",
            value: Some(vec![0x11; 23]),
            expected_cell: format!("57{}", "11".repeat(23)),
        },
        GoldenVector {
            name: "24 bytes, one-byte length",
            value: Some(vec![0x00; 24]),
            expected_cell: format!("5818{}", "00".repeat(24)),
        },
        GoldenVector {
            name: "256 bytes, two-byte length",
            value: Some(vec![0xff; 256]),
            expected_cell: format!("590100{}", "ff".repeat(256)),
        },
    ]
}

/// Verify all golden vectors encode and decode as expected.
///
/// Returns `(name, passed, detail)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let stream = v.stream();
            let frozen = stream.freeze(&Default::default());
            let cell = hex::encode(encode_frozen(frozen.as_deref()));

            if cell != v.expected_cell {
                return (
                    v.name.to_string(),
                    false,
                    format!("expected {}, got {}", v.expected_cell, cell),
                );
            }

            let decoded = hex::decode(&v.expected_cell)
                .map_err(|e| e.to_string())
                .and_then(|bytes| decode_frozen(&bytes).map_err(|e| e.to_string()));
            match decoded {
                Ok(back) if back.as_deref() == v.value.as_deref() => {
                    (v.name.to_string(), true, cell)
                }
                Ok(back) => (
                    v.name.to_string(),
                    false,
                    format!("decoded to {:?}", back),
                ),
                Err(e) => (v.name.to_string(), false, e),
            }
        })
        .collect()
}

/// Exportable record of a vector with its derived outputs.
#[derive(Debug, Serialize)]
pub struct GoldenRecord {
    pub name: String,
    pub value: Option<String>, // hex, null when unset
    pub cell: String,          // hex
    pub fingerprint: String,   // hex
}

/// Derive the exportable records for every vector.
pub fn golden_records() -> Vec<GoldenRecord> {
    all_vectors()
        .iter()
        .map(|v| {
            let stream = v.stream();
            GoldenRecord {
                name: v.name.to_string(),
                value: v.value.as_ref().map(hex::encode),
                cell: v.expected_cell.clone(),
                fingerprint: Fingerprint::of(&stream).to_hex(),
            }
        })
        .collect()
}

/// Render every vector as pretty JSON for other implementations.
pub fn export_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&golden_records())
}
