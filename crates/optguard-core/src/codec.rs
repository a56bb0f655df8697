//! Canonical value encoding used for size checks.
//!
//! Strings are stored as-is, so they measure as their raw UTF-8 bytes. Every
//! other value measures as its compact JSON encoding.

use serde::Serialize;
use serde_json::Value;

use crate::error::{OptGuardError, Result};

/// Encode a JSON value into its canonical stored bytes.
pub fn encode_value(value: &Value) -> Result<Vec<u8>> {
    match value {
        Value::String(s) => Ok(s.as_bytes().to_vec()),
        other => serde_json::to_vec(other).map_err(|e| OptGuardError::Serialize(e.to_string())),
    }
}

/// Byte length of the canonical encoding of a JSON value.
pub fn value_size(value: &Value) -> Result<usize> {
    match value {
        Value::String(s) => Ok(s.len()),
        other => Ok(encode_value(other)?.len()),
    }
}

/// Byte length of the canonical encoding of any serializable value.
pub fn serialized_size<T: Serialize + ?Sized>(value: &T) -> Result<usize> {
    let v = serde_json::to_value(value).map_err(|e| OptGuardError::Serialize(e.to_string()))?;
    let size = value_size(&v)?;
    tracing::trace!(size, "measured value");
    Ok(size)
}
