//! Payload text encoding and decoding utilities
//!
//! This module provides the two text encodings the decoder touches:
//! - Base64: `"H4sIAAAA..."` (the wire form of a payload)
//! - Hex: `"0x1f8b08"` (render-only, used for byte previews)
//!
//! Payloads always arrive as standard-alphabet base64 with padding; there
//! is no auto-detection because nothing else is accepted on the wire.

use base64::{Engine as _, engine::general_purpose};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValueEncodingError {
    #[error("Invalid base64: {0}")]
    InvalidBase64(String),
}

/// Decode a standard-alphabet base64 string into raw bytes.
///
/// Fails on characters outside the base64 alphabet and on inputs whose
/// length cannot be produced by a well-formed encoder.
///
/// # Examples
///
/// ```ignore
/// let bytes = parse_base64("SGVsbG8=")?;
/// assert_eq!(bytes, b"Hello");
/// ```
pub fn parse_base64(value: &str) -> Result<Vec<u8>, ValueEncodingError> {
    general_purpose::STANDARD
        .decode(value)
        .map_err(|_| ValueEncodingError::InvalidBase64(value.to_string()))
}

/// Convert bytes to base64 string
pub fn bytes_to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Convert bytes to hex string (with 0x prefix)
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
