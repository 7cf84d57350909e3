//! Core pipeline functions for payload decoding
//!
//! This module contains the platform-independent logic for:
//! - `decode_payload()` - base64 decode, gzip inflate, render as UTF-8
//! - `encode_payload()` - the reverse direction, gzip then base64
//!
//! The CLI binary and the crate tests both use these as their entry
//! points.

use log::debug;

use crate::api::{DecodeError, DecodedPayload};
use crate::compress;
use crate::encoding;
use crate::render;

/// Run the decode pipeline over a base64-encoded gzip payload.
///
/// The pipeline is strictly linear: base64 decode, gzip inflate, UTF-8
/// render. Each intermediate buffer lives only until the next stage has
/// consumed it.
///
/// # Arguments
/// * `encoded` - Payload text in standard-alphabet base64
///
/// # Returns
/// * `Ok(DecodedPayload)` - Byte preview and decoded text
/// * `Err(DecodeError)` - Which stage rejected the payload, and why
pub fn decode_payload(encoded: &str) -> Result<DecodedPayload, DecodeError> {
    let compressed = encoding::parse_base64(encoded)?;
    debug!("base64 decoded {} bytes", compressed.len());

    let preview = render::preview(&compressed);

    let inflated = compress::inflate(&compressed)?;
    debug!("gzip inflated to {} bytes", inflated.len());

    let text = render::to_text(inflated)?;
    Ok(DecodedPayload { preview, text })
}

/// Run the reverse pipeline: gzip-compress text and wrap it in base64.
pub fn encode_payload(text: &str) -> Result<String, DecodeError> {
    let compressed = compress::deflate(text.as_bytes())?;
    debug!(
        "gzip deflated {} bytes to {}",
        text.len(),
        compressed.len()
    );

    Ok(encoding::bytes_to_base64(&compressed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let result = decode_payload("!!!!");
        assert!(matches!(result, Err(DecodeError::Base64(_))));
    }

    #[test]
    fn test_decode_rejects_non_gzip_bytes() {
        // "aGVsbG8=" is valid base64 for "hello" but not a gzip stream
        let result = decode_payload("aGVsbG8=");
        assert!(matches!(result, Err(DecodeError::Gzip(_))));
    }

    #[test]
    fn test_decode_rejects_non_utf8_payload() {
        let compressed = compress::deflate(&[0xFF]).unwrap();
        let encoded = encoding::bytes_to_base64(&compressed);
        let result = decode_payload(&encoded);
        assert!(matches!(result, Err(DecodeError::Text(_))));
    }

    #[test]
    fn test_roundtrip_text() {
        let text = "short diagnostic phrase\n";
        let encoded = encode_payload(text).unwrap();
        let decoded = decode_payload(&encoded).unwrap();
        assert_eq!(decoded.text, text);
    }

    #[test]
    fn test_preview_shows_gzip_magic() {
        let encoded = encode_payload("anything").unwrap();
        let payload = decode_payload(&encoded).unwrap();
        assert!(payload.preview.starts_with("0x1f8b"));
    }
}
