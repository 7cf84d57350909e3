//! Rendering of decoded payloads
//!
//! Converts inflated bytes into UTF-8 text and formats the truncated hex
//! preview shown before the text.

use thiserror::Error;

use crate::encoding::bytes_to_hex;

/// Number of bytes shown by [`preview`] before truncation.
pub const PREVIEW_BYTES: usize = 20;

#[derive(Error, Debug)]
pub enum TextError {
    #[error("Invalid UTF-8 payload: {0}")]
    InvalidUtf8(String),
}

/// Convert payload bytes into UTF-8 text.
///
/// Takes ownership of the buffer; on success the bytes become the
/// returned `String` without copying.
pub fn to_text(bytes: Vec<u8>) -> Result<String, TextError> {
    String::from_utf8(bytes).map_err(|e| TextError::InvalidUtf8(e.to_string()))
}

/// Render a truncated hex preview of a byte buffer.
///
/// Short buffers are shown in full; longer ones show the first
/// [`PREVIEW_BYTES`] bytes followed by `...` and the total length.
pub fn preview(bytes: &[u8]) -> String {
    if bytes.len() <= PREVIEW_BYTES {
        format!("{} ({} bytes)", bytes_to_hex(bytes), bytes.len())
    } else {
        format!(
            "{}... ({} bytes)",
            bytes_to_hex(&bytes[..PREVIEW_BYTES]),
            bytes.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text_valid_utf8() {
        assert_eq!(to_text(b"hi\n".to_vec()).unwrap(), "hi\n");
    }

    #[test]
    fn test_to_text_rejects_invalid_utf8() {
        assert!(to_text(vec![0xFF]).is_err());
    }

    #[test]
    fn test_preview_short_buffer() {
        assert_eq!(preview(&[0x1f, 0x8b]), "0x1f8b (2 bytes)");
    }

    #[test]
    fn test_preview_truncates_long_buffer() {
        let bytes = vec![0xAB; 32];
        assert_eq!(
            preview(&bytes),
            format!("0x{}... (32 bytes)", "ab".repeat(PREVIEW_BYTES))
        );
    }

    #[test]
    fn test_preview_exact_boundary_not_truncated() {
        let bytes = vec![0x00; PREVIEW_BYTES];
        assert!(!preview(&bytes).contains("..."));
    }
}
