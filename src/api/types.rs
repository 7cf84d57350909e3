//! Result and error types for the decode pipeline.

use thiserror::Error;

use crate::compress::GzipError;
use crate::encoding::ValueEncodingError;
use crate::render::TextError;

/// Terminal value of the decode pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPayload {
    /// Truncated hex preview of the raw bytes produced by base64 decoding
    pub preview: String,

    /// The inflated payload rendered as UTF-8 text
    pub text: String,
}

/// Union of the pipeline stage failures.
///
/// Each stage keeps its own typed error so callers (and tests) can tell
/// which stage rejected a payload; the CLI reports all of them through
/// the same single-line message.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Base64 decoding failed: {0}")]
    Base64(#[from] ValueEncodingError),

    #[error("Gzip decompression failed: {0}")]
    Gzip(#[from] GzipError),

    #[error("Text rendering failed: {0}")]
    Text(#[from] TextError),
}
