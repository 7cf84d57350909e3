//! Gzip inflate/deflate over in-memory buffers
//!
//! Payloads are tiny and fixed at build time, so both directions work on
//! whole buffers; there is no streaming path. The gzip header, deflate
//! body and CRC32/size footer are all validated by the decoder.

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GzipError {
    #[error("Invalid gzip stream: {0}")]
    InvalidStream(String),

    #[error("Gzip compression failed: {0}")]
    CompressFailed(String),
}

/// Inflate a gzip-compressed buffer into its original bytes.
///
/// Fails when the magic bytes or header are malformed, the deflate body
/// is truncated or corrupt, or the trailing checksum does not match.
pub fn inflate(compressed: &[u8]) -> Result<Vec<u8>, GzipError> {
    let mut decoder = GzDecoder::new(compressed);
    let mut inflated = Vec::new();
    decoder
        .read_to_end(&mut inflated)
        .map_err(|e| GzipError::InvalidStream(e.to_string()))?;
    Ok(inflated)
}

/// Compress a buffer into a gzip stream.
pub fn deflate(data: &[u8]) -> Result<Vec<u8>, GzipError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| GzipError::CompressFailed(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| GzipError::CompressFailed(e.to_string()))
}
