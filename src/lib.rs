//! Payload decoding library
//!
//! This library decodes diagnostic payloads that arrive as a gzip stream
//! wrapped in base64, and renders the result as UTF-8 text.
//!
//! # Pipeline
//!
//! Three stages, strictly linear, no retries:
//!
//! ```ignore
//! base64 text -> raw bytes -> inflated bytes -> UTF-8 text
//! ```
//!
//! # Payload Format
//!
//! - Wire form: standard-alphabet base64 with padding
//! - Body: gzip (magic bytes, deflate payload, CRC32/size footer)
//! - Content: UTF-8 text
//!
//! # Failure Reporting
//!
//! Every stage has a typed error ([`ValueEncodingError`],
//! [`compress::GzipError`], [`render::TextError`]); the pipeline unifies
//! them in [`DecodeError`] and the CLI prints any of them as one
//! human-readable line.

// Core modules
pub mod api;
pub mod compress;
pub mod encoding;
pub mod render;

// Re-export commonly used types
pub use api::{decode_payload, encode_payload, DecodeError, DecodedPayload};
pub use encoding::{bytes_to_base64, bytes_to_hex, parse_base64, ValueEncodingError};
