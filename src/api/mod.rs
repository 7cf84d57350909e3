//! API module
//!
//! Pipeline entry points and their result/error types.

mod types;
pub mod core;

// Re-export types from types module
pub use types::{DecodeError, DecodedPayload};

// Re-export pipeline entry points
pub use core::{decode_payload, encode_payload};
