//! Compression module
//!
//! Gzip stream inflation and deflation for payload bodies.

mod gzip;

pub use gzip::*;
