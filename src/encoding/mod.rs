//! Encoding module
//!
//! Payload text codecs: base64 for the wire form, hex for byte previews.

mod value;

pub use value::*;
