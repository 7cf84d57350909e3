//! CLI front-end for the payload decoder
//!
//! Decodes the embedded diagnostic payload and prints a byte preview
//! followed by the decoded text:
//!
//! ```bash
//! gzb64-cli
//! ```
//!
//! There are no flags and no inputs; the payload is fixed at build time.
//! Set `RUST_LOG=debug` to see per-stage byte counts on stderr.

use gzb64_core::decode_payload;

/// The diagnostic payload: a gzip stream wrapped in standard base64.
const PAYLOAD: &str = "H4sIAAAAAAAAAysODE7yi6oINipMzcwpdiszdYtKCjF2yknKdvOy9DIztIzMrDJOM/DJCkxx9igIDuYCAKWa4zUxAAAA";

fn main() {
    env_logger::init();

    match decode_payload(PAYLOAD) {
        Ok(payload) => {
            println!("payload bytes: {}", payload.preview);
            // the decoded text carries its own trailing newline
            print!("payload text: {}", payload.text);
        }
        Err(e) => println!("decode failed: {}", e),
    }
}
