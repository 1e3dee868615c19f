//! Base64 transport for image files.
//!
//! Payloads are bare standard base64: no data-URI prefix and no MIME type.

use std::fs;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use camino::Utf8Path;
use tracing::info;

use crate::error::Result;
use crate::fsops::read_bytes;

/// Decode `encoded` and write the bytes to `output`, replacing any existing
/// file. Line breaks and other ASCII whitespace in the input are skipped.
pub fn decode_image(encoded: impl AsRef<[u8]>, output: impl AsRef<Utf8Path>) -> Result<()> {
    let output = output.as_ref();
    let compact: Vec<u8> = encoded
        .as_ref()
        .iter()
        .copied()
        .filter(|byte| !byte.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD.decode(compact)?;
    fs::write(output, &bytes)?;
    info!("Decoded image written to: {} ({} bytes)", output, bytes.len());
    Ok(())
}

/// Read the file at `input` and return it as standard base64.
pub fn encode_image_to_base64(input: impl AsRef<Utf8Path>) -> Result<String> {
    let input = input.as_ref();
    let bytes = read_bytes(input)?;
    let encoded = STANDARD.encode(&bytes);
    info!("Encoded image from: {}", input);
    Ok(encoded)
}
