//! Text codec: standard base64 (with padding) over the envelope blob.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::EnvelopeError;

pub(crate) fn encode(blob: &[u8]) -> String {
    STANDARD.encode(blob)
}

/// Decode base64 text back into a raw blob. Bad base64 is reported as
/// `InvalidTextEncoding` before any buffer decode is attempted.
pub(crate) fn decode(text: &str) -> Result<Vec<u8>, EnvelopeError> {
    STANDARD
        .decode(text)
        .map_err(|_| EnvelopeError::InvalidTextEncoding)
}
