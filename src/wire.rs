//! Envelope blob layout
//!
//! Format:
//!   nonce[6] || tag[16] || ciphertext[0+]
//!
//! No version byte and no length prefix — the ciphertext length is implicit
//! from the total blob length. This layout is frozen: existing stored blobs
//! depend on the 6/16 widths and the field order.

extern crate alloc;
use alloc::vec::Vec;

use crate::error::EnvelopeError;

/// Envelope nonce width: six printable characters' raw bytes.
pub const NONCE_BYTES: usize = 6;

/// GCM authentication tag width.
pub const TAG_BYTES: usize = 16;

/// Fixed header: nonce + tag.
pub const HEADER_BYTES: usize = NONCE_BYTES + TAG_BYTES; // 22

/// Minimum decodable blob: header plus empty ciphertext.
pub const MIN_BLOB_BYTES: usize = HEADER_BYTES;

/// Borrowed view of a parsed envelope blob.
#[derive(Debug, Clone, Copy)]
pub struct BlobComponents<'a> {
    pub nonce: &'a [u8; NONCE_BYTES],
    pub tag: &'a [u8; TAG_BYTES],
    pub ciphertext: &'a [u8],
}

/// Split a blob into its components. Pure slicing — no cryptographic work
/// happens here, so a short blob fails before any decode is attempted.
pub fn decode_blob(data: &[u8]) -> Result<BlobComponents<'_>, EnvelopeError> {
    if data.len() < MIN_BLOB_BYTES {
        return Err(EnvelopeError::MalformedBlob);
    }

    let nonce: &[u8; NONCE_BYTES] = data[..NONCE_BYTES]
        .try_into()
        .map_err(|_| EnvelopeError::MalformedBlob)?;

    let tag: &[u8; TAG_BYTES] = data[NONCE_BYTES..HEADER_BYTES]
        .try_into()
        .map_err(|_| EnvelopeError::MalformedBlob)?;

    let ciphertext = &data[HEADER_BYTES..];

    Ok(BlobComponents {
        nonce,
        tag,
        ciphertext,
    })
}

/// Concatenate the components in wire order.
pub fn encode_blob(
    nonce: &[u8; NONCE_BYTES],
    tag: &[u8; TAG_BYTES],
    ciphertext: &[u8],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_BYTES + ciphertext.len());

    out.extend_from_slice(nonce);
    out.extend_from_slice(tag);
    out.extend_from_slice(ciphertext);

    out
}
