//! AEAD: AES-256-GCM with a detached tag
//!
//! The wire format carries the tag in a fixed slot ahead of the ciphertext,
//! so the detached-tag entry points are used: ciphertext keeps the plaintext
//! length and the 16-byte tag travels separately. No associated data.

extern crate alloc;
use alloc::vec::Vec;

use aes_gcm::{
    aead::{AeadInPlace, KeyInit},
    Aes256Gcm, Nonce, Tag,
};

use crate::error::EnvelopeError;
use crate::key::KEY_BYTES;
use crate::wire::{NONCE_BYTES, TAG_BYTES};

/// Nonce input width accepted by the primitive (96 bits).
const GCM_NONCE_BYTES: usize = 12;

/// Widen the 6-byte envelope nonce to the primitive's 96-bit input by
/// zero-padding on the right. Applied identically on both paths; frozen for
/// wire compatibility.
fn gcm_nonce(nonce: &[u8; NONCE_BYTES]) -> [u8; GCM_NONCE_BYTES] {
    let mut n = [0u8; GCM_NONCE_BYTES];
    n[..NONCE_BYTES].copy_from_slice(nonce);
    n
}

/// AEAD seal (encrypt path). Deterministic for a fixed (key, nonce,
/// plaintext) triple.
pub(crate) fn seal(
    key: &[u8; KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_BYTES]), EnvelopeError> {
    let cipher =
        Aes256Gcm::new_from_slice(key).map_err(|_| EnvelopeError::InvalidKeyLength)?;
    let widened = gcm_nonce(nonce);
    let n = Nonce::from_slice(&widened);

    let mut buf = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(n, b"", &mut buf)
        .map_err(|_| EnvelopeError::AuthenticationFailed)?;

    Ok((buf, tag.into()))
}

/// AEAD open (decrypt path). Verify-then-decrypt: any verification failure
/// is all-or-nothing and no partial plaintext escapes.
pub(crate) fn open(
    key: &[u8; KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    ciphertext: &[u8],
    tag: &[u8; TAG_BYTES],
) -> Result<Vec<u8>, EnvelopeError> {
    let cipher =
        Aes256Gcm::new_from_slice(key).map_err(|_| EnvelopeError::InvalidKeyLength)?;
    let widened = gcm_nonce(nonce);
    let n = Nonce::from_slice(&widened);

    let mut buf = ciphertext.to_vec();
    cipher
        .decrypt_in_place_detached(n, b"", &mut buf, Tag::from_slice(tag))
        .map_err(|_| EnvelopeError::AuthenticationFailed)?;

    Ok(buf)
}
