//! Printable 6-byte nonce generation and validation.

use getrandom::getrandom;

use crate::error::EnvelopeError;
use crate::wire::NONCE_BYTES;

/// Generate a fresh nonce in the printable hex alphabet.
///
/// Three random bytes are hex-encoded to exactly six characters and those
/// characters' raw bytes become the nonce, so it can travel through
/// text-oriented transports (logs, JSON fields) without a separate
/// binary-safe encoding.
///
/// The value space is only 16^6 = 2^24 — far below six raw random bytes —
/// so collision probability under high-volume random generation is
/// correspondingly higher. Callers that need real collision resistance
/// should supply their own monotonically increasing or otherwise unique
/// fixed nonce instead of relying on generation.
pub fn generate_nonce() -> Result<[u8; NONCE_BYTES], EnvelopeError> {
    let mut raw = [0u8; NONCE_BYTES / 2];
    getrandom(&mut raw).map_err(|_| EnvelopeError::RandomnessUnavailable)?;

    let encoded = hex::encode(raw);

    let mut nonce = [0u8; NONCE_BYTES];
    nonce.copy_from_slice(encoded.as_bytes());
    Ok(nonce)
}

/// Fix the length of a caller-supplied nonce. Violated length is a
/// construction error, never a silent truncation or pad.
pub(crate) fn checked_nonce(nonce: &[u8]) -> Result<&[u8; NONCE_BYTES], EnvelopeError> {
    nonce
        .try_into()
        .map_err(|_| EnvelopeError::InvalidNonceLength)
}
