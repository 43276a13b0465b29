//! Key generation and validation.

use getrandom::getrandom;
use zeroize::Zeroizing;

use crate::error::EnvelopeError;

/// AES-256 key size.
pub const KEY_BYTES: usize = 32;

/// Generate a fresh random 256-bit key from the OS entropy source.
///
/// The returned buffer zeroes itself on drop; the crate never persists or
/// logs key material. Entropy failure surfaces as
/// [`EnvelopeError::RandomnessUnavailable`] and is not retried.
pub fn generate_key() -> Result<Zeroizing<[u8; KEY_BYTES]>, EnvelopeError> {
    let mut key = [0u8; KEY_BYTES];
    getrandom(&mut key).map_err(|_| EnvelopeError::RandomnessUnavailable)?;
    Ok(Zeroizing::new(key))
}

/// Fix the key length before any cryptographic work runs.
pub(crate) fn checked_key(key: &[u8]) -> Result<&[u8; KEY_BYTES], EnvelopeError> {
    key.try_into().map_err(|_| EnvelopeError::InvalidKeyLength)
}
