//! Unified error type for the envelope cipher.
//!
//! Failures are data: every operation surfaces exactly one of these variants
//! to its immediate caller, synchronously, and nothing is retried internally.
//! No partial result ever accompanies an error.

use core::fmt;

/// Everything that can go wrong across the four envelope layers.
///
/// Callers should match on the variant rather than parse the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The key is not exactly 32 bytes. Checked before any cryptographic
    /// operation runs.
    InvalidKeyLength,
    /// A supplied fixed nonce is not exactly 6 bytes. Violated length is a
    /// construction error, never a silent truncation or pad.
    InvalidNonceLength,
    /// The AEAD primitive rejected the (ciphertext, nonce, tag, key)
    /// combination. Tampered ciphertext, tampered tag, wrong key, and wrong
    /// nonce are deliberately indistinguishable here (oracle discipline).
    AuthenticationFailed,
    /// The blob is too short to contain a nonce and tag.
    MalformedBlob,
    /// The input is not valid standard base64.
    InvalidTextEncoding,
    /// The OS entropy source failed. Fatal to the calling operation.
    RandomnessUnavailable,
}

impl fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyLength => write!(f, "invalid key length"),
            Self::InvalidNonceLength => write!(f, "invalid nonce length"),
            Self::AuthenticationFailed => write!(f, "authentication failed"),
            Self::MalformedBlob => write!(f, "malformed envelope blob"),
            Self::InvalidTextEncoding => write!(f, "invalid text encoding"),
            Self::RandomnessUnavailable => write!(f, "randomness unavailable"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EnvelopeError {}
