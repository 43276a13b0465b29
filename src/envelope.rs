//! Stateless envelope cipher facade.
//!
//! Layering, bottom to top: AEAD primitive wrappers (`aead`) → raw
//! encrypt/decrypt → blob codec ([`crate::wire`]) → text codec (`text`).
//! Each layer depends only on the one below it.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use zeroize::Zeroizing;

use crate::error::EnvelopeError;
use crate::key::{self, KEY_BYTES};
use crate::wire::{self, NONCE_BYTES, TAG_BYTES};
use crate::{aead, nonce, text};

/// Output of a raw encryption: ciphertext plus the material needed to
/// decrypt it later. Ciphertext has the plaintext's length — GCM is a
/// stream-like mode and adds no padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encrypted {
    pub ciphertext: Vec<u8>,
    pub nonce: [u8; NONCE_BYTES],
    pub tag: [u8; TAG_BYTES],
}

/// Non-cryptographic view of an envelope blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobInfo {
    pub nonce: [u8; NONCE_BYTES],
    pub ciphertext_len: usize,
}

/// Stateless AES-256-GCM envelope cipher.
///
/// Every operation is a pure transform over its arguments: no shared
/// mutable state, no I/O beyond the entropy source. The value is trivially
/// instantiable per call site and safe to share across threads without
/// synchronization.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeCipher;

impl EnvelopeCipher {
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh random 256-bit key. See [`crate::generate_key`].
    pub fn generate_key(&self) -> Result<Zeroizing<[u8; KEY_BYTES]>, EnvelopeError> {
        key::generate_key()
    }

    /// Generate a fresh printable 6-byte nonce. See [`crate::generate_nonce`]
    /// for the collision caveat.
    pub fn generate_nonce(&self) -> Result<[u8; NONCE_BYTES], EnvelopeError> {
        nonce::generate_nonce()
    }

    /// Encrypt `plaintext` under a 32-byte `key`.
    ///
    /// A fresh nonce is generated unless `fixed_nonce` supplies one. Nonce
    /// uniqueness per key is a caller obligation and is not enforced here:
    /// reusing a (key, nonce) pair for different plaintexts forfeits GCM's
    /// confidentiality and authenticity guarantees.
    pub fn encrypt(
        &self,
        plaintext: &[u8],
        key: &[u8],
        fixed_nonce: Option<&[u8]>,
    ) -> Result<Encrypted, EnvelopeError> {
        let key = key::checked_key(key)?;
        let nonce = match fixed_nonce {
            Some(n) => *nonce::checked_nonce(n)?,
            None => nonce::generate_nonce()?,
        };

        let (ciphertext, tag) = aead::seal(key, &nonce, plaintext)?;
        Ok(Encrypted {
            ciphertext,
            nonce,
            tag,
        })
    }

    /// Decrypt `ciphertext` produced by [`Self::encrypt`].
    ///
    /// Any verification failure — tampered ciphertext, tampered tag, wrong
    /// key, wrong nonce — is reported uniformly as
    /// [`EnvelopeError::AuthenticationFailed`] with no plaintext returned.
    pub fn decrypt(
        &self,
        ciphertext: &[u8],
        key: &[u8],
        nonce: &[u8; NONCE_BYTES],
        tag: &[u8; TAG_BYTES],
    ) -> Result<Vec<u8>, EnvelopeError> {
        let key = key::checked_key(key)?;
        aead::open(key, nonce, ciphertext, tag)
    }

    /// Encrypt and pack into the `nonce || tag || ciphertext` blob.
    pub fn encode_to_buffer(
        &self,
        plaintext: &[u8],
        key: &[u8],
        fixed_nonce: Option<&[u8]>,
    ) -> Result<Vec<u8>, EnvelopeError> {
        let enc = self.encrypt(plaintext, key, fixed_nonce)?;
        Ok(wire::encode_blob(&enc.nonce, &enc.tag, &enc.ciphertext))
    }

    /// Split a blob back into its components and decrypt.
    pub fn decode_from_buffer(&self, blob: &[u8], key: &[u8]) -> Result<Vec<u8>, EnvelopeError> {
        let parts = wire::decode_blob(blob)?;
        self.decrypt(parts.ciphertext, key, parts.nonce, parts.tag)
    }

    /// Encrypt and encode as standard (padded) base64 text.
    pub fn encode_to_text(
        &self,
        plaintext: &[u8],
        key: &[u8],
        fixed_nonce: Option<&[u8]>,
    ) -> Result<String, EnvelopeError> {
        let blob = self.encode_to_buffer(plaintext, key, fixed_nonce)?;
        Ok(text::encode(&blob))
    }

    /// Decode base64 text and decrypt the contained blob.
    pub fn decode_from_text(&self, encoded: &str, key: &[u8]) -> Result<Vec<u8>, EnvelopeError> {
        let blob = text::decode(encoded)?;
        self.decode_from_buffer(&blob, key)
    }

    /// Inspect a blob without a key: nonce bytes and ciphertext length.
    pub fn inspect(&self, blob: &[u8]) -> Result<BlobInfo, EnvelopeError> {
        let parts = wire::decode_blob(blob)?;
        Ok(BlobInfo {
            nonce: *parts.nonce,
            ciphertext_len: parts.ciphertext.len(),
        })
    }
}
