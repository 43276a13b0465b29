//! # gcm-envelope
//!
//! Symmetric AES-256-GCM envelope encryption for data-at-rest and
//! data-in-transit blobs (e.g. encrypted fields inside JSON/API payloads).
//!
//! ## Quick Start
//!
//! ```rust
//! use gcm_envelope::EnvelopeCipher;
//!
//! let cipher = EnvelopeCipher::new();
//! let key = cipher.generate_key().unwrap();
//!
//! let sealed = cipher.encode_to_text(b"secret", &key[..], None).unwrap();
//! let plaintext = cipher.decode_from_text(&sealed, &key[..]).unwrap();
//!
//! assert_eq!(plaintext, b"secret");
//! ```
//!
//! ## Layers
//!
//! - **Core encrypt/decrypt** — AES-256-GCM with a detached 16-byte tag,
//!   returning (ciphertext, nonce, tag) as separate values
//! - **Buffer codec** — the frozen `nonce(6) || tag(16) || ciphertext`
//!   blob layout
//! - **Text codec** — standard base64 (with padding) over the blob
//! - **Key/nonce generation** — OS entropy; nonces use a printable hex
//!   alphabet so they can travel as plain text
//!
//! ## Security Properties
//!
//! - **Uniform decrypt errors**: tampered ciphertext, tampered tag, wrong
//!   key, and wrong nonce all surface as `AuthenticationFailed`
//! - **All-or-nothing**: no partial plaintext on any failure
//! - **Length validation first**: keys and nonces are length-checked before
//!   any cryptographic operation runs
//! - **Caller-owned nonce uniqueness**: a (key, nonce) pair must never be
//!   reused for different plaintexts; generated nonces draw from a 2^24
//!   value space, so high-volume callers should supply externally-sequenced
//!   fixed nonces
//!
//! ## What's NOT Provided
//!
//! - Key management or rotation
//! - Key derivation from passwords
//! - Streaming/chunked encryption
//! - Format versioning beyond the single fixed layout

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/gcm-envelope/0.1.0")]

extern crate alloc;

// ---------------------------------------------------------------------------
// Internal modules
// ---------------------------------------------------------------------------

mod aead;
mod envelope;
mod error;
mod key;
mod nonce;
mod text;

// The blob layout is a stable external interface; exposed for callers that
// need to parse envelopes without decrypting them.
pub mod wire;

// ---------------------------------------------------------------------------
// Public interface
// ---------------------------------------------------------------------------

pub use envelope::{BlobInfo, Encrypted, EnvelopeCipher};
pub use error::EnvelopeError;
pub use key::{generate_key, KEY_BYTES};
pub use nonce::generate_nonce;
pub use wire::{HEADER_BYTES, MIN_BLOB_BYTES, NONCE_BYTES, TAG_BYTES};
