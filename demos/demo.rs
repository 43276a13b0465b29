//! gcm-envelope — walkthrough demo
//!
//! Run with: `cargo run --example demo`
//!
//! Walks through the full API: key generation, raw encrypt/decrypt, the
//! blob and text codecs, and tamper detection.

use gcm_envelope::{
    wire::{HEADER_BYTES, NONCE_BYTES, TAG_BYTES},
    EnvelopeCipher, EnvelopeError, KEY_BYTES,
};

fn section(title: &str) {
    println!("\n── {} ──", title);
}

fn main() {
    let cipher = EnvelopeCipher::new();

    section("parameters");
    println!("key       : {} bytes", KEY_BYTES);
    println!("nonce     : {} bytes (printable hex)", NONCE_BYTES);
    println!("tag       : {} bytes", TAG_BYTES);
    println!("blob head : {} bytes", HEADER_BYTES);

    section("key + nonce generation");
    let key = cipher.generate_key().unwrap();
    let nonce = cipher.generate_nonce().unwrap();
    println!("nonce     : {:?}", core::str::from_utf8(&nonce).unwrap());

    section("raw encrypt/decrypt");
    let plaintext = b"attack at dawn";
    let enc = cipher.encrypt(plaintext, &key[..], None).unwrap();
    println!("ciphertext: {} bytes (same as plaintext)", enc.ciphertext.len());
    let pt = cipher
        .decrypt(&enc.ciphertext, &key[..], &enc.nonce, &enc.tag)
        .unwrap();
    assert_eq!(&pt, plaintext);
    println!("roundtrip : ok");

    section("blob codec");
    let blob = cipher.encode_to_buffer(plaintext, &key[..], None).unwrap();
    println!("blob      : {} bytes ({} + {})", blob.len(), HEADER_BYTES, plaintext.len());
    let info = cipher.inspect(&blob).unwrap();
    println!("inspect   : nonce={:?} ciphertext_len={}",
        core::str::from_utf8(&info.nonce).unwrap(), info.ciphertext_len);
    assert_eq!(cipher.decode_from_buffer(&blob, &key[..]).unwrap(), plaintext);
    println!("roundtrip : ok");

    section("text codec");
    let text = cipher.encode_to_text(plaintext, &key[..], None).unwrap();
    println!("text      : {}", text);
    assert_eq!(cipher.decode_from_text(&text, &key[..]).unwrap(), plaintext);
    println!("roundtrip : ok");

    section("tamper detection");
    let mut tampered = blob.clone();
    let last = tampered.len() - 1;
    tampered[last] ^= 0x01;
    let result = cipher.decode_from_buffer(&tampered, &key[..]);
    assert_eq!(result, Err(EnvelopeError::AuthenticationFailed));
    println!("flipped one bit → {}", result.unwrap_err());

    println!("\n✓ All demos passed.");
}
