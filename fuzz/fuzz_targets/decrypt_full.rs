#![no_main]

use libfuzzer_sys::fuzz_target;
use once_cell::sync::Lazy;

static KEY: Lazy<Vec<u8>> = Lazy::new(|| gcm_envelope::generate_key().unwrap().to_vec());

fuzz_target!(|data: &[u8]| {
    let cipher = gcm_envelope::EnvelopeCipher::new();

    // Arbitrary blobs must fail cleanly, never panic.
    let _ = cipher.decode_from_buffer(data, &KEY);

    if let Ok(text) = core::str::from_utf8(data) {
        let _ = cipher.decode_from_text(text, &KEY);
    }
});
