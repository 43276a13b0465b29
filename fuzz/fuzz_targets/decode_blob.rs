#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The blob codec must never panic, whatever the input length.
    let _ = gcm_envelope::wire::decode_blob(data);
});
