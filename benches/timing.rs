use std::hint::black_box;
use std::time::Instant;

use gcm_envelope::EnvelopeCipher;

fn time_it<F: FnMut()>(label: &str, iters: usize, mut f: F) {
    // warmup
    for _ in 0..(iters / 10).max(10) {
        f();
    }

    let start = Instant::now();
    for _ in 0..iters {
        f();
    }
    let elapsed = start.elapsed();

    let per_iter = elapsed / (iters as u32);
    println!("{:<16} total={:?}  per_iter={:?}", label, elapsed, per_iter);
}

fn main() {
    let cipher = EnvelopeCipher::new();
    let key = cipher.generate_key().unwrap();
    let wrong_key = cipher.generate_key().unwrap();

    let plaintext = vec![0x42u8; 1024];
    let blob = cipher.encode_to_buffer(&plaintext, &key[..], None).unwrap();

    // Create a tampered blob
    let mut blob_tampered = blob.clone();
    let last = blob_tampered.len() - 1;
    blob_tampered[last] ^= 0x01;

    // Iters: keep reasonable, adjust as needed
    let iters = 50_000;

    time_it("encrypt", iters, || {
        let b = cipher
            .encode_to_buffer(black_box(&plaintext), black_box(&key[..]), None)
            .unwrap();
        black_box(b);
    });

    time_it("valid", iters, || {
        let pt = cipher
            .decode_from_buffer(black_box(&blob), black_box(&key[..]))
            .unwrap();
        black_box(pt);
    });

    time_it("tampered", iters, || {
        let r = cipher.decode_from_buffer(black_box(&blob_tampered), black_box(&key[..]));
        black_box(r.err());
    });

    time_it("wrong_key", iters, || {
        let r = cipher.decode_from_buffer(black_box(&blob), black_box(&wrong_key[..]));
        black_box(r.err());
    });
}
