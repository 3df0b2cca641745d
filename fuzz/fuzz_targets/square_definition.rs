#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use rabin::{element, Rabin, TrapdoorPermutation};
use std::sync::OnceLock;

static ENGINE: OnceLock<Rabin> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let engine = ENGINE.get_or_init(|| Rabin::generate_with_size(256).unwrap());
    let n = engine.modulus();

    // Limit input to modulus size
    let n_len = n.to_bytes_be().len();
    let truncated = if data.len() > n_len { &data[..n_len] } else { data };

    let mut x = element::from_bytes(truncated);
    x %= n;

    let y = engine.apply(&x).unwrap();

    // Forward evaluation is plain modular squaring.
    assert_eq!(y, (&x * &x) % n);
    assert_eq!(y, x.modpow(&BigUint::from(2u32), n));

    // The byte mapping is lossless for reduced values.
    assert_eq!(element::from_bytes(element::to_bytes(&x)), x);
});
