#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use rabin::{Rabin, TrapdoorPermutation};
use std::sync::OnceLock;

static ENGINE: OnceLock<Rabin> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let engine = ENGINE.get_or_init(|| Rabin::generate_with_size(256).unwrap());
    let n = engine.modulus();

    let (a_bytes, b_bytes) = data.split_at(data.len() / 2);
    let mut a = BigUint::from_bytes_be(a_bytes);
    let mut b = BigUint::from_bytes_be(b_bytes);
    a %= n;
    b %= n;

    let ya = engine.apply(&a).unwrap();
    let yb = engine.apply(&b).unwrap();
    let yab = engine.apply(&((&a * &b) % n)).unwrap();

    // Squaring is multiplicative: (a·b)² = a²·b² (mod n).
    assert_eq!(yab, (ya * yb) % n);
});
