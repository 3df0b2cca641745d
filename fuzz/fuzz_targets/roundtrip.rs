#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use num_traits::Zero;
use rabin::{Rabin, TrapdoorPermutation};
use std::sync::OnceLock;

static ENGINE: OnceLock<Rabin> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let engine = ENGINE.get_or_init(|| Rabin::generate_with_size(256).unwrap());
    let n = engine.modulus();

    // Limit input to modulus size
    let n_len = n.to_bytes_be().len();
    let truncated = if data.len() > n_len { &data[..n_len] } else { data };

    let mut x = BigUint::from_bytes_be(truncated);
    x %= n;
    if x.is_zero() {
        return;
    }

    let y = engine.apply(&x).unwrap();
    let root = engine.invert(&y).unwrap();

    // The selected root is a valid element squaring back to y.
    assert!(engine.is_valid_element(&root).unwrap());
    assert_eq!(engine.apply(&root).unwrap(), y);
});
