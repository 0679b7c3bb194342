//! Fuzz target for CTX decryption of arbitrary bytes
//!
//! This fuzzer feeds arbitrary ciphertexts, keys and nonces of any length to
//! both constructions to find:
//! - Panics on short or oversized buffers
//! - Size checks that are bypassed
//! - Forgeries (arbitrary bytes that authenticate)
//!
//! The fuzzer should NEVER panic. All invalid inputs should return an error.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ctx_aead::{plaintext_len, CtxError, Variant};

#[derive(Debug, Arbitrary)]
struct DecryptInput {
    plaintext_tag: bool,
    key: Vec<u8>,
    nonce: Vec<u8>,
    ad: Vec<u8>,
    ciphertext: Vec<u8>,
}

fuzz_target!(|input: DecryptInput| {
    let variant = if input.plaintext_tag { Variant::PlaintextTag } else { Variant::CiphertextTag };

    let mut out = vec![0u8; plaintext_len(input.ciphertext.len()).unwrap_or_default()];
    let result = variant.decrypt(&mut out, &input.ciphertext, &input.nonce, &input.key, &input.ad);

    // Random bytes must never authenticate
    assert!(result.is_err(), "arbitrary ciphertext authenticated");
    if result == Err(CtxError::AuthenticationFailure) {
        assert!(out.iter().all(|&b| b == 0), "output must be wiped on failure");
    }
});
