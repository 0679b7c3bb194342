//! Fuzz target for CTX encryption and decryption
//!
//! Tests both constructions under adversarial inputs.
//!
//! # Strategy
//!
//! - Arbitrary plaintext and associated data (including empty)
//! - Arbitrary key and nonce
//! - Random tamper operations on ciphertext, nonce, key and AD
//!
//! # Invariants
//!
//! - Ciphertext length is always plaintext length + 20
//! - Encryption is deterministic
//! - Encrypt/decrypt roundtrip succeeds
//! - Any tampering fails authentication and leaves the output zeroed
//! - The two constructions never open each other's non-empty ciphertexts

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ctx_aead::{ciphertext_len, CtxError, Variant, COMMITMENT_TAG_SIZE};

#[derive(Debug, Clone, Arbitrary)]
struct CtxScenario {
    /// Construction under test
    plaintext_tag: bool,
    key: [u8; 32],
    nonce: [u8; 12],
    ad: Vec<u8>,
    plaintext: Vec<u8>,
    /// Tampering to apply before decrypting
    tamper: Tamper,
}

#[derive(Debug, Clone, Arbitrary)]
enum Tamper {
    None,
    Ciphertext { bit: u16 },
    Nonce { bit: u8 },
    Key { bit: u8 },
    AssociatedData { bit: u16 },
    AppendAssociatedData { byte: u8 },
}

fuzz_target!(|scenario: CtxScenario| {
    let variant =
        if scenario.plaintext_tag { Variant::PlaintextTag } else { Variant::CiphertextTag };

    let mut ciphertext = vec![0u8; ciphertext_len(scenario.plaintext.len())];
    variant
        .encrypt(&mut ciphertext, &scenario.plaintext, &scenario.nonce, &scenario.key, &scenario.ad)
        .unwrap();

    // INVARIANT 1: Length is plaintext + commitment tag
    assert_eq!(ciphertext.len(), scenario.plaintext.len() + COMMITMENT_TAG_SIZE);

    // INVARIANT 2: Encryption is deterministic
    let mut again = vec![0u8; ciphertext.len()];
    variant
        .encrypt(&mut again, &scenario.plaintext, &scenario.nonce, &scenario.key, &scenario.ad)
        .unwrap();
    assert_eq!(ciphertext, again, "encryption must be deterministic");

    // INVARIANT 3: The other construction rejects this ciphertext
    if !scenario.plaintext.is_empty() {
        let other = match variant {
            Variant::PlaintextTag => Variant::CiphertextTag,
            Variant::CiphertextTag => Variant::PlaintextTag,
        };
        let mut out = vec![0u8; scenario.plaintext.len()];
        let result =
            other.decrypt(&mut out, &ciphertext, &scenario.nonce, &scenario.key, &scenario.ad);
        assert_eq!(result, Err(CtxError::AuthenticationFailure));
    }

    let mut nonce = scenario.nonce;
    let mut key = scenario.key;
    let mut ad = scenario.ad.clone();
    let tampered = match scenario.tamper {
        Tamper::None => false,
        Tamper::Ciphertext { bit } => {
            let bit = usize::from(bit) % (ciphertext.len() * 8);
            ciphertext[bit / 8] ^= 1 << (bit % 8);
            true
        },
        Tamper::Nonce { bit } => {
            let bit = usize::from(bit) % (nonce.len() * 8);
            nonce[bit / 8] ^= 1 << (bit % 8);
            true
        },
        Tamper::Key { bit } => {
            let bit = usize::from(bit) % (key.len() * 8);
            key[bit / 8] ^= 1 << (bit % 8);
            true
        },
        Tamper::AssociatedData { bit } => {
            if ad.is_empty() {
                false
            } else {
                let bit = usize::from(bit) % (ad.len() * 8);
                ad[bit / 8] ^= 1 << (bit % 8);
                true
            }
        },
        Tamper::AppendAssociatedData { byte } => {
            ad.push(byte);
            true
        },
    };

    let mut out = vec![0xAAu8; scenario.plaintext.len()];
    let result = variant.decrypt(&mut out, &ciphertext, &nonce, &key, &ad);

    if tampered {
        // INVARIANT 4: Tampering fails and nothing leaks
        assert_eq!(result, Err(CtxError::AuthenticationFailure), "tampering must be detected");
        assert!(out.iter().all(|&b| b == 0), "output must be wiped on failure");
    } else {
        // INVARIANT 5: Roundtrip succeeds
        assert_eq!(result, Ok(()), "decryption of valid ciphertext must succeed");
        assert_eq!(out, scenario.plaintext, "decrypted message must match original");
    }
});
