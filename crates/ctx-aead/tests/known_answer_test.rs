//! Known-answer tests
//!
//! Inputs are the RFC 8439 section 2.8.2 AEAD example. Both constructions
//! share the RFC 8439 encrypted body; they differ only in the 20-byte
//! commitment tag.

use ctx_aead::{
    CiphertextTag, Ctx, CtxError, PlaintextTag, Variant, ciphertext_len, decrypt, encrypt,
};

const PLAINTEXT: &[u8] = b"Ladies and Gentlemen of the class of '99: If I could offer you only one tip for the future, sunscreen would be it.";

const NONCE: &str = "070000004041424344454647";
const AD: &str = "50515253c0c1c2c3c4c5c6c7";

const ENCRYPTED_BODY: &str = concat!(
    "d31a8d34648e60db7b86afbc53ef7ec2a4aded51296e08fea9e2b5a736ee62d6",
    "3dbea45e8ca9671282fafb69da92728b1a71de0a9e060b2905d6a5b67ecd3b36",
    "92ddbd7f2d778b8c9803aee328091b58fab324e4fad675945585808b4831d7bc",
    "3ff4def08e4b7a9de576d26586cec64b6116",
);

const PLAINTEXT_TAG_COMMITMENT: &str = "e5e6fb1862f83eb00da4562fe0496ed9253cfa7f";
const CIPHERTEXT_TAG_COMMITMENT: &str = "a7c38858c8387c1035f2df946991f5cf2e77ac85";

fn key() -> Vec<u8> {
    (0x80..=0x9f).collect()
}

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

fn encrypt_with(variant: Variant, plaintext: &[u8], ad: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; ciphertext_len(plaintext.len())];
    variant.encrypt(&mut out, plaintext, &unhex(NONCE), &key(), ad).unwrap();
    out
}

#[test]
fn rfc8439_inputs_have_expected_length() {
    assert_eq!(PLAINTEXT.len(), 114);
    assert_eq!(key().len(), 32);
}

#[test]
fn plaintext_tag_vector() {
    let ciphertext = encrypt_with(Variant::PlaintextTag, PLAINTEXT, &unhex(AD));

    let expected = format!("{ENCRYPTED_BODY}{PLAINTEXT_TAG_COMMITMENT}");
    assert_eq!(hex::encode(&ciphertext), expected);
}

#[test]
fn ciphertext_tag_vector() {
    let ciphertext = encrypt_with(Variant::CiphertextTag, PLAINTEXT, &unhex(AD));

    let expected = format!("{ENCRYPTED_BODY}{CIPHERTEXT_TAG_COMMITMENT}");
    assert_eq!(hex::encode(&ciphertext), expected);
}

#[test]
fn crate_default_is_ciphertext_tag() {
    let mut out = vec![0u8; ciphertext_len(PLAINTEXT.len())];
    encrypt(&mut out, PLAINTEXT, &unhex(NONCE), &key(), &unhex(AD)).unwrap();

    assert!(hex::encode(&out).ends_with(CIPHERTEXT_TAG_COMMITMENT));
}

#[test]
fn vectors_decrypt() {
    let ad = unhex(AD);

    let a = unhex(&format!("{ENCRYPTED_BODY}{PLAINTEXT_TAG_COMMITMENT}"));
    let opened = Ctx::<PlaintextTag>::open(&a, &unhex(NONCE), &key(), &ad).unwrap();
    assert_eq!(opened, PLAINTEXT);

    let b = unhex(&format!("{ENCRYPTED_BODY}{CIPHERTEXT_TAG_COMMITMENT}"));
    let mut out = vec![0u8; PLAINTEXT.len()];
    decrypt(&mut out, &b, &unhex(NONCE), &key(), &ad).unwrap();
    assert_eq!(out, PLAINTEXT);
}

#[test]
fn empty_ad_vectors() {
    let a = encrypt_with(Variant::PlaintextTag, PLAINTEXT, &[]);
    assert!(hex::encode(&a).ends_with("5efa5e72900075e963a76b9393d058519527558e"));

    let b = encrypt_with(Variant::CiphertextTag, PLAINTEXT, &[]);
    assert!(hex::encode(&b).ends_with("3747a74aaec927328f2c21b90b400b8338d2e850"));
}

#[test]
fn empty_plaintext_vector_is_shared() {
    // With no body both constructions MAC the same framed input
    let a = encrypt_with(Variant::PlaintextTag, &[], &unhex(AD));
    let b = encrypt_with(Variant::CiphertextTag, &[], &unhex(AD));

    assert_eq!(hex::encode(&a), "04f11a36bc5f7ded2cee0f937cea4e123a70c0c8");
    assert_eq!(a, b);
}

#[test]
fn omitted_ad_fails_authentication() {
    for variant in [Variant::PlaintextTag, Variant::CiphertextTag] {
        let ciphertext = encrypt_with(variant, PLAINTEXT, &unhex(AD));

        let mut out = vec![0xAAu8; PLAINTEXT.len()];
        let result = variant.decrypt(&mut out, &ciphertext, &unhex(NONCE), &key(), &[]);

        assert_eq!(result, Err(CtxError::AuthenticationFailure), "{variant}");
        assert!(out.iter().all(|&b| b == 0));
    }
}

#[test]
fn vectors_do_not_cross_constructions() {
    let a = unhex(&format!("{ENCRYPTED_BODY}{PLAINTEXT_TAG_COMMITMENT}"));

    assert_eq!(
        Ctx::<CiphertextTag>::open(&a, &unhex(NONCE), &key(), &unhex(AD)),
        Err(CtxError::AuthenticationFailure)
    );
}
