//! Commitment tag derivation
//!
//! The commitment tag is `BLAKE2b` keyed with the full CTX key over
//! `nonce ∥ AD ∥ inner tag`, truncated by parameter to 20 bytes. The keyed,
//! collision-resistant hash is what binds a ciphertext to a single
//! (key, nonce, AD, plaintext) tuple.

use crate::{COMMITMENT_TAG_SIZE, INNER_TAG_SIZE, KEY_SIZE, NONCE_SIZE, primitives::KeyedHash};

/// Derive the 20-byte commitment tag.
pub fn commitment_tag(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ad: &[u8],
    inner_tag: &[u8; INNER_TAG_SIZE],
) -> [u8; COMMITMENT_TAG_SIZE] {
    let mut hash = KeyedHash::new(key);
    hash.update(nonce);
    hash.update(ad);
    hash.update(inner_tag);
    hash.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rfc8439_key() -> [u8; KEY_SIZE] {
        std::array::from_fn(|i| 0x80 + i as u8)
    }

    const RFC8439_NONCE: [u8; NONCE_SIZE] =
        [0x07, 0x00, 0x00, 0x00, 0x40, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47];

    const RFC8439_AD: [u8; 12] =
        [0x50, 0x51, 0x52, 0x53, 0xc0, 0xc1, 0xc2, 0xc3, 0xc4, 0xc5, 0xc6, 0xc7];

    #[test]
    fn commits_rfc8439_tag() {
        let inner: [u8; INNER_TAG_SIZE] =
            hex::decode("1ae10b594f09e26a7e902ecbd0600691").unwrap().try_into().unwrap();

        let tag = commitment_tag(&rfc8439_key(), &RFC8439_NONCE, &RFC8439_AD, &inner);

        assert_eq!(hex::encode(tag), "a7c38858c8387c1035f2df946991f5cf2e77ac85");
    }

    #[test]
    fn output_length_is_fixed() {
        let tag = commitment_tag(&[0u8; KEY_SIZE], &[0u8; NONCE_SIZE], &[0xAB; 4096], &[0u8; 16]);
        assert_eq!(tag.len(), COMMITMENT_TAG_SIZE);
    }

    #[test]
    fn every_input_is_bound() {
        let key = rfc8439_key();
        let inner = [0x5Au8; INNER_TAG_SIZE];
        let base = commitment_tag(&key, &RFC8439_NONCE, &RFC8439_AD, &inner);

        let mut other_key = key;
        other_key[31] ^= 1;
        assert_ne!(base, commitment_tag(&other_key, &RFC8439_NONCE, &RFC8439_AD, &inner));

        let mut other_nonce = RFC8439_NONCE;
        other_nonce[0] ^= 1;
        assert_ne!(base, commitment_tag(&key, &other_nonce, &RFC8439_AD, &inner));

        assert_ne!(base, commitment_tag(&key, &RFC8439_NONCE, &[], &inner));

        let mut other_inner = inner;
        other_inner[15] ^= 1;
        assert_ne!(base, commitment_tag(&key, &RFC8439_NONCE, &RFC8439_AD, &other_inner));
    }
}
