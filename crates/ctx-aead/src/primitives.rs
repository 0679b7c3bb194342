//! Primitive providers
//!
//! Thin adapters giving the RustCrypto primitives the exact contracts CTX
//! composes: keystream fill/transform (`ChaCha20`), an incremental one-time
//! MAC with arbitrary update granularity (`Poly1305`), an incremental keyed
//! hash with a fixed 20-byte output (`BLAKE2b`) and constant-time equality
//! (`subtle`). None of the primitives are implemented here.

use blake2::{Blake2bMac, digest::Mac, digest::consts::U20};
use chacha20::{
    ChaCha20,
    cipher::{KeyIvInit, StreamCipher, StreamCipherSeek},
};
use poly1305::{
    Poly1305,
    universal_hash::{KeyInit, UniversalHash},
};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::{BLOCK_SIZE, COMMITMENT_TAG_SIZE, INNER_TAG_SIZE, KEY_SIZE, MAC_KEY_SIZE, NONCE_SIZE};

/// `ChaCha20` block size in bytes (one counter step)
const CHACHA_BLOCK_SIZE: u64 = 64;

/// `BLAKE2b` with a 160-bit output
type Blake2b160 = Blake2bMac<U20>;

/// Fill `out` with keystream starting at block counter 0.
pub fn keystream_block(out: &mut [u8], nonce: &[u8; NONCE_SIZE], key: &[u8; KEY_SIZE]) {
    out.fill(0);
    let mut cipher = ChaCha20::new(key.into(), nonce.into());
    cipher.apply_keystream(out);
}

/// XOR keystream starting at block `counter` into `input`, writing `out`.
///
/// `out` and `input` must have the same length. Callers validate this before
/// reaching here.
pub fn transform(
    out: &mut [u8],
    input: &[u8],
    nonce: &[u8; NONCE_SIZE],
    key: &[u8; KEY_SIZE],
    counter: u32,
) {
    debug_assert_eq!(out.len(), input.len());

    out.copy_from_slice(input);
    let mut cipher = ChaCha20::new(key.into(), nonce.into());
    cipher.seek(u64::from(counter) * CHACHA_BLOCK_SIZE);
    cipher.apply_keystream(out);
}

/// Incremental `Poly1305` keyed with a 32-byte one-time key.
///
/// Accepts updates of any length; partial blocks are buffered until they
/// fill or until [`finalize`](Self::finalize).
pub struct OneTimeMac {
    state: Poly1305,
    /// Partial block carried between updates (may hold plaintext)
    pending: Zeroizing<[u8; BLOCK_SIZE]>,
    /// Number of valid bytes in `pending`
    filled: usize,
}

impl OneTimeMac {
    /// Key a fresh MAC. The key must never be reused for another message.
    pub fn new(key: &[u8; MAC_KEY_SIZE]) -> Self {
        Self {
            state: Poly1305::new(key.into()),
            pending: Zeroizing::new([0u8; BLOCK_SIZE]),
            filled: 0,
        }
    }

    /// Absorb `data`.
    pub fn update(&mut self, mut data: &[u8]) {
        if self.filled > 0 {
            let take = (BLOCK_SIZE - self.filled).min(data.len());
            self.pending[self.filled..self.filled + take].copy_from_slice(&data[..take]);
            self.filled += take;
            data = &data[take..];

            if self.filled < BLOCK_SIZE {
                return;
            }
            self.state.update_padded(&self.pending[..]);
            self.filled = 0;
        }

        // Whole blocks go straight through; update_padded adds no padding here
        let whole = data.len() - data.len() % BLOCK_SIZE;
        self.state.update_padded(&data[..whole]);

        let rest = &data[whole..];
        self.pending[..rest.len()].copy_from_slice(rest);
        self.filled = rest.len();
    }

    /// Consume the MAC and produce the 16-byte tag.
    pub fn finalize(self) -> Zeroizing<[u8; INNER_TAG_SIZE]> {
        let Self { state, pending, filled } = self;
        let tag = state.compute_unpadded(&pending[..filled]);

        let mut out = Zeroizing::new([0u8; INNER_TAG_SIZE]);
        out.copy_from_slice(&tag);
        out
    }
}

/// Incremental keyed `BLAKE2b` with a fixed 20-byte output.
pub struct KeyedHash {
    state: Blake2b160,
}

impl KeyedHash {
    /// Key the hash with the full CTX key.
    pub fn new(key: &[u8; KEY_SIZE]) -> Self {
        let Ok(state) = <Blake2b160 as Mac>::new_from_slice(key) else {
            unreachable!("32 bytes is a valid BLAKE2b key length");
        };
        Self { state }
    }

    /// Absorb `data`.
    pub fn update(&mut self, data: &[u8]) {
        Mac::update(&mut self.state, data);
    }

    /// Consume the hash and produce the 20-byte digest.
    pub fn finalize(self) -> [u8; COMMITMENT_TAG_SIZE] {
        let digest = self.state.finalize().into_bytes();

        let mut out = [0u8; COMMITMENT_TAG_SIZE];
        out.copy_from_slice(&digest);
        out
    }
}

/// Constant-time equality.
///
/// Execution time does not depend on where `a` and `b` first differ. Slices
/// of different lengths compare unequal.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
