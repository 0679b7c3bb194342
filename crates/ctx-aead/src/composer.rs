//! Inner tag composition
//!
//! Frames associated data and a body into the one-time MAC:
//!
//! ```text
//! AD ∥ pad(AD) ∥ body ∥ pad(body) ∥ LE64(|AD|) ∥ LE64(|body|)
//! ```
//!
//! Padding is all-zero and aligns each segment to [`BLOCK_SIZE`], so bytes
//! cannot be shifted across the AD/body boundary; the length suffix pins the
//! split exactly. Which bytes count as the body is decided by the
//! [`Construction`](crate::Construction), never here.

use zeroize::Zeroizing;

use crate::{BLOCK_SIZE, INNER_TAG_SIZE, MAC_KEY_SIZE, padding::align, primitives::OneTimeMac};

/// Source of zero padding (at most one block minus one byte is ever needed)
const ZERO_PAD: [u8; BLOCK_SIZE] = [0u8; BLOCK_SIZE];

/// Compute the 16-byte inner tag over `ad` and `body`.
///
/// `mac_key` must be a one-time key: derive a fresh one per (key, nonce).
pub fn inner_tag(
    mac_key: &[u8; MAC_KEY_SIZE],
    ad: &[u8],
    body: &[u8],
) -> Zeroizing<[u8; INNER_TAG_SIZE]> {
    let mut mac = OneTimeMac::new(mac_key);

    absorb_padded(&mut mac, ad);
    absorb_padded(&mut mac, body);

    mac.update(&(ad.len() as u64).to_le_bytes());
    mac.update(&(body.len() as u64).to_le_bytes());

    mac.finalize()
}

fn absorb_padded(mac: &mut OneTimeMac, segment: &[u8]) {
    mac.update(segment);
    mac.update(&ZERO_PAD[..align(segment.len(), BLOCK_SIZE)]);
}
