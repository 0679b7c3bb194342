//! CTX: Committing AEAD
//!
//! A fully-committing authenticated encryption scheme built by composing
//! three primitives: `ChaCha20` (stream cipher), `Poly1305` (one-time MAC)
//! and `BLAKE2b` (keyed hash). All functions are pure and stateless; callers
//! own every buffer and nonce uniqueness is the caller's responsibility.
//!
//! # Construction
//!
//! ```text
//! (key, nonce)
//!        │
//!        ├─▶ ChaCha20 block 0 ──▶ MAC subkey (32 bytes, wiped after use)
//!        │
//!        └─▶ ChaCha20 block 1.. ──▶ encrypted body
//!
//! Poly1305(subkey, AD ∥ pad ∥ body ∥ pad ∥ LE64(|AD|) ∥ LE64(|body|))
//!        │
//!        ▼
//! inner tag (16 bytes, never exposed)
//!        │
//!        ▼
//! BLAKE2b(key, nonce ∥ AD ∥ inner tag) ──▶ commitment tag (20 bytes)
//!
//! ciphertext = encrypted body ∥ commitment tag
//! ```
//!
//! # Constructions
//!
//! Two structurally different compositions exist and are kept as distinct
//! types that never share an ordering:
//!
//! - [`CiphertextTag`] (default): the inner tag covers the encrypted body
//!   (encrypt-then-MAC). Its inner tag is the RFC 8439 `ChaCha20-Poly1305`
//!   tag.
//! - [`PlaintextTag`]: the inner tag covers the plaintext (MAC-and-encrypt).
//!
//! The crate-level [`encrypt`], [`decrypt`], [`seal`] and [`open`] use
//! [`CiphertextTag`]. Use [`Ctx`] or [`Variant`] to name a construction
//! explicitly.
//!
//! # Security
//!
//! Commitment:
//! - The commitment tag is a keyed, collision-resistant hash over the nonce,
//!   associated data and the inner tag, so one ciphertext opens under at most
//!   one (key, nonce, AD, plaintext) tuple
//!
//! Verification:
//! - Tags are compared in constant time
//! - No plaintext byte is observable after a failed decryption: the output
//!   buffer is wiped before the error is returned
//!
//! Secret hygiene:
//! - MAC subkey, inner tag and recomputed commitment tag live in
//!   [`zeroize::Zeroizing`] guards and are wiped on every exit path
//! - Key material is never logged

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod codec;
pub mod commitment;
pub mod composer;
pub mod construction;
pub mod error;
pub mod padding;
pub mod primitives;

pub use codec::{Ctx, ciphertext_len, decrypt, encrypt, open, plaintext_len, seal};
pub use construction::{CiphertextTag, Construction, PlaintextTag, Variant};
pub use error::{Buffer, CtxError};

/// Size of a CTX key in bytes (256-bit)
pub const KEY_SIZE: usize = 32;

/// Size of a CTX nonce in bytes (96-bit IETF `ChaCha20` nonce)
pub const NONCE_SIZE: usize = 12;

/// Size of the commitment tag appended to every ciphertext
pub const COMMITMENT_TAG_SIZE: usize = 20;

/// Size of the `Poly1305` inner tag
pub const INNER_TAG_SIZE: usize = 16;

/// Size of the one-time `Poly1305` key drawn from keystream block 0
pub const MAC_KEY_SIZE: usize = 32;

/// Alignment of the MAC input segments
pub const BLOCK_SIZE: usize = 16;
