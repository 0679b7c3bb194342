//! CTX encryption and decryption
//!
//! Both operations run strictly linearly:
//!
//! ```text
//! Validating ─▶ DerivingSubkey ─▶ Tagging ─▶ (Verifying) ─▶ Finalizing | Failed
//! ```
//!
//! Buffer sizes are checked before any primitive is touched. Ephemeral
//! secrets (MAC subkey, inner tag, recomputed commitment tag) are held in
//! [`Zeroizing`] guards, so they are wiped on the success path, the error
//! path and during unwinding alike.

use std::marker::PhantomData;

use zeroize::{Zeroize, Zeroizing};

use crate::{
    COMMITMENT_TAG_SIZE, INNER_TAG_SIZE, KEY_SIZE, MAC_KEY_SIZE, NONCE_SIZE,
    commitment::commitment_tag,
    composer::inner_tag,
    construction::{CiphertextTag, Construction, Variant},
    error::{Buffer, CtxError},
    primitives::{constant_time_eq, keystream_block, transform},
};

/// Keystream block where the payload starts (block 0 is the MAC subkey)
const PAYLOAD_COUNTER: u32 = 1;

/// Ciphertext length for a plaintext of `plaintext_len` bytes.
pub const fn ciphertext_len(plaintext_len: usize) -> usize {
    plaintext_len + COMMITMENT_TAG_SIZE
}

/// Plaintext length for a ciphertext of `ciphertext_len` bytes.
///
/// Returns `None` if the ciphertext cannot hold a commitment tag.
pub const fn plaintext_len(ciphertext_len: usize) -> Option<usize> {
    ciphertext_len.checked_sub(COMMITMENT_TAG_SIZE)
}

/// Key and nonce of a single call, validated to their fixed sizes.
struct Session<'a> {
    key: &'a [u8; KEY_SIZE],
    nonce: &'a [u8; NONCE_SIZE],
}

impl<'a> Session<'a> {
    fn new(key: &'a [u8], nonce: &'a [u8]) -> Result<Self, CtxError> {
        let key = <&[u8; KEY_SIZE]>::try_from(key).map_err(|_| CtxError::SizeMismatch {
            buffer: Buffer::Key,
            expected: KEY_SIZE,
            actual: key.len(),
        })?;
        let nonce = <&[u8; NONCE_SIZE]>::try_from(nonce).map_err(|_| CtxError::SizeMismatch {
            buffer: Buffer::Nonce,
            expected: NONCE_SIZE,
            actual: nonce.len(),
        })?;

        Ok(Self { key, nonce })
    }

    /// One-time MAC key: the first 32 bytes of keystream block 0.
    fn mac_key(&self) -> Zeroizing<[u8; MAC_KEY_SIZE]> {
        let mut mac_key = Zeroizing::new([0u8; MAC_KEY_SIZE]);
        keystream_block(&mut mac_key[..], self.nonce, self.key);
        mac_key
    }

    fn apply_keystream(&self, out: &mut [u8], input: &[u8]) {
        transform(out, input, self.nonce, self.key, PAYLOAD_COUNTER);
    }

    fn commitment_tag(
        &self,
        ad: &[u8],
        inner: &[u8; INNER_TAG_SIZE],
    ) -> [u8; COMMITMENT_TAG_SIZE] {
        commitment_tag(self.key, self.nonce, ad, inner)
    }
}

impl Variant {
    /// Encrypt `plaintext` into `out` under this construction.
    ///
    /// `out` must be exactly `plaintext.len() + 20` bytes; the commitment tag
    /// occupies its last 20 bytes.
    ///
    /// # Errors
    ///
    /// - `SizeMismatch`: wrong key, nonce or output length (nothing written)
    pub fn encrypt(
        self,
        out: &mut [u8],
        plaintext: &[u8],
        nonce: &[u8],
        key: &[u8],
        ad: &[u8],
    ) -> Result<(), CtxError> {
        let session = Session::new(key, nonce)?;
        let expected = ciphertext_len(plaintext.len());
        if out.len() != expected {
            return Err(CtxError::SizeMismatch {
                buffer: Buffer::Output,
                expected,
                actual: out.len(),
            });
        }

        tracing::trace!(
            construction = self.name(),
            plaintext_len = plaintext.len(),
            ad_len = ad.len(),
            "ctx encrypt"
        );

        let (body, tag) = out.split_at_mut(plaintext.len());

        let mac_key = session.mac_key();
        session.apply_keystream(body, plaintext);

        let inner = match self {
            Self::PlaintextTag => inner_tag(&mac_key, ad, plaintext),
            Self::CiphertextTag => inner_tag(&mac_key, ad, body),
        };
        drop(mac_key);

        tag.copy_from_slice(&session.commitment_tag(ad, &inner));
        Ok(())
    }

    /// Decrypt `ciphertext` into `out` under this construction.
    ///
    /// `out` must be exactly `ciphertext.len() - 20` bytes. The commitment tag
    /// is verified in constant time before any plaintext is released.
    ///
    /// # Errors
    ///
    /// - `SizeMismatch`: wrong key, nonce, ciphertext or output length
    ///   (nothing written)
    /// - `AuthenticationFailure`: tag mismatch; `out` is wiped
    pub fn decrypt(
        self,
        out: &mut [u8],
        ciphertext: &[u8],
        nonce: &[u8],
        key: &[u8],
        ad: &[u8],
    ) -> Result<(), CtxError> {
        let session = Session::new(key, nonce)?;
        let Some(expected) = plaintext_len(ciphertext.len()) else {
            return Err(CtxError::SizeMismatch {
                buffer: Buffer::Ciphertext,
                expected: COMMITMENT_TAG_SIZE,
                actual: ciphertext.len(),
            });
        };
        if out.len() != expected {
            return Err(CtxError::SizeMismatch {
                buffer: Buffer::Output,
                expected,
                actual: out.len(),
            });
        }

        tracing::trace!(
            construction = self.name(),
            ciphertext_len = ciphertext.len(),
            ad_len = ad.len(),
            "ctx decrypt"
        );

        let (body, received_tag) = ciphertext.split_at(expected);

        let mac_key = session.mac_key();
        let inner = match self {
            Self::PlaintextTag => {
                // Candidate plaintext stays unobservable until verified
                session.apply_keystream(out, body);
                inner_tag(&mac_key, ad, out)
            },
            Self::CiphertextTag => inner_tag(&mac_key, ad, body),
        };
        drop(mac_key);

        let computed_tag = Zeroizing::new(session.commitment_tag(ad, &inner));
        drop(inner);

        if !constant_time_eq(&computed_tag[..], received_tag) {
            out.zeroize();
            return Err(CtxError::AuthenticationFailure);
        }

        if self == Self::CiphertextTag {
            session.apply_keystream(out, body);
        }
        Ok(())
    }
}

/// CTX codec for a construction fixed at compile time.
///
/// Value-less: all operations are associated functions.
///
/// ```
/// use ctx_aead::{Ctx, PlaintextTag};
///
/// let key = [0x42u8; 32];
/// let nonce = [0x24u8; 12];
///
/// let sealed = Ctx::<PlaintextTag>::seal(b"hello", &nonce, &key, b"header")?;
/// let opened = Ctx::<PlaintextTag>::open(&sealed, &nonce, &key, b"header")?;
/// assert_eq!(opened, b"hello");
/// # Ok::<(), ctx_aead::CtxError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Ctx<C: Construction = CiphertextTag> {
    _construction: PhantomData<C>,
}

impl<C: Construction> Ctx<C> {
    /// Encrypt into a caller-provided buffer. See [`Variant::encrypt`].
    pub fn encrypt(
        out: &mut [u8],
        plaintext: &[u8],
        nonce: &[u8],
        key: &[u8],
        ad: &[u8],
    ) -> Result<(), CtxError> {
        C::VARIANT.encrypt(out, plaintext, nonce, key, ad)
    }

    /// Decrypt into a caller-provided buffer. See [`Variant::decrypt`].
    pub fn decrypt(
        out: &mut [u8],
        ciphertext: &[u8],
        nonce: &[u8],
        key: &[u8],
        ad: &[u8],
    ) -> Result<(), CtxError> {
        C::VARIANT.decrypt(out, ciphertext, nonce, key, ad)
    }

    /// Encrypt into a freshly allocated `plaintext.len() + 20` byte buffer.
    pub fn seal(plaintext: &[u8], nonce: &[u8], key: &[u8], ad: &[u8]) -> Result<Vec<u8>, CtxError> {
        let mut ciphertext = vec![0u8; ciphertext_len(plaintext.len())];
        Self::encrypt(&mut ciphertext, plaintext, nonce, key, ad)?;
        Ok(ciphertext)
    }

    /// Decrypt into a freshly allocated buffer.
    ///
    /// On failure nothing is returned; the partially used buffer is wiped.
    pub fn open(ciphertext: &[u8], nonce: &[u8], key: &[u8], ad: &[u8]) -> Result<Vec<u8>, CtxError> {
        let mut plaintext = vec![0u8; plaintext_len(ciphertext.len()).unwrap_or_default()];
        Self::decrypt(&mut plaintext, ciphertext, nonce, key, ad)?;
        Ok(plaintext)
    }
}

/// Encrypt with the default construction ([`CiphertextTag`]).
///
/// # Errors
///
/// - `SizeMismatch`: `out` is not `plaintext.len() + 20` bytes, or key/nonce
///   have the wrong size
pub fn encrypt(
    out: &mut [u8],
    plaintext: &[u8],
    nonce: &[u8],
    key: &[u8],
    ad: &[u8],
) -> Result<(), CtxError> {
    Ctx::<CiphertextTag>::encrypt(out, plaintext, nonce, key, ad)
}

/// Decrypt with the default construction ([`CiphertextTag`]).
///
/// # Errors
///
/// - `SizeMismatch`: bad buffer sizes
/// - `AuthenticationFailure`: tampered input or wrong key/nonce/AD; `out`
///   is wiped
pub fn decrypt(
    out: &mut [u8],
    ciphertext: &[u8],
    nonce: &[u8],
    key: &[u8],
    ad: &[u8],
) -> Result<(), CtxError> {
    Ctx::<CiphertextTag>::decrypt(out, ciphertext, nonce, key, ad)
}

/// Allocating [`encrypt`].
pub fn seal(plaintext: &[u8], nonce: &[u8], key: &[u8], ad: &[u8]) -> Result<Vec<u8>, CtxError> {
    Ctx::<CiphertextTag>::seal(plaintext, nonce, key, ad)
}

/// Allocating [`decrypt`].
pub fn open(ciphertext: &[u8], nonce: &[u8], key: &[u8], ad: &[u8]) -> Result<Vec<u8>, CtxError> {
    Ctx::<CiphertextTag>::open(ciphertext, nonce, key, ad)
}
