//! Named CTX constructions
//!
//! The inner tag can cover either the plaintext or the encrypted body. The two
//! choices are different constructions with different security arguments, so
//! each is its own type and the codec runs one ordering end to end. Which one
//! matches the security proof of the original CTX paper is unsettled; this
//! crate defaults to [`CiphertextTag`].

use std::fmt;

/// Runtime tag for a construction.
///
/// Useful when the construction is selected from configuration; dispatch
/// through [`Variant::encrypt`] and [`Variant::decrypt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Variant A: inner tag over the plaintext (MAC-and-encrypt)
    PlaintextTag,
    /// Variant B: inner tag over the encrypted body (encrypt-then-MAC)
    #[default]
    CiphertextTag,
}

impl Variant {
    /// Stable identifier, e.g. for logs and configuration.
    pub fn name(self) -> &'static str {
        match self {
            Self::PlaintextTag => PlaintextTag::NAME,
            Self::CiphertextTag => CiphertextTag::NAME,
        }
    }

    /// Parse a name produced by [`Variant::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::PlaintextTag, Self::CiphertextTag].into_iter().find(|variant| variant.name() == name)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A CTX construction known at compile time.
///
/// Sealed: the only implementations are [`PlaintextTag`] and
/// [`CiphertextTag`].
pub trait Construction: sealed::Sealed + Copy + Default + Send + Sync + 'static {
    /// Stable identifier
    const NAME: &'static str;
    /// Runtime tag for this construction
    const VARIANT: Variant;
}

/// Variant A: `Poly1305` over the plaintext.
///
/// Decryption must decrypt before it can verify; the candidate plaintext is
/// wiped if verification fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaintextTag;

impl sealed::Sealed for PlaintextTag {}

impl Construction for PlaintextTag {
    const NAME: &'static str = "ctx-plaintext-tag";
    const VARIANT: Variant = Variant::PlaintextTag;
}

/// Variant B: `Poly1305` over the encrypted body.
///
/// Decryption verifies the ciphertext first and only then decrypts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CiphertextTag;

impl sealed::Sealed for CiphertextTag {}

impl Construction for CiphertextTag {
    const NAME: &'static str = "ctx-ciphertext-tag";
    const VARIANT: Variant = Variant::CiphertextTag;
}
