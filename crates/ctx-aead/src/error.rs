//! Error types for CTX operations

use std::fmt;

use thiserror::Error;

/// Which caller-supplied buffer violated its size contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffer {
    /// The 32-byte key
    Key,
    /// The 12-byte nonce
    Nonce,
    /// The output buffer (ciphertext on encrypt, plaintext on decrypt)
    Output,
    /// The ciphertext input, which must hold at least a commitment tag
    Ciphertext,
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Key => "key",
            Self::Nonce => "nonce",
            Self::Output => "output",
            Self::Ciphertext => "ciphertext",
        };
        f.write_str(name)
    }
}

/// Errors from CTX encryption and decryption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CtxError {
    /// A buffer length violates its fixed contract.
    ///
    /// Detected before any cryptographic work; no secret is touched and no
    /// output byte is written.
    #[error("{buffer} size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// The offending buffer
        buffer: Buffer,
        /// Required length (minimum length for [`Buffer::Ciphertext`])
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Commitment tag verification failed.
    ///
    /// Tampered ciphertext, or wrong key, nonce or associated data. The
    /// output buffer has been wiped.
    #[error("authentication failed: commitment tag mismatch")]
    AuthenticationFailure,
}

impl CtxError {
    /// Returns true if resizing buffers can fix the call.
    ///
    /// Authentication failures are content-dependent and never retryable
    /// without changing an input.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::SizeMismatch { .. } => true,
            Self::AuthenticationFailure => false,
        }
    }
}
