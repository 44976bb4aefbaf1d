//! Error types shared by the cipher core and the block-mode wrappers.

use std::fmt;

/// Errors produced by the cipher engine and block modes.
///
/// All variants are reported synchronously at the point of detection; the
/// operations are deterministic, so nothing is retried internally and no
/// partial output is produced on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// Key is not 16, 24, or 32 bytes long.
    InvalidKeyLength {
        /// Length of the rejected key in bytes.
        length: usize,
    },
    /// Engine input (or a mode's ciphertext) is not an exact multiple of the
    /// 16-byte block size.
    BlockSizeMismatch {
        /// Length of the rejected input in bytes.
        length: usize,
    },
    /// PKCS#7 padding bytes are inconsistent.
    InvalidPadding,
    /// CBC/CTR initialization vector is not 16 bytes long.
    IvLengthMismatch {
        /// Length of the rejected IV in bytes.
        length: usize,
    },
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::InvalidKeyLength { length } => {
                write!(f, "key must be 16, 24, or 32 bytes, got {length}")
            }
            CipherError::BlockSizeMismatch { length } => {
                write!(f, "input must be a multiple of 16 bytes, got {length}")
            }
            CipherError::InvalidPadding => write!(f, "invalid PKCS#7 padding"),
            CipherError::IvLengthMismatch { length } => {
                write!(f, "initialization vector must be 16 bytes, got {length}")
            }
        }
    }
}

impl std::error::Error for CipherError {}
