//! Block-chaining modes and padding over a generic 16-byte block cipher.
//!
//! The mode functions are stateless and generic over
//! [`BlockCipher`](rijndael_core::BlockCipher): the caller owns the key and
//! IV lifecycle, passes an engine by reference, and gets a fresh output
//! buffer back. Nothing here holds hidden state, which is what makes ECB and
//! CBC decryption safe to drive from multiple threads over one shared
//! engine.
//!
//! - [`ecb`]: independent per-block encryption (deterministic, leaks equal
//!   blocks).
//! - [`cbc`]: XOR-chained blocks under a caller-supplied IV.
//! - [`ctr`]: counter keystream, length-preserving, no padding.
//! - [`pkcs7`]: the padding scheme used by the padded modes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cbc;
pub mod ctr;
pub mod ecb;
pub mod pkcs7;

pub use rijndael_core::CipherError;
