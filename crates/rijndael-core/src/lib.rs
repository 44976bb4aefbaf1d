//! SPN block-cipher core implementing AES-128/192/256 per FIPS-197.
//!
//! The crate is organized leaf-first:
//! - [`gf`]: GF(2^8) arithmetic under the AES reduction polynomial.
//! - [`sbox`]: S-box / inverse S-box derived at compile time from field
//!   inversion plus the affine transform.
//! - Key schedule, round pipeline, and a single-block engine exposing
//!   encrypt/decrypt over 16-byte blocks.
//!
//! Block chaining (ECB/CBC/CTR) and padding live in `rijndael-modes`; this
//! crate deliberately does nothing beyond one block at a time.
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
mod round;
pub mod sbox;

pub use crate::block::{xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{Aes, BlockCipher};
pub use crate::error::CipherError;
pub use crate::key::KeySchedule;
