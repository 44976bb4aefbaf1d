//! Block representation helpers.

/// Cipher block of 16 bytes, the state laid out column-major.
pub type Block = [u8; 16];

/// Number of bytes in one block, independent of key length.
pub const BLOCK_SIZE: usize = 16;

/// XORs `rhs` into `dst` byte by byte.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
