//! Derived S-box and inverse S-box.
//!
//! Both tables are computed at compile time from field inversion followed by
//! the AES affine transform, rather than pasted in as literals. A const
//! assertion checks that the two tables are mutual bijections, so a wrong
//! reduction polynomial or affine constant fails the build instead of
//! corrupting ciphertext at runtime.

use crate::gf;

const fn affine(x: u8) -> u8 {
    x ^ x.rotate_left(1) ^ x.rotate_left(2) ^ x.rotate_left(3) ^ x.rotate_left(4) ^ 0x63
}

const fn generate_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut b = 0usize;
    while b < 256 {
        table[b] = affine(gf::inv(b as u8));
        b += 1;
    }
    table
}

const fn generate_inv_sbox(sbox: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut b = 0usize;
    while b < 256 {
        table[sbox[b] as usize] = b as u8;
        b += 1;
    }
    table
}

/// The AES substitution table, `SBOX[b] = affine(b^-1)`.
pub const SBOX: [u8; 256] = generate_sbox();

/// Positional inverse of [`SBOX`].
pub const INV_SBOX: [u8; 256] = generate_inv_sbox(&SBOX);

// Bijection check: INV_SBOX[SBOX[x]] == x and SBOX[INV_SBOX[x]] == x for all x.
const _: () = {
    let mut x = 0usize;
    while x < 256 {
        assert!(INV_SBOX[SBOX[x] as usize] == x as u8);
        assert!(SBOX[INV_SBOX[x] as usize] == x as u8);
        x += 1;
    }
};

/// Forward substitution of a single byte.
#[inline]
pub const fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// Inverse substitution of a single byte.
#[inline]
pub const fn inv_sbox(byte: u8) -> u8 {
    INV_SBOX[byte as usize]
}
