//! Round transformations over the 16-byte state.
//!
//! The state is column-major: byte `i` sits at row `i % 4`, column `i / 4`.
//! Every transform mutates the state in place; each has an exact inverse so
//! the decryption pipeline can mirror encryption stage by stage.

use crate::block::{xor_in_place, Block};
use crate::gf;
use crate::sbox::{inv_sbox, sbox};

/// Applies SubBytes to the state in place.
///
/// Each byte is replaced independently, so lookup order does not matter.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row r rotates left by r positions.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let mut tmp = [0u8; 16];
    tmp[0] = state[0];
    tmp[1] = state[5];
    tmp[2] = state[10];
    tmp[3] = state[15];

    tmp[4] = state[4];
    tmp[5] = state[9];
    tmp[6] = state[14];
    tmp[7] = state[3];

    tmp[8] = state[8];
    tmp[9] = state[13];
    tmp[10] = state[2];
    tmp[11] = state[7];

    tmp[12] = state[12];
    tmp[13] = state[1];
    tmp[14] = state[6];
    tmp[15] = state[11];

    *state = tmp;
}

/// Performs the inverse of ShiftRows in place: row r rotates right by r.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let mut tmp = [0u8; 16];
    tmp[0] = state[0];
    tmp[1] = state[13];
    tmp[2] = state[10];
    tmp[3] = state[7];

    tmp[4] = state[4];
    tmp[5] = state[1];
    tmp[6] = state[14];
    tmp[7] = state[11];

    tmp[8] = state[8];
    tmp[9] = state[5];
    tmp[10] = state[2];
    tmp[11] = state[15];

    tmp[12] = state[12];
    tmp[13] = state[9];
    tmp[14] = state[6];
    tmp[15] = state[3];

    *state = tmp;
}

fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = gf::mul(a0, 0x02) ^ gf::mul(a1, 0x03) ^ a2 ^ a3;
    col[1] = a0 ^ gf::mul(a1, 0x02) ^ gf::mul(a2, 0x03) ^ a3;
    col[2] = a0 ^ a1 ^ gf::mul(a2, 0x02) ^ gf::mul(a3, 0x03);
    col[3] = gf::mul(a0, 0x03) ^ a1 ^ a2 ^ gf::mul(a3, 0x02);
}

fn inv_mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = gf::mul(a0, 0x0e) ^ gf::mul(a1, 0x0b) ^ gf::mul(a2, 0x0d) ^ gf::mul(a3, 0x09);
    col[1] = gf::mul(a0, 0x09) ^ gf::mul(a1, 0x0e) ^ gf::mul(a2, 0x0b) ^ gf::mul(a3, 0x0d);
    col[2] = gf::mul(a0, 0x0d) ^ gf::mul(a1, 0x09) ^ gf::mul(a2, 0x0e) ^ gf::mul(a3, 0x0b);
    col[3] = gf::mul(a0, 0x0b) ^ gf::mul(a1, 0x0d) ^ gf::mul(a2, 0x09) ^ gf::mul(a3, 0x0e);
}

/// MixColumns over all four columns: each column is left-multiplied by the
/// fixed circulant matrix (2 3 1 1) over GF(2^8).
#[inline]
pub fn mix_columns(state: &mut Block) {
    for col in 0..4 {
        let idx = col * 4;
        let mut column = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        mix_single_column(&mut column);
        state[idx..idx + 4].copy_from_slice(&column);
    }
}

/// Inverse MixColumns, using the matrix inverse (14 11 13 9).
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for col in 0..4 {
        let idx = col * 4;
        let mut column = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        inv_mix_single_column(&mut column);
        state[idx..idx + 4].copy_from_slice(&column);
    }
}

/// Adds (XORs) a round key into the state; self-inverse.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
