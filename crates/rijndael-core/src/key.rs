//! Key schedule for AES-128/192/256.

use core::convert::TryInto;

use crate::block::Block;
use crate::error::CipherError;
use crate::sbox::sbox;

/// Round constants for the key expansion, successive powers of x in GF(2^8).
const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    let b0 = sbox((word >> 24) as u8) as u32;
    let b1 = sbox((word >> 16) as u8) as u32;
    let b2 = sbox((word >> 8) as u8) as u32;
    let b3 = sbox(word as u8) as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

/// Expanded round keys for one root key.
///
/// Expansion runs once per key; the schedule is immutable afterwards and can
/// be shared across any number of block operations (including from multiple
/// threads, since nothing here is ever written again).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySchedule {
    round_keys: Vec<Block>,
    rounds: usize,
}

impl KeySchedule {
    /// Expands a 16-, 24-, or 32-byte root key into `rounds + 1` round keys.
    ///
    /// The round count is 10, 12, or 14 respectively. Any other key length
    /// is rejected with [`CipherError::InvalidKeyLength`] before expansion
    /// begins.
    pub fn expand(key: &[u8]) -> Result<Self, CipherError> {
        let nk = match key.len() {
            16 => 4,
            24 => 6,
            32 => 8,
            length => return Err(CipherError::InvalidKeyLength { length }),
        };
        let rounds = nk + 6;
        let total_words = 4 * (rounds + 1);

        let mut w = vec![0u32; total_words];
        for (i, chunk) in key.chunks_exact(4).enumerate() {
            let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
            w[i] = u32::from_be_bytes(bytes);
        }

        for i in nk..total_words {
            let mut temp = w[i - 1];
            if i % nk == 0 {
                temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / nk - 1]) << 24);
            } else if nk == 8 && i % nk == 4 {
                // AES-256 applies an extra S-box pass at the midpoint word.
                temp = sub_word(temp);
            }
            w[i] = w[i - nk] ^ temp;
        }

        let mut round_keys = vec![[0u8; 16]; rounds + 1];
        for (round, round_key) in round_keys.iter_mut().enumerate() {
            for word_idx in 0..4 {
                let bytes = w[round * 4 + word_idx].to_be_bytes();
                round_key[word_idx * 4..word_idx * 4 + 4].copy_from_slice(&bytes);
            }
        }

        Ok(Self { round_keys, rounds })
    }

    /// Number of cipher rounds for this key size (10, 12, or 14).
    #[inline]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Number of round keys held (always `rounds + 1`).
    #[inline]
    pub fn round_key_count(&self) -> usize {
        self.round_keys.len()
    }

    /// Returns the round key at the requested index (0..=rounds).
    #[inline]
    pub fn round_key(&self, round: usize) -> &Block {
        &self.round_keys[round]
    }
}
