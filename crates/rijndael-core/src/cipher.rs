//! Single-block cipher engine and the trait seam for block modes.

use crate::block::{Block, BLOCK_SIZE};
use crate::error::CipherError;
use crate::key::KeySchedule;
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

/// A block cipher operating on 16-byte blocks.
///
/// The mode wrappers in `rijndael-modes` are generic over this trait, so a
/// structurally similar cipher (a different SPN with its own substitution and
/// diffusion layers) plugs into ECB/CBC/CTR and padding without touching the
/// mode code.
pub trait BlockCipher {
    /// Block size in bytes; fixed at 16 for this family.
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// Encrypts exactly one block.
    ///
    /// Fails with [`CipherError::BlockSizeMismatch`] unless `block` is
    /// exactly [`block_size`](Self::block_size) bytes. No padding happens at
    /// this layer.
    fn encrypt_block(&self, block: &[u8]) -> Result<Block, CipherError>;

    /// Decrypts exactly one block; same length contract as
    /// [`encrypt_block`](Self::encrypt_block).
    fn decrypt_block(&self, block: &[u8]) -> Result<Block, CipherError>;
}

/// AES engine holding one expanded key schedule.
///
/// Construction runs the key schedule once; the instance is then read-only
/// and cheap to share across blocks (and threads) for the lifetime of the
/// key.
#[derive(Clone, Debug)]
pub struct Aes {
    schedule: KeySchedule,
}

impl Aes {
    /// Expands the given 16-, 24-, or 32-byte key.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        Ok(Self {
            schedule: KeySchedule::expand(key)?,
        })
    }

    /// Builds an engine from an already-expanded schedule.
    pub fn with_schedule(schedule: KeySchedule) -> Self {
        Self { schedule }
    }

    /// The expanded schedule backing this engine.
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    fn check_block(block: &[u8]) -> Result<Block, CipherError> {
        if block.len() != BLOCK_SIZE {
            return Err(CipherError::BlockSizeMismatch {
                length: block.len(),
            });
        }
        let mut state = [0u8; BLOCK_SIZE];
        state.copy_from_slice(block);
        Ok(state)
    }
}

impl BlockCipher for Aes {
    fn encrypt_block(&self, block: &[u8]) -> Result<Block, CipherError> {
        let mut state = Self::check_block(block)?;
        let rounds = self.schedule.rounds();

        add_round_key(&mut state, self.schedule.round_key(0));

        for round in 1..rounds {
            sub_bytes(&mut state);
            shift_rows(&mut state);
            mix_columns(&mut state);
            add_round_key(&mut state, self.schedule.round_key(round));
        }

        // Final round skips MixColumns; the omission is what makes the
        // inverse pipeline line up.
        sub_bytes(&mut state);
        shift_rows(&mut state);
        add_round_key(&mut state, self.schedule.round_key(rounds));

        Ok(state)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Block, CipherError> {
        let mut state = Self::check_block(block)?;
        let rounds = self.schedule.rounds();

        add_round_key(&mut state, self.schedule.round_key(rounds));
        for round in (1..rounds).rev() {
            inv_shift_rows(&mut state);
            inv_sub_bytes(&mut state);
            add_round_key(&mut state, self.schedule.round_key(round));
            inv_mix_columns(&mut state);
        }
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, self.schedule.round_key(0));

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    fn fips197_key(len: usize) -> Vec<u8> {
        (0..len as u8).collect()
    }

    const FIPS_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];

    #[test]
    fn aes128_matches_fips197_appendix_c1() {
        let aes = Aes::new(&fips197_key(16)).unwrap();
        let ct = aes.encrypt_block(&FIPS_PLAIN).unwrap();
        assert_eq!(hex::encode(ct), "69c4e0d86a7b0430d8cdb78070b4c55a");
        assert_eq!(aes.decrypt_block(&ct).unwrap(), FIPS_PLAIN);
    }

    #[test]
    fn aes192_matches_fips197_appendix_c2() {
        let aes = Aes::new(&fips197_key(24)).unwrap();
        let ct = aes.encrypt_block(&FIPS_PLAIN).unwrap();
        assert_eq!(hex::encode(ct), "dda97ca4864cdfe06eaf70a0ec0d7191");
        assert_eq!(aes.decrypt_block(&ct).unwrap(), FIPS_PLAIN);
    }

    #[test]
    fn aes256_matches_fips197_appendix_c3() {
        let aes = Aes::new(&fips197_key(32)).unwrap();
        let ct = aes.encrypt_block(&FIPS_PLAIN).unwrap();
        assert_eq!(hex::encode(ct), "8ea2b7ca516745bfeafc49904b496089");
        assert_eq!(aes.decrypt_block(&ct).unwrap(), FIPS_PLAIN);
    }

    #[test]
    fn zero_key_zero_block_vector() {
        let aes = Aes::new(&[0u8; 16]).unwrap();
        let ct = aes.encrypt_block(&[0u8; 16]).unwrap();
        assert_eq!(hex::encode(ct), "66e94bd4ef8a2c3b884cfa59ca342b2e");
        assert_eq!(aes.decrypt_block(&ct).unwrap(), [0u8; 16]);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random_all_key_sizes() {
        let mut rng = rand::thread_rng();
        for key_len in [16usize, 24, 32] {
            for _ in 0..100 {
                let mut key = vec![0u8; key_len];
                let mut block = [0u8; 16];
                rng.fill_bytes(&mut key);
                rng.fill_bytes(&mut block);
                let aes = Aes::new(&key).unwrap();
                let ct = aes.encrypt_block(&block).unwrap();
                let pt = aes.decrypt_block(&ct).unwrap();
                assert_eq!(pt, block);
            }
        }
    }

    #[test]
    fn rejects_non_block_inputs() {
        let aes = Aes::new(&[0u8; 16]).unwrap();
        for length in [0usize, 1, 15, 17, 32] {
            let data = vec![0u8; length];
            assert_eq!(
                aes.encrypt_block(&data),
                Err(CipherError::BlockSizeMismatch { length })
            );
            assert_eq!(
                aes.decrypt_block(&data),
                Err(CipherError::BlockSizeMismatch { length })
            );
        }
    }

    #[test]
    fn avalanche_on_plaintext_bit_flip() {
        let mut rng = rand::thread_rng();
        let mut key = [0u8; 16];
        rng.fill_bytes(&mut key);
        let aes = Aes::new(&key).unwrap();

        let mut total_flipped = 0u32;
        let trials = 64;
        for _ in 0..trials {
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut block);
            let base = aes.encrypt_block(&block).unwrap();

            let mut flipped = block;
            flipped[0] ^= 0x01;
            let other = aes.encrypt_block(&flipped).unwrap();

            total_flipped += base
                .iter()
                .zip(other.iter())
                .map(|(a, b)| (a ^ b).count_ones())
                .sum::<u32>();
        }
        // 128 output bits per trial, ~50% expected to flip. Allow a wide
        // band; this is a sanity check, not a statistical proof.
        let average = f64::from(total_flipped) / f64::from(trials);
        assert!(
            (38.0..90.0).contains(&average),
            "average flipped bits {average} outside sanity band"
        );
    }
}
