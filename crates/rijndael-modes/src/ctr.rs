//! Counter mode.
//!
//! The block cipher encrypts a running counter to produce a keystream that
//! is XORed with the data, turning the block cipher into a stream cipher:
//! no padding, ciphertext length equals plaintext length, and encryption and
//! decryption are the same operation. The counter block starts at the
//! caller-supplied 16-byte IV and increments big-endian across the whole
//! block.
//!
//! As with CBC, a (key, IV) pair must never be reused across messages.

use rijndael_core::{Block, BlockCipher, CipherError, BLOCK_SIZE};

fn increment(counter: &mut Block) {
    for byte in counter.iter_mut().rev() {
        let (next, carry) = byte.overflowing_add(1);
        *byte = next;
        if !carry {
            break;
        }
    }
}

fn keystream_xor<C: BlockCipher>(
    cipher: &C,
    iv: &[u8],
    data: &[u8],
) -> Result<Vec<u8>, CipherError> {
    if iv.len() != BLOCK_SIZE {
        return Err(CipherError::IvLengthMismatch { length: iv.len() });
    }
    let mut counter = [0u8; BLOCK_SIZE];
    counter.copy_from_slice(iv);

    let mut output = Vec::with_capacity(data.len());
    for chunk in data.chunks(BLOCK_SIZE) {
        let keystream = cipher.encrypt_block(&counter)?;
        output.extend(chunk.iter().zip(keystream.iter()).map(|(d, k)| d ^ k));
        increment(&mut counter);
    }
    Ok(output)
}

/// Encrypts `plaintext` with a counter keystream starting at `iv`.
pub fn encrypt<C: BlockCipher>(
    cipher: &C,
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    keystream_xor(cipher, iv, plaintext)
}

/// Decrypts `ciphertext`; identical to encryption since XOR is self-inverse.
pub fn decrypt<C: BlockCipher>(
    cipher: &C,
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    keystream_xor(cipher, iv, ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;
    use rijndael_core::Aes;

    #[test]
    fn round_trips_and_preserves_length() {
        let mut rng = rand::thread_rng();
        let mut key = [0u8; 16];
        let mut iv = [0u8; 16];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut iv);
        let aes = Aes::new(&key).unwrap();
        for len in [0usize, 1, 15, 16, 17, 100] {
            let mut plaintext = vec![0u8; len];
            rng.fill_bytes(&mut plaintext);
            let ct = encrypt(&aes, &iv, &plaintext).unwrap();
            assert_eq!(ct.len(), len);
            assert_eq!(decrypt(&aes, &iv, &ct).unwrap(), plaintext);
        }
    }

    #[test]
    fn matches_sp800_38a_ctr_aes128() {
        let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
        let iv = hex::decode("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff").unwrap();
        let plaintext = hex::decode(
            "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51",
        )
        .unwrap();
        let aes = Aes::new(&key).unwrap();
        let ct = encrypt(&aes, &iv, &plaintext).unwrap();
        assert_eq!(
            hex::encode(&ct),
            "874d6191b620e3261bef6864990db6ce9806f66b7970fdff8617187bb9fffdff"
        );
    }

    #[test]
    fn counter_carry_propagates() {
        let mut counter = [0xffu8; 16];
        increment(&mut counter);
        assert_eq!(counter, [0u8; 16]);

        let mut counter = [0u8; 16];
        counter[15] = 0xff;
        increment(&mut counter);
        assert_eq!(counter[14], 0x01);
        assert_eq!(counter[15], 0x00);
    }

    #[test]
    fn rejects_bad_iv_length() {
        let aes = Aes::new(&[0u8; 16]).unwrap();
        assert_eq!(
            encrypt(&aes, &[0u8; 12], b"data"),
            Err(CipherError::IvLengthMismatch { length: 12 })
        );
    }
}
