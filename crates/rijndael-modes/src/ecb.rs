//! Electronic codebook mode.
//!
//! Each block is encrypted independently, so identical plaintext blocks
//! produce identical ciphertext blocks under the same key. That determinism
//! leaks structure and is the documented weakness of the mode; it also makes
//! both directions trivially data-parallel.

use rijndael_core::{BlockCipher, CipherError, BLOCK_SIZE};

use crate::pkcs7;

/// Pads `plaintext` with PKCS#7 and encrypts each 16-byte block
/// independently. Output length is always a non-zero multiple of 16.
pub fn encrypt<C: BlockCipher>(cipher: &C, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
    let padded = pkcs7::pad(plaintext);
    let mut ciphertext = Vec::with_capacity(padded.len());
    for block in padded.chunks_exact(BLOCK_SIZE) {
        ciphertext.extend_from_slice(&cipher.encrypt_block(block)?);
    }
    Ok(ciphertext)
}

/// Decrypts each block independently, then strips the padding.
///
/// Ciphertext that is empty or not a multiple of 16 bytes fails with
/// [`CipherError::BlockSizeMismatch`] before any block is processed.
pub fn decrypt<C: BlockCipher>(cipher: &C, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::BlockSizeMismatch {
            length: ciphertext.len(),
        });
    }
    let mut padded = Vec::with_capacity(ciphertext.len());
    for block in ciphertext.chunks_exact(BLOCK_SIZE) {
        padded.extend_from_slice(&cipher.decrypt_block(block)?);
    }
    let plaintext = pkcs7::unpad(&padded)?;
    Ok(plaintext.to_vec())
}
