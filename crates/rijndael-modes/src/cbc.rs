//! Cipher block chaining mode.
//!
//! Each plaintext block is XORed with the previous ciphertext block (the IV
//! for the first) before encryption, so equal plaintext blocks no longer
//! produce equal ciphertext. Encryption is strictly sequential per chain;
//! decryption of any block needs only that block and its predecessor.
//!
//! The IV must never be reused with the same key across independent
//! messages. That is a caller precondition, not something this layer can
//! check.

use rijndael_core::{xor_in_place, Block, BlockCipher, CipherError, BLOCK_SIZE};

use crate::pkcs7;

fn check_iv(iv: &[u8]) -> Result<Block, CipherError> {
    if iv.len() != BLOCK_SIZE {
        return Err(CipherError::IvLengthMismatch { length: iv.len() });
    }
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(iv);
    Ok(block)
}

/// Pads `plaintext` with PKCS#7 and encrypts it in CBC mode under the given
/// 16-byte IV.
pub fn encrypt<C: BlockCipher>(
    cipher: &C,
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    let mut chain = check_iv(iv)?;
    let padded = pkcs7::pad(plaintext);
    let mut ciphertext = Vec::with_capacity(padded.len());
    for chunk in padded.chunks_exact(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        xor_in_place(&mut block, &chain);
        chain = cipher.encrypt_block(&block)?;
        ciphertext.extend_from_slice(&chain);
    }
    Ok(ciphertext)
}

/// Decrypts CBC ciphertext and strips the padding.
///
/// Fails with [`CipherError::BlockSizeMismatch`] on empty or misaligned
/// ciphertext, [`CipherError::IvLengthMismatch`] on a non-16-byte IV, and
/// [`CipherError::InvalidPadding`] when the recovered padding is
/// inconsistent (e.g. wrong key or tampered ciphertext).
pub fn decrypt<C: BlockCipher>(
    cipher: &C,
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    let mut chain = check_iv(iv)?;
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::BlockSizeMismatch {
            length: ciphertext.len(),
        });
    }
    let mut padded = Vec::with_capacity(ciphertext.len());
    for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
        let mut block = cipher.decrypt_block(chunk)?;
        xor_in_place(&mut block, &chain);
        padded.extend_from_slice(&block);
        chain.copy_from_slice(chunk);
    }
    let plaintext = pkcs7::unpad(&padded)?;
    Ok(plaintext.to_vec())
}
