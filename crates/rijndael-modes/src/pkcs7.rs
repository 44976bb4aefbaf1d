//! PKCS#7 byte padding.

use rijndael_core::{CipherError, BLOCK_SIZE};

/// Pads `data` to a multiple of the block size by appending N bytes of value
/// N, where N = 16 - (len mod 16).
///
/// Padding is never empty: an already-aligned input (including the empty
/// input) gains a full block of value 16, so unpadding is unambiguous.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Strips PKCS#7 padding, validating every padding byte.
///
/// The final byte N must satisfy 1 <= N <= 16 and the last N bytes must all
/// equal N; anything else fails with [`CipherError::InvalidPadding`] rather
/// than silently truncating.
pub fn unpad(data: &[u8]) -> Result<&[u8], CipherError> {
    if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::InvalidPadding);
    }
    let pad_len = usize::from(data[data.len() - 1]);
    if pad_len == 0 || pad_len > BLOCK_SIZE {
        return Err(CipherError::InvalidPadding);
    }
    let (body, padding) = data.split_at(data.len() - pad_len);
    if padding.iter().any(|&b| usize::from(b) != pad_len) {
        return Err(CipherError::InvalidPadding);
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_round_trips_all_short_lengths() {
        for len in 0..=48usize {
            let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let padded = pad(&data);
            assert_eq!(padded.len() % BLOCK_SIZE, 0);
            assert!(!padded.is_empty());
            assert_eq!(unpad(&padded).unwrap(), &data[..]);
        }
    }

    #[test]
    fn empty_input_pads_to_one_full_block() {
        let padded = pad(&[]);
        assert_eq!(padded, vec![16u8; 16]);
        assert_eq!(unpad(&padded).unwrap(), &[] as &[u8]);
    }

    #[test]
    fn aligned_input_gains_a_whole_block() {
        let data = [0xabu8; 16];
        let padded = pad(&data);
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[16..], &[16u8; 16]);
    }

    #[test]
    fn rejects_inconsistent_padding() {
        let mut block = [4u8; 16];
        block[13] = 3; // inside the claimed padding run
        assert_eq!(unpad(&block), Err(CipherError::InvalidPadding));
    }

    #[test]
    fn rejects_out_of_range_pad_byte() {
        let mut block = [0u8; 16];
        block[15] = 0;
        assert_eq!(unpad(&block), Err(CipherError::InvalidPadding));
        block[15] = 17;
        assert_eq!(unpad(&block), Err(CipherError::InvalidPadding));
    }

    #[test]
    fn rejects_empty_and_misaligned_input() {
        assert_eq!(unpad(&[]), Err(CipherError::InvalidPadding));
        assert_eq!(unpad(&[3u8; 15]), Err(CipherError::InvalidPadding));
    }
}
