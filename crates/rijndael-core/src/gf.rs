//! Arithmetic in GF(2^8) with the AES reduction polynomial x^8 + x^4 + x^3 + x + 1.
//!
//! Everything here is const-evaluable so the S-box tables can be derived at
//! compile time.

/// Byte representation of the reduction polynomial (the low eight bits of 0x11b).
pub const REDUCTION_POLY: u8 = 0x1b;

/// Multiplies by x, reducing on overflow of the degree-7 bit.
#[inline]
pub const fn xtime(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 != 0 {
        shifted ^ REDUCTION_POLY
    } else {
        shifted
    }
}

/// Polynomial multiplication modulo the reduction polynomial.
pub const fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Multiplicative inverse, with `inv(0) == 0` so the S-box construction has a
/// total function to work with (zero has no true inverse).
///
/// Uses a^254 = a^-1, which holds for every non-zero element of GF(2^8).
pub const fn inv(a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    // a^254 via square-and-multiply over the exponent bits 0b11111110.
    let mut result = 1u8;
    let mut base = a;
    let mut exp = 254u8;
    while exp != 0 {
        if exp & 1 != 0 {
            result = mul(result, base);
        }
        base = mul(base, base);
        exp >>= 1;
    }
    result
}
