//! Coefficient packing and unpacking
//!
//! Coefficients are written least-significant bit first, each occupying
//! `bits` bits, concatenated in index order. The final byte is zero-padded.

use alloc::vec;
use alloc::vec::Vec;

use super::dense::IntPoly;
use crate::error::{validate, Result};

/// Number of bytes needed for `n` coefficients of `bits` bits each
pub fn packed_len(n: usize, bits: u32) -> usize {
    (n * bits as usize).div_ceil(8)
}

fn check_bits(bits: u32) -> Result<()> {
    validate::parameter((1..=16).contains(&bits), "bits per coefficient", "must be in 1..=16")
}

/// Coefficient width in bits, known to lie in `1..=16`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoeffBits(u32);

impl CoeffBits {
    /// Check `bits` and wrap it
    pub fn new(bits: u32) -> Result<Self> {
        check_bits(bits)?;
        Ok(Self(bits))
    }

    /// Width in bits
    pub fn get(self) -> u32 {
        self.0
    }
}

/// Pack the low `bits` bits of every coefficient
pub fn pack_coeffs(poly: &IntPoly, bits: u32) -> Result<Vec<u8>> {
    Ok(pack_with(poly, CoeffBits::new(bits)?))
}

/// Pack the low `bits` bits of every coefficient with a pre-checked width
pub fn pack_with(poly: &IntPoly, bits: CoeffBits) -> Vec<u8> {
    let bits = bits.get();
    let mask = (1u32 << bits) - 1;
    let mut out = vec![0u8; packed_len(poly.n(), bits)];

    let mut acc = 0u32;
    let mut acc_bits = 0u32;
    let mut pos = 0;
    for &c in poly.coeffs() {
        acc |= (c as u32 & mask) << acc_bits;
        acc_bits += bits;
        while acc_bits >= 8 {
            out[pos] = acc as u8;
            pos += 1;
            acc >>= 8;
            acc_bits -= 8;
        }
    }
    if acc_bits > 0 {
        out[pos] = acc as u8;
    }
    out
}

/// Unpack `n` coefficients of `bits` bits each, values in `[0, 2^bits)`
///
/// Padding bits in the final byte are ignored.
pub fn unpack_coeffs(bytes: &[u8], n: usize, bits: u32) -> Result<IntPoly> {
    check_bits(bits)?;
    validate::length("packed coefficients", bytes.len(), packed_len(n, bits))?;
    let mask = (1u32 << bits) - 1;
    let mut coeffs = Vec::with_capacity(n);

    let mut acc = 0u32;
    let mut acc_bits = 0u32;
    let mut bytes = bytes.iter();
    while coeffs.len() < n {
        while acc_bits < bits {
            // length was validated above, so a byte is always available here
            let b = bytes.next().copied().unwrap_or(0);
            acc |= (b as u32) << acc_bits;
            acc_bits += 8;
        }
        coeffs.push((acc & mask) as i32);
        acc >>= bits;
        acc_bits -= bits;
    }
    Ok(IntPoly::from_coeffs(coeffs))
}
