//! SVES message encoding: bytes <-> ternary coefficient pairs
//!
//! Each 3-bit group of the message buffer (read least-significant bit first)
//! becomes two ternary coefficients. Eight of the nine coefficient pairs are
//! used; `(-1, -1)` never appears in an encoding.

use alloc::vec;
use alloc::vec::Vec;
use subtle::Choice;

use ntruenc_algorithms::IntPoly;

use crate::error::{Error, Result};

/// First coefficient of the pair for each 3-bit value
const COEFF1: [i32; 8] = [0, 0, 0, 1, 1, 1, -1, -1];
/// Second coefficient of the pair for each 3-bit value
const COEFF2: [i32; 8] = [0, 1, -1, 0, 1, -1, 0, 1];

/// Marks the pair `(-1, -1)` in [`PAIR_TO_BITS`]
const FORBIDDEN: u8 = 0xff;

/// 3-bit value for the pair `(c1, c2)`, indexed by `3 * (c1 + 1) + (c2 + 1)`
const PAIR_TO_BITS: [u8; 9] = [FORBIDDEN, 6, 7, 2, 0, 1, 5, 3, 4];

/// Number of coefficient pairs for ring degree `n`
fn pairs(n: usize, skip: bool) -> usize {
    n.saturating_sub(skip as usize) / 2
}

fn check_degree(n: usize) -> Result<()> {
    if n < 2 {
        return Err(Error::InvalidParameters("ring degree must be at least 2"));
    }
    Ok(())
}

/// Decode the message buffer `m` into a ternary polynomial of degree `n`
///
/// With `skip` the constant coefficient is left at zero and pairs start at
/// index 1. Coefficients past the last pair are zero. `m` must hold exactly
/// `ceil(3 * pairs / 8)` bytes.
pub fn from_sves(m: &[u8], n: usize, skip: bool) -> Result<IntPoly> {
    check_degree(n)?;
    let num_pairs = pairs(n, skip);
    if m.len() != (3 * num_pairs).div_ceil(8) {
        return Err(Error::InvalidParameters("encoded message buffer has the wrong length"));
    }

    let mut coeffs = vec![0i32; n];
    let mut acc = 0u32;
    let mut acc_bits = 0;
    let mut bytes = m.iter();
    let mut idx = skip as usize;
    for _ in 0..num_pairs {
        if acc_bits < 3 {
            acc |= (bytes.next().copied().unwrap_or(0) as u32) << acc_bits;
            acc_bits += 8;
        }
        let v = (acc & 7) as usize;
        acc >>= 3;
        acc_bits -= 3;
        coeffs[idx] = COEFF1[v];
        coeffs[idx + 1] = COEFF2[v];
        idx += 2;
    }
    Ok(IntPoly::from_coeffs(coeffs))
}

/// Encode a ternary polynomial back into message bytes
///
/// Returns the bytes together with a flag that is false if any pair was
/// `(-1, -1)` or held a non-ternary coefficient. Every pair is processed
/// either way.
pub(crate) fn to_sves_checked(p: &IntPoly, skip: bool) -> (Vec<u8>, Choice) {
    let num_pairs = pairs(p.n(), skip);
    let mut out = vec![0u8; (3 * num_pairs).div_ceil(8)];
    let mut valid = 1u8;

    let coeffs = &p.coeffs()[skip as usize..];
    let mut bit = 0;
    for pair in coeffs.chunks_exact(2).take(num_pairs) {
        let index = |c: i32| -> Option<usize> {
            (-1..=1).contains(&c).then(|| (c + 1) as usize)
        };
        let bits = match (index(pair[0]), index(pair[1])) {
            (Some(a), Some(b)) => PAIR_TO_BITS[3 * a + b],
            _ => FORBIDDEN,
        };
        valid &= (bits != FORBIDDEN) as u8;
        let v = (bits & 7) as u32 * (bits != FORBIDDEN) as u32;

        let word = v << (bit % 8);
        out[bit / 8] |= word as u8;
        if let Some(next) = out.get_mut(bit / 8 + 1) {
            *next |= (word >> 8) as u8;
        }
        bit += 3;
    }
    (out, Choice::from(valid))
}

/// Encode a ternary polynomial back into message bytes, failing on a
/// forbidden pair
pub fn to_sves(p: &IntPoly, skip: bool) -> Result<Vec<u8>> {
    check_degree(p.n())?;
    let (out, valid) = to_sves_checked(p, skip);
    if bool::from(valid) {
        Ok(out)
    } else {
        Err(Error::InvalidParameters("polynomial contains a forbidden coefficient pair"))
    }
}
