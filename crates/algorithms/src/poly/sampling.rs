//! Sampling of sparse ternary polynomials

use alloc::vec;
use alloc::vec::Vec;
use rand::{CryptoRng, RngCore};

use super::ternary::TernPoly;
use crate::error::{validate, Error, Result};

/// Build a ternary polynomial from an index source
///
/// Draws `num_ones` distinct positions for `+1`, then `num_neg_ones` for
/// `-1`; indices already taken are skipped. The source must yield values
/// below `n`.
pub fn sample_tern<E, F>(
    n: u16,
    num_ones: u16,
    num_neg_ones: u16,
    mut next_index: F,
) -> core::result::Result<TernPoly, E>
where
    F: FnMut() -> core::result::Result<u16, E>,
    E: From<Error>,
{
    validate::max_length(
        "ternary polynomial non-zero coefficients",
        num_ones as usize + num_neg_ones as usize,
        n as usize,
    )?;

    let mut used = vec![false; n as usize];
    let mut draw = |count: u16| -> core::result::Result<Vec<u16>, E> {
        let mut out = Vec::with_capacity(count as usize);
        while out.len() < count as usize {
            let i = next_index()?;
            let slot = used
                .get_mut(i as usize)
                .ok_or_else(|| Error::param("index source", "index out of range"))?;
            if !*slot {
                *slot = true;
                out.push(i);
            }
        }
        Ok(out)
    };

    let ones = draw(num_ones)?;
    let neg_ones = draw(num_neg_ones)?;
    Ok(TernPoly::new(n, ones, neg_ones)?)
}

/// Uniform index in `[0, n)` from two random bytes with rejection sampling
fn random_index<R: RngCore + CryptoRng>(n: u16, rng: &mut R) -> Result<u16> {
    let limit = (1u32 << 16) - (1u32 << 16) % n as u32;
    loop {
        let mut buf = [0u8; 2];
        rng.try_fill_bytes(&mut buf)
            .map_err(|_| Error::RandomGeneration { context: "ternary polynomial sampling" })?;
        let r = u16::from_le_bytes(buf) as u32;
        if r < limit {
            return Ok((r % n as u32) as u16);
        }
    }
}

/// Random ternary polynomial with the given numbers of `+1` and `-1`
/// coefficients
pub fn random_tern<R: RngCore + CryptoRng>(
    n: u16,
    num_ones: u16,
    num_neg_ones: u16,
    rng: &mut R,
) -> Result<TernPoly> {
    validate::parameter(n > 0, "ternary polynomial", "ring degree must be non-zero")?;
    sample_tern(n, num_ones, num_neg_ones, || random_index(n, rng))
}
