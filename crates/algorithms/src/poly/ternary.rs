//! Sparse ternary polynomials stored as index lists

use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroize;

use super::dense::IntPoly;
use crate::error::{validate, Error, Result};

/// Polynomial with coefficients in {-1, 0, 1}, stored as the positions of
/// the `+1` and `-1` coefficients
///
/// Indices are below `n`, unique, and the two sets are disjoint.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct TernPoly {
    n: u16,
    ones: Vec<u16>,
    neg_ones: Vec<u16>,
}

impl TernPoly {
    /// Build a ternary polynomial, validating the index sets
    pub fn new(n: u16, ones: Vec<u16>, neg_ones: Vec<u16>) -> Result<Self> {
        validate::parameter(n > 0, "ternary polynomial", "ring degree must be non-zero")?;
        validate::max_length(
            "ternary polynomial non-zero coefficients",
            ones.len() + neg_ones.len(),
            n as usize,
        )?;

        let mut seen = vec![false; n as usize];
        for &i in ones.iter().chain(neg_ones.iter()) {
            let slot = seen
                .get_mut(i as usize)
                .ok_or_else(|| Error::param("ternary polynomial", "index out of range"))?;
            if *slot {
                return Err(Error::param("ternary polynomial", "duplicate index"));
            }
            *slot = true;
        }

        Ok(Self { n, ones, neg_ones })
    }

    /// Ring degree N
    pub fn n(&self) -> usize {
        self.n as usize
    }

    /// Positions of the `+1` coefficients
    pub fn ones(&self) -> &[u16] {
        &self.ones
    }

    /// Positions of the `-1` coefficients
    pub fn neg_ones(&self) -> &[u16] {
        &self.neg_ones
    }

    /// Expand to a dense polynomial
    pub fn to_int_poly(&self) -> IntPoly {
        let mut p = IntPoly::zero(self.n());
        let coeffs = p.coeffs_mut();
        for &i in &self.ones {
            coeffs[i as usize] = 1;
        }
        for &i in &self.neg_ones {
            coeffs[i as usize] = -1;
        }
        p
    }
}

impl core::fmt::Debug for TernPoly {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TernPoly")
            .field("n", &self.n)
            .field("ones", &self.ones.len())
            .field("neg_ones", &self.neg_ones.len())
            .finish()
    }
}
