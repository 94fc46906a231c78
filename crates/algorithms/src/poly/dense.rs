//! Dense integer polynomials over Z[x]/(x^N - 1)

use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroize;

use super::private::PrivPoly;
use super::product::ProdPoly;
use super::ternary::TernPoly;
use crate::error::{validate, Result};

/// Polynomial with arbitrary signed coefficients, index 0 is the constant term
///
/// Coefficients stay unreduced until one of the reduction methods is called.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct IntPoly {
    coeffs: Vec<i32>,
}

/// Reduce a wide accumulator into `[0, modulus)`
#[inline]
pub(crate) fn reduce_coeff(v: i64, modulus: u32) -> i32 {
    if modulus.is_power_of_two() {
        (v & (modulus as i64 - 1)) as i32
    } else {
        v.rem_euclid(modulus as i64) as i32
    }
}

/// Largest modulus the arithmetic accepts; reduced products then fit an `i64`
/// accumulator for any ring degree
pub const MAX_MODULUS: u32 = 1 << 16;

#[inline]
pub(crate) fn check_modulus(modulus: u32) -> Result<()> {
    validate::parameter(
        (2..=MAX_MODULUS).contains(&modulus),
        "modulus",
        "must be in 2..=65536",
    )
}

impl IntPoly {
    /// The zero polynomial of ring degree `n`
    pub fn zero(n: usize) -> Self {
        Self { coeffs: vec![0; n] }
    }

    /// The constant polynomial 1 of ring degree `n`
    pub fn one(n: usize) -> Self {
        let mut p = Self::zero(n);
        if let Some(c) = p.coeffs.first_mut() {
            *c = 1;
        }
        p
    }

    /// Wrap a coefficient vector; its length is the ring degree
    pub fn from_coeffs(coeffs: Vec<i32>) -> Self {
        Self { coeffs }
    }

    /// Ring degree N
    pub fn n(&self) -> usize {
        self.coeffs.len()
    }

    /// Coefficients in increasing power order
    pub fn coeffs(&self) -> &[i32] {
        &self.coeffs
    }

    /// Mutable access to the coefficients
    pub fn coeffs_mut(&mut self) -> &mut [i32] {
        &mut self.coeffs
    }

    fn check_same_n(&self, other_n: usize) -> Result<()> {
        validate::length("polynomial ring degree", other_n, self.n())
    }

    /// Coefficient-wise sum
    pub fn add(&self, other: &IntPoly) -> Result<IntPoly> {
        self.check_same_n(other.n())?;
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(a, b)| a.wrapping_add(*b))
            .collect();
        Ok(IntPoly { coeffs })
    }

    /// Coefficient-wise difference
    pub fn sub(&self, other: &IntPoly) -> Result<IntPoly> {
        self.check_same_n(other.n())?;
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(a, b)| a.wrapping_sub(*b))
            .collect();
        Ok(IntPoly { coeffs })
    }

    /// Multiply every coefficient by `factor`
    pub fn scalar_mul(&self, factor: i32) -> IntPoly {
        IntPoly {
            coeffs: self.coeffs.iter().map(|c| c.wrapping_mul(factor)).collect(),
        }
    }

    /// Cyclic convolution `self * other mod (x^N - 1)`, coefficients reduced
    /// into `[0, modulus)`
    pub fn mul(&self, other: &IntPoly, modulus: u32) -> Result<IntPoly> {
        self.check_same_n(other.n())?;
        check_modulus(modulus)?;

        let n = self.n();
        let a = self.reduced(modulus);
        let mut acc = vec![0i64; n];
        for (i, b) in other.reduced(modulus).into_iter().enumerate() {
            if b == 0 {
                continue;
            }
            for (j, &x) in a.iter().enumerate() {
                let k = if i + j >= n { i + j - n } else { i + j };
                acc[k] += x * b;
            }
        }
        Ok(Self::from_acc(acc, modulus))
    }

    /// Multiply by a sparse ternary polynomial, O(N * (ones + neg_ones))
    pub fn mul_tern(&self, b: &TernPoly, modulus: u32) -> Result<IntPoly> {
        self.check_same_n(b.n())?;
        check_modulus(modulus)?;

        let a = self.reduced(modulus);
        let mut acc = vec![0i64; self.n()];
        accumulate_shifted(&a, &mut acc, b.ones(), 1);
        accumulate_shifted(&a, &mut acc, b.neg_ones(), -1);
        Ok(Self::from_acc(acc, modulus))
    }

    /// Multiply by a product-form polynomial: `(self * f1) * f2 + self * f3`
    pub fn mul_prod(&self, b: &ProdPoly, modulus: u32) -> Result<IntPoly> {
        let f1f2 = self.mul_tern(b.f1(), modulus)?.mul_tern(b.f2(), modulus)?;
        let f3 = self.mul_tern(b.f3(), modulus)?;
        let mut c = f1f2.add(&f3)?;
        c.reduce(modulus)?;
        Ok(c)
    }

    /// Multiply by a private polynomial of either shape
    pub fn mul_priv(&self, b: &PrivPoly, modulus: u32) -> Result<IntPoly> {
        match b {
            PrivPoly::Ternary(t) => self.mul_tern(t, modulus),
            PrivPoly::Product(p) => self.mul_prod(p, modulus),
        }
    }

    /// Coefficients reduced into `[0, modulus)`, widened for accumulation
    fn reduced(&self, modulus: u32) -> Vec<i64> {
        self.coeffs
            .iter()
            .map(|&c| reduce_coeff(c as i64, modulus) as i64)
            .collect()
    }

    fn from_acc(acc: Vec<i64>, modulus: u32) -> IntPoly {
        IntPoly {
            coeffs: acc.into_iter().map(|v| reduce_coeff(v, modulus)).collect(),
        }
    }

    /// Reduce every coefficient into `[0, modulus)`
    ///
    /// Powers of two are reduced with a mask, anything else with a floor
    /// remainder.
    pub fn reduce(&mut self, modulus: u32) -> Result<()> {
        check_modulus(modulus)?;
        for c in self.coeffs.iter_mut() {
            *c = reduce_coeff(*c as i64, modulus);
        }
        Ok(())
    }

    /// Reduce every coefficient into `[-modulus/2, modulus/2)`
    pub fn mod_center(&mut self, modulus: u32) -> Result<()> {
        check_modulus(modulus)?;
        let half = (modulus / 2) as i32;
        let m = modulus as i64;
        for c in self.coeffs.iter_mut() {
            let r = (*c as i64).rem_euclid(m) as i32;
            *c = if r >= half { (r as i64 - m) as i32 } else { r };
        }
        Ok(())
    }

    /// Reduce every coefficient to its balanced representative in {-1, 0, 1}
    pub fn mod3(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = match c.rem_euclid(3) {
                0 => 0,
                1 => 1,
                _ => -1,
            };
        }
    }

    /// Number of coefficients equal to `value`
    pub fn count(&self, value: i32) -> usize {
        self.coeffs.iter().filter(|&&c| c == value).count()
    }

    /// Sum of all coefficients
    pub fn sum(&self) -> i64 {
        self.coeffs.iter().map(|&c| c as i64).sum()
    }

    /// Index of the highest non-zero coefficient, `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|&c| c != 0)
    }

    /// Whether every coefficient is zero
    pub fn equals_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Whether this is the constant polynomial 1
    pub fn equals_one(&self) -> bool {
        match self.coeffs.split_first() {
            Some((&first, rest)) => first == 1 && rest.iter().all(|&c| c == 0),
            None => false,
        }
    }

    /// Coefficient equality after reducing both sides modulo `modulus`
    pub fn equals_mod(&self, other: &IntPoly, modulus: u32) -> bool {
        modulus >= 2
            && self.n() == other.n()
            && self
                .coeffs
                .iter()
                .zip(&other.coeffs)
                .all(|(&a, &b)| reduce_coeff(a as i64, modulus) == reduce_coeff(b as i64, modulus))
    }
}

/// Add `sign * a * x^k` into `acc` for every `k` in `indices`
fn accumulate_shifted(a: &[i64], acc: &mut [i64], indices: &[u16], sign: i64) {
    let n = a.len();
    for &k in indices {
        let k = k as usize;
        for (j, &c) in a[..n - k].iter().enumerate() {
            acc[j + k] += sign * c;
        }
        for (j, &c) in a[n - k..].iter().enumerate() {
            acc[j] += sign * c;
        }
    }
}
