//! Product-form polynomials `f1 * f2 + f3`

use zeroize::Zeroize;

use super::dense::IntPoly;
use super::ternary::TernPoly;
use crate::error::{validate, Result};

/// Product-form polynomial built from three sparse ternary factors sharing N
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct ProdPoly {
    f1: TernPoly,
    f2: TernPoly,
    f3: TernPoly,
}

impl ProdPoly {
    /// Combine three factors of the same ring degree
    pub fn new(f1: TernPoly, f2: TernPoly, f3: TernPoly) -> Result<Self> {
        validate::length("product-form factor f2", f2.n(), f1.n())?;
        validate::length("product-form factor f3", f3.n(), f1.n())?;
        Ok(Self { f1, f2, f3 })
    }

    /// Ring degree N
    pub fn n(&self) -> usize {
        self.f1.n()
    }

    /// First factor of the product
    pub fn f1(&self) -> &TernPoly {
        &self.f1
    }

    /// Second factor of the product
    pub fn f2(&self) -> &TernPoly {
        &self.f2
    }

    /// Additive factor
    pub fn f3(&self) -> &TernPoly {
        &self.f3
    }

    /// Expand `f1 * f2 + f3` to a dense polynomial reduced into `[0, modulus)`
    pub fn to_int_poly(&self, modulus: u32) -> Result<IntPoly> {
        let mut p = self
            .f1
            .to_int_poly()
            .mul_tern(&self.f2, modulus)?
            .add(&self.f3.to_int_poly())?;
        p.reduce(modulus)?;
        Ok(p)
    }
}
