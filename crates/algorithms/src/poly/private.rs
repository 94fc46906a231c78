//! Private trapdoor polynomial `t`

use zeroize::Zeroize;

use super::dense::IntPoly;
use super::product::ProdPoly;
use super::ternary::TernPoly;
use crate::error::Result;

/// The private polynomial in one of its two storage shapes
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub enum PrivPoly {
    /// A single sparse ternary polynomial
    Ternary(TernPoly),
    /// Three sparse factors combined as `f1 * f2 + f3`
    Product(ProdPoly),
}

impl PrivPoly {
    /// Ring degree N
    pub fn n(&self) -> usize {
        match self {
            PrivPoly::Ternary(t) => t.n(),
            PrivPoly::Product(p) => p.n(),
        }
    }

    /// Whether the polynomial is stored in product form
    pub fn is_product(&self) -> bool {
        matches!(self, PrivPoly::Product(_))
    }

    /// The ternary factors in storage order
    pub fn factors(&self) -> impl Iterator<Item = &TernPoly> {
        let (a, b, c) = match self {
            PrivPoly::Ternary(t) => (Some(t), None, None),
            PrivPoly::Product(p) => (Some(p.f1()), Some(p.f2()), Some(p.f3())),
        };
        a.into_iter().chain(b).chain(c)
    }

    /// Expand to a dense polynomial reduced into `[0, modulus)`
    pub fn to_int_poly(&self, modulus: u32) -> Result<IntPoly> {
        match self {
            PrivPoly::Ternary(t) => {
                let mut p = t.to_int_poly();
                p.reduce(modulus)?;
                Ok(p)
            }
            PrivPoly::Product(p) => p.to_int_poly(modulus),
        }
    }
}
