//! Polynomial arithmetic in Z[x]/(x^N - 1)
//!
//! Three representations are provided: dense [`IntPoly`] for public values
//! and intermediates, sparse [`TernPoly`] for ternary polynomials, and
//! [`ProdPoly`] for product-form private keys. [`PrivPoly`] tags which of the
//! sparse shapes a private key uses.

pub mod dense;
pub mod inverse;
pub mod private;
pub mod product;
pub mod sampling;
pub mod serialize;
pub mod ternary;

/// Prelude for easy importing of common polynomial types and functions.
pub mod prelude {
    pub use super::dense::IntPoly;
    pub use super::inverse::{invert, invert_mod2, invert_private};
    pub use super::private::PrivPoly;
    pub use super::product::ProdPoly;
    pub use super::sampling::{random_tern, sample_tern};
    pub use super::serialize::{pack_coeffs, pack_with, packed_len, unpack_coeffs, CoeffBits};
    pub use super::ternary::TernPoly;
}
