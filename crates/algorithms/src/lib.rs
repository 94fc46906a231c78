//! Polynomial-ring and hashing primitives for the ntruenc library
//!
//! This crate provides the building blocks the NTRUEncrypt scheme is made
//! from: dense, ternary and product-form polynomials over Z[x]/(x^N - 1),
//! inversion modulo a power of two, coefficient packing, a bounded bit
//! string, and the hash capability used for index and mask generation.
//! The library is usable in both `std` and `no_std + alloc` environments.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Bit string
pub mod bits;
pub use bits::BitBuffer;

// Hash capability and providers
pub mod hash;
pub use hash::{HashFunction, Sha1Hash, Sha256Hash};

// Polynomial arithmetic
pub mod poly;
pub use poly::prelude::*;
