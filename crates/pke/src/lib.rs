//! NTRUEncrypt public-key encryption for the ntruenc library
//!
//! The scheme follows IEEE P1363.1 SVES: index and mask generation from a
//! hash, a 3-bits-per-pair message encoding, and a re-encryption check on
//! decryption. Both ternary and product-form private keys are supported.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod ntru;

// Re-export key items
pub use error::{Error, Result};
pub use ntru::{
    Ciphertext, Ees1087Ep1, Ees1087Ep2, Ees1171Ep1, Ees1499Ep1, Ees401Ep1, Ees401Ep2, Ees439Ep1,
    Ees443Ep1, Ees449Ep1, Ees541Ep1, Ees587Ep1, Ees593Ep1, Ees613Ep1, Ees659Ep1, Ees677Ep1,
    Ees743Ep1, Ees761Ep1, Ees887Ep1, KeyPair, Ntru, NtruEncrypt, NtruParamSet, PrivateKey,
    PublicKey,
};
