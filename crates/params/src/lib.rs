//! Constant values for the ntruenc library
//!
//! Parameter sets are plain `const` records so they can be used in
//! `no_std` builds and in const contexts by the scheme crates.

#![cfg_attr(not(test), no_std)]

pub mod pqc;
pub mod utils;
