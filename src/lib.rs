//! # ntruenc
//!
//! NTRUEncrypt public-key encryption (IEEE P1363.1 SVES) with ternary and
//! product-form private keys.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ntruenc = "0.3"
//! ```
//!
//! ```no_run
//! use ntruenc::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let ntru = NtruEncrypt::new(DEFAULT_PARAMS_128_BITS).unwrap();
//! let kp = ntru.generate_key_pair(&mut OsRng).unwrap();
//! let ct = ntru.encrypt(kp.public(), b"hello", &mut OsRng).unwrap();
//! assert_eq!(ntru.decrypt(&kp, ct.as_bytes()).unwrap(), b"hello");
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support; without it every crate
//!   builds as `no_std + alloc`
//! - `pke` (default): the encryption scheme
//! - `algorithms`: polynomial and hashing primitives
//! - `serde`: `Serialize` for parameter records
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ntruenc-api`]: error type and traits
//! - [`ntruenc-params`]: named parameter sets
//! - [`ntruenc-algorithms`]: polynomial arithmetic, bit buffer, hash providers
//! - [`ntruenc-pke`]: key generation, encryption, decryption

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use ntruenc_api as api;
pub use ntruenc_internal as internal;
pub use ntruenc_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use ntruenc_algorithms as algorithms;

#[cfg(feature = "pke")]
pub use ntruenc_pke as pke;

/// Common imports for ntruenc users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Pke, Serialize, SerializeSecret};

    // Parameter sets
    pub use crate::params::pqc::ntru::{
        HashAlgorithm, NtruEncParams, ALL_PARAMS, DEFAULT_PARAMS_112_BITS,
        DEFAULT_PARAMS_128_BITS, DEFAULT_PARAMS_192_BITS, DEFAULT_PARAMS_256_BITS,
    };

    #[cfg(feature = "pke")]
    pub use crate::pke::{
        Ciphertext, Ees401Ep2, Ees439Ep1, Ees593Ep1, Ees743Ep1, KeyPair, NtruEncrypt, PrivateKey,
        PublicKey,
    };
}
