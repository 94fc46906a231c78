//! Public API traits and types for the ntruenc library
//!
//! This crate provides the public API surface shared by the scheme crates:
//! the error type returned across crate boundaries, validation helpers, and
//! the traits implemented by encryption schemes and their key types.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{Pke, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{pke, serialize};
