//! Shared constants for primitives used by the schemes

pub mod hash;
