//! Constants for post-quantum cryptographic algorithms

pub mod ntru;
