//! SHA-256 provider backed by the `sha2` crate

use ::sha2::{Digest, Sha256};
use alloc::vec::Vec;
use ntruenc_params::pqc::ntru::HashAlgorithm;

use super::HashFunction;

/// SHA-256 (scalar lanes)
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hash;

impl HashFunction for Sha256Hash {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha256
    }

    fn hash(&self, input: &[u8]) -> Vec<u8> {
        Sha256::digest(input).to_vec()
    }
}
