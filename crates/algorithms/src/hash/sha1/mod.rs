//! SHA-1 provider backed by the `sha1` crate

use ::sha1::{Digest, Sha1};
use alloc::vec::Vec;
use ntruenc_params::pqc::ntru::HashAlgorithm;

use super::HashFunction;

/// SHA-1 (scalar lanes)
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1Hash;

impl HashFunction for Sha1Hash {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha1
    }

    fn hash(&self, input: &[u8]) -> Vec<u8> {
        Sha1::digest(input).to_vec()
    }
}
