//! Hash capability used by the index and mask generation functions
//!
//! Components receive a `&dyn HashFunction` rather than consulting global
//! state, so a batched backend can be injected without touching callers.
//! The 4-way and 8-way forms must return, lane for lane, exactly what the
//! scalar form returns.

use alloc::vec::Vec;
use ntruenc_params::pqc::ntru::HashAlgorithm;

pub mod sha1;
pub mod sha2;

pub use self::sha1::Sha1Hash;
pub use self::sha2::Sha256Hash;

/// A hash function with optional multi-lane batching
pub trait HashFunction: Send + Sync {
    /// Which algorithm this provider computes
    fn algorithm(&self) -> HashAlgorithm;

    /// Digest length in bytes
    fn output_size(&self) -> usize {
        self.algorithm().output_size()
    }

    /// Hash a single input
    fn hash(&self, input: &[u8]) -> Vec<u8>;

    /// Hash four independent inputs
    fn hash_4way(&self, inputs: [&[u8]; 4]) -> [Vec<u8>; 4] {
        inputs.map(|input| self.hash(input))
    }

    /// Hash eight independent inputs
    fn hash_8way(&self, inputs: [&[u8]; 8]) -> [Vec<u8>; 8] {
        inputs.map(|input| self.hash(input))
    }
}

/// The built-in provider for `algorithm`
pub fn provider(algorithm: HashAlgorithm) -> &'static dyn HashFunction {
    match algorithm {
        HashAlgorithm::Sha1 => &Sha1Hash,
        HashAlgorithm::Sha256 => &Sha256Hash,
    }
}

/// Append `H(seed || u16le(counter))` for `count` consecutive counters
/// starting at `first` to `out`, returning the next unused counter
///
/// Blocks are hashed eight, then four lanes at a time where possible; the
/// output is identical to hashing every counter individually.
pub fn hash_counter_blocks(
    hash: &dyn HashFunction,
    seed: &[u8],
    first: u16,
    count: usize,
    out: &mut Vec<u8>,
) -> u16 {
    let input = |counter: u16| -> Vec<u8> {
        let mut v = Vec::with_capacity(seed.len() + 2);
        v.extend_from_slice(seed);
        v.extend_from_slice(&counter.to_le_bytes());
        v
    };

    let mut counter = first;
    let mut remaining = count;
    while remaining >= 8 {
        let lanes: [Vec<u8>; 8] = core::array::from_fn(|i| input(counter.wrapping_add(i as u16)));
        for digest in hash.hash_8way(lanes.each_ref().map(|v| v.as_slice())) {
            out.extend_from_slice(&digest);
        }
        counter = counter.wrapping_add(8);
        remaining -= 8;
    }
    if remaining >= 4 {
        let lanes: [Vec<u8>; 4] = core::array::from_fn(|i| input(counter.wrapping_add(i as u16)));
        for digest in hash.hash_4way(lanes.each_ref().map(|v| v.as_slice())) {
            out.extend_from_slice(&digest);
        }
        counter = counter.wrapping_add(4);
        remaining -= 4;
    }
    for _ in 0..remaining {
        out.extend_from_slice(&hash.hash(&input(counter)));
        counter = counter.wrapping_add(1);
    }
    counter
}
