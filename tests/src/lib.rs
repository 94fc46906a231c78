//! Shared helpers for the ntruenc integration tests

use ntruenc_params::pqc::ntru::NtruEncParams;
use ntruenc_pke::{KeyPair, NtruEncrypt};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG for reproducible test runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Engine and a fresh key pair for `params`
pub fn engine_with_keys(params: NtruEncParams, seed: u64) -> (NtruEncrypt, KeyPair) {
    let ntru = NtruEncrypt::new(params).expect("named parameter sets are valid");
    let kp = ntru
        .generate_key_pair(&mut seeded_rng(seed))
        .expect("key generation succeeds");
    (ntru, kp)
}

/// Message of `len` bytes whose content depends on `len`
pub fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + len) as u8).collect()
}

/// RNG whose fallible interface always reports an error
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0)
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::from(
            core::num::NonZeroU32::new(rand::Error::CUSTOM_START).expect("non-zero code"),
        ))
    }
}

impl CryptoRng for FailingRng {}
