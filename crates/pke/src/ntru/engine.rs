//! Parameter-bound NTRUEncrypt engine

use alloc::vec::Vec;
use core::fmt;
use rand::{CryptoRng, RngCore};

use ntruenc_algorithms::hash::{provider, HashFunction};
use ntruenc_params::pqc::ntru::{NtruEncParams, ALL_PARAMS};

use super::keys::{Ciphertext, KeyPair, PrivateKey, PublicKey};
use super::params::{self, validate_params};
use super::{cipher, keygen};
use crate::error::{validate, Error, Result};

/// A validated parameter set together with the hash provider used for index
/// and mask generation
#[derive(Clone, Copy)]
pub struct NtruEncrypt {
    params: NtruEncParams,
    hash: &'static dyn HashFunction,
}

impl NtruEncrypt {
    /// Engine for `params` using the built-in hash provider
    pub fn new(params: NtruEncParams) -> Result<Self> {
        validate_params(&params)?;
        Ok(Self {
            params,
            hash: provider(params.hash),
        })
    }

    /// Engine for `params` using a caller-supplied hash provider
    ///
    /// The provider must compute the algorithm the parameter set names;
    /// batched backends are the intended use.
    pub fn with_hash(params: NtruEncParams, hash: &'static dyn HashFunction) -> Result<Self> {
        validate_params(&params)?;
        validate::parameters(
            hash.algorithm() == params.hash && hash.output_size() == params.hash_len(),
            "hash provider does not match the parameter set",
        )?;
        Ok(Self { params, hash })
    }

    /// Engine for the named parameter set a key pair was generated under
    pub fn from_key_pair(kp: &KeyPair) -> Result<Self> {
        let t = kp.private().t();
        let found = ALL_PARAMS.iter().find(|p| {
            let counts = [p.df1, p.df2, p.df3];
            p.n as usize == kp.private().n()
                && p.q == kp.private().q()
                && p.prod_flag == t.is_product()
                && t
                    .factors()
                    .zip(counts)
                    .all(|(f, d)| f.ones().len() == d as usize && f.neg_ones().len() == d as usize)
        });
        let params = found.ok_or(Error::InvalidKey("no parameter set matches the key pair"))?;
        Self::new(*params)
    }

    /// The parameter set
    pub fn params(&self) -> &NtruEncParams {
        &self.params
    }

    /// Hash provider used by the index and mask generators
    pub fn hash(&self) -> &'static dyn HashFunction {
        self.hash
    }

    /// Longest plaintext in bytes
    pub fn max_msg_len(&self) -> usize {
        params::max_msg_len(&self.params)
    }

    /// Ciphertext length in bytes
    pub fn ciphertext_len(&self) -> usize {
        params::ciphertext_len(&self.params)
    }

    /// Encoded public key length in bytes
    pub fn public_key_len(&self) -> usize {
        params::public_key_len(&self.params)
    }

    /// Encoded private key length in bytes
    pub fn private_key_len(&self) -> usize {
        params::private_key_len(&self.params)
    }

    /// Generate a fresh key pair
    pub fn generate_key_pair<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<KeyPair> {
        keygen::generate_key_pair(&self.params, rng)
    }

    /// Generate another public key for `private`
    pub fn generate_public_key<R: RngCore + CryptoRng>(
        &self,
        private: &PrivateKey,
        rng: &mut R,
    ) -> Result<PublicKey> {
        keygen::generate_public_key(&self.params, private, rng)
    }

    /// Encrypt `msg` to `public`
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        public: &PublicKey,
        msg: &[u8],
        rng: &mut R,
    ) -> Result<Ciphertext> {
        cipher::encrypt(&self.params, public, msg, self.hash, rng)
    }

    /// Decrypt `ct` with `kp`
    pub fn decrypt(&self, kp: &KeyPair, ct: &[u8]) -> Result<Vec<u8>> {
        cipher::decrypt(&self.params, kp, ct, self.hash)
    }
}

impl fmt::Debug for NtruEncrypt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NtruEncrypt")
            .field("params", &self.params.name)
            .field("hash", &self.hash.algorithm())
            .finish()
    }
}
