//! NTRUEncrypt with SVES message encoding
//!
//! [`NtruEncrypt`] binds a runtime parameter set to a hash provider.
//! [`Ntru`] fixes the parameter set at compile time and implements the
//! [`Pke`] trait; aliases such as [`Ees401Ep2`] name the standard sets.

use alloc::vec::Vec;
use core::marker::PhantomData;
use rand::{CryptoRng, RngCore};

use ntruenc_api::error::validate;
use ntruenc_api::{Pke, Result as ApiResult};

mod cipher;
mod engine;
pub mod igf;
mod keygen;
mod keys;
pub mod mgf;
mod params;
pub mod sves;

pub use engine::NtruEncrypt;
pub use keys::{Ciphertext, KeyPair, PrivateKey, PublicKey};
pub use params::*;

/// NTRUEncrypt over the parameter set `P`
#[derive(Debug, Clone, Copy)]
pub struct Ntru<P: NtruParamSet> {
    _params: PhantomData<P>,
}

impl<P: NtruParamSet> Ntru<P> {
    /// Engine for `P` with the built-in hash provider
    pub fn engine() -> crate::Result<NtruEncrypt> {
        NtruEncrypt::new(P::PARAMS)
    }
}

impl<P: NtruParamSet> Pke for Ntru<P> {
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;
    type KeyPair = KeyPair;
    type Ciphertext = Ciphertext;

    fn name() -> &'static str {
        P::PARAMS.name
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        Ok(Self::engine()?.generate_key_pair(rng)?)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public().clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.private().clone()
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        validate::max_length("NTRUEncrypt plaintext", plaintext.len(), max_msg_len(&P::PARAMS))?;
        Ok(Self::engine()?.encrypt(pk_recipient, plaintext, rng)?)
    }

    fn decrypt(keypair: &Self::KeyPair, ciphertext: &Self::Ciphertext) -> ApiResult<Vec<u8>> {
        validate::length(
            "NTRUEncrypt ciphertext",
            ciphertext.as_bytes().len(),
            ciphertext_len(&P::PARAMS),
        )?;
        Ok(Self::engine()?.decrypt(keypair, ciphertext.as_bytes())?)
    }
}

pub type Ees401Ep1 = Ntru<Ees401Ep1Params>;
pub type Ees449Ep1 = Ntru<Ees449Ep1Params>;
pub type Ees677Ep1 = Ntru<Ees677Ep1Params>;
pub type Ees1087Ep2 = Ntru<Ees1087Ep2Params>;
pub type Ees541Ep1 = Ntru<Ees541Ep1Params>;
pub type Ees613Ep1 = Ntru<Ees613Ep1Params>;
pub type Ees887Ep1 = Ntru<Ees887Ep1Params>;
pub type Ees1171Ep1 = Ntru<Ees1171Ep1Params>;
pub type Ees659Ep1 = Ntru<Ees659Ep1Params>;
pub type Ees761Ep1 = Ntru<Ees761Ep1Params>;
pub type Ees1087Ep1 = Ntru<Ees1087Ep1Params>;
pub type Ees1499Ep1 = Ntru<Ees1499Ep1Params>;
pub type Ees401Ep2 = Ntru<Ees401Ep2Params>;
pub type Ees439Ep1 = Ntru<Ees439Ep1Params>;
pub type Ees443Ep1 = Ntru<Ees443Ep1Params>;
pub type Ees593Ep1 = Ntru<Ees593Ep1Params>;
pub type Ees587Ep1 = Ntru<Ees587Ep1Params>;
pub type Ees743Ep1 = Ntru<Ees743Ep1Params>;
