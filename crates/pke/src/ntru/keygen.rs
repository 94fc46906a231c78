//! Key generation

use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use ntruenc_algorithms::{invert, invert_private, random_tern, IntPoly, PrivPoly, ProdPoly};
use ntruenc_params::pqc::ntru::NtruEncParams;

use super::keys::{KeyPair, PrivateKey, PublicKey};
use crate::error::{validate, Error, Result};

/// Sample a private polynomial `t` of the shape the parameter set asks for
fn random_private<R: RngCore + CryptoRng>(params: &NtruEncParams, rng: &mut R) -> Result<PrivPoly> {
    let n = params.n;
    let t = if params.prod_flag {
        PrivPoly::Product(ProdPoly::new(
            random_tern(n, params.df1, params.df1, rng)?,
            random_tern(n, params.df2, params.df2, rng)?,
            random_tern(n, params.df3, params.df3, rng)?,
        )?)
    } else {
        PrivPoly::Ternary(random_tern(n, params.df1, params.df1, rng)?)
    };
    Ok(t)
}

/// `h = 3 * g * fq mod q` for a fresh invertible `g`
fn public_from_inverse<R: RngCore + CryptoRng>(
    params: &NtruEncParams,
    fq: &IntPoly,
    rng: &mut R,
) -> Result<PublicKey> {
    let q = params.q as u32;
    let mut attempt = 0u32;
    let g = loop {
        attempt += 1;
        let g = Zeroizing::new(random_tern(params.n, params.dg, params.dg - 1, rng)?);
        let g_dense = Zeroizing::new(g.to_int_poly());
        if invert(&g_dense, q)?.map(Zeroizing::new).is_some() {
            break g;
        }
        debug!(params = params.name, attempt, "g not invertible, resampling");
    };

    let mut h = fq.mul_tern(&g, q)?.scalar_mul(3);
    h.reduce(q)?;
    PublicKey::new(params.q, h)
}

/// Generate a key pair for `params`
///
/// Resamples `t` until `f = 1 + 3t` is invertible mod q and `g` until it is
/// invertible mod q. RNG failures abort the attempt.
pub fn generate_key_pair<R: RngCore + CryptoRng>(
    params: &NtruEncParams,
    rng: &mut R,
) -> Result<KeyPair> {
    let q = params.q as u32;
    let mut attempt = 0u32;
    let (t, fq) = loop {
        attempt += 1;
        let t = Zeroizing::new(random_private(params, rng)?);
        if let Some(fq) = invert_private(&t, q)? {
            break (t, Zeroizing::new(fq));
        }
        debug!(params = params.name, attempt, "f = 1 + 3t not invertible, resampling");
    };

    let public = public_from_inverse(params, &fq, rng)?;
    KeyPair::new(PrivateKey::new(params.q, (*t).clone()), public)
}

/// A further public key for an existing private key
///
/// Every public key produced this way decrypts with `private`.
pub fn generate_public_key<R: RngCore + CryptoRng>(
    params: &NtruEncParams,
    private: &PrivateKey,
    rng: &mut R,
) -> Result<PublicKey> {
    validate::key(
        private.n() == params.n as usize && private.q() == params.q,
        "private key does not match the parameter set",
    )?;
    let fq = invert_private(private.t(), params.q as u32)?
        .map(Zeroizing::new)
        .ok_or(Error::InvalidKey("f = 1 + 3t is not invertible"))?;
    public_from_inverse(params, &fq, rng)
}
