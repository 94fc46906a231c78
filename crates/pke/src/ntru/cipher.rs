//! SVES encryption and decryption
//!
//! Decryption evaluates every integrity check and folds the outcomes into one
//! [`Choice`]; a failure yields [`Error::DecryptionFailed`] whichever check
//! tripped.

use alloc::vec;
use alloc::vec::Vec;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};
use tracing::debug;
use zeroize::Zeroizing;

use ntruenc_algorithms::hash::HashFunction;
use ntruenc_algorithms::{pack_coeffs, unpack_coeffs, IntPoly};
use ntruenc_internal::{ct_eq_choice, ct_select};
use ntruenc_params::pqc::ntru::NtruEncParams;

use super::igf::generate_blinding_poly;
use super::keys::{Ciphertext, KeyPair, PublicKey};
use super::mgf::generate_mask;
use super::params::{ciphertext_len, max_msg_len, sves_len};
use super::sves::{from_sves, to_sves_checked};
use crate::error::{validate, Error, Result};

/// Blinding seed `oid || msg || b || h[..pklen/8]`
fn blinding_seed(params: &NtruEncParams, msg: &[u8], b: &[u8], packed_h: &[u8]) -> Zeroizing<Vec<u8>> {
    let htrunc = &packed_h[..params.pklen as usize / 8];
    let mut seed = Zeroizing::new(Vec::with_capacity(3 + msg.len() + b.len() + htrunc.len()));
    seed.extend_from_slice(&params.oid);
    seed.extend_from_slice(msg);
    seed.extend_from_slice(b);
    seed.extend_from_slice(htrunc);
    seed
}

/// Whether each of -1, 0 and 1 occurs at least `dm0` times
fn dm0_satisfied(p: &IntPoly, dm0: u16) -> Choice {
    [-1, 0, 1].iter().fold(Choice::from(1), |ok, &v| {
        ok & !(p.count(v) as u32).ct_lt(&(dm0 as u32))
    })
}

fn check_public_key(params: &NtruEncParams, public: &PublicKey) -> Result<()> {
    validate::key(
        public.n() == params.n as usize && public.q() == params.q,
        "public key does not match the parameter set",
    )
}

/// Encrypt `msg` to `public`
///
/// Candidates that fail the `maxm1` or `dm0` balance checks are discarded and
/// the attempt restarts with fresh randomness.
pub fn encrypt<R: RngCore + CryptoRng>(
    params: &NtruEncParams,
    public: &PublicKey,
    msg: &[u8],
    hash: &dyn HashFunction,
    rng: &mut R,
) -> Result<Ciphertext> {
    check_public_key(params, public)?;
    validate::message_length(msg.len(), max_msg_len(params))?;

    let n = params.n as usize;
    let q = params.q as u32;
    let skip = params.skips_constant_coeff();
    let packed_h = pack_coeffs(public.h(), params.log2_q())?;

    let mut attempt = 0u32;
    loop {
        attempt += 1;

        let mut b = Zeroizing::new(vec![0u8; params.db as usize / 8]);
        rng.try_fill_bytes(&mut b)
            .map_err(|_| Error::RandomGeneration("message randomness"))?;

        let mut m = Zeroizing::new(Vec::with_capacity(sves_len(params)));
        m.extend_from_slice(&b);
        m.push(msg.len() as u8);
        m.extend_from_slice(msg);
        m.resize(sves_len(params), 0);

        let seed = blinding_seed(params, msg, &b, &packed_h);
        let r = Zeroizing::new(generate_blinding_poly(&seed, params, hash)?);
        let big_r = Zeroizing::new(public.h().mul_priv(&r, q)?);

        let mask_seed = Zeroizing::new(pack_coeffs(&big_r, 2)?);
        let mask = Zeroizing::new(generate_mask(&mask_seed, params, hash));
        let mut mtrin = Zeroizing::new(from_sves(&m, n, skip)?.add(&mask)?);
        mtrin.mod3();

        if params.maxm1 > 0 {
            if mtrin.sum() > params.maxm1 as i64 {
                debug!(params = params.name, attempt, "candidate exceeds maxm1, retrying");
                continue;
            }
            mtrin.coeffs_mut()[0] = 0;
        }
        if !bool::from(dm0_satisfied(&mtrin, params.dm0)) {
            debug!(params = params.name, attempt, "candidate below dm0, retrying");
            continue;
        }

        let mut e = big_r.add(&mtrin)?;
        e.reduce(q)?;
        return Ok(Ciphertext::new(pack_coeffs(&e, params.log2_q())?));
    }
}

/// `((e * f) mod q centered) mod 3`, using `e * f = e + 3 * (e * t)`
fn recover_candidate(params: &NtruEncParams, kp: &KeyPair, e: &IntPoly) -> Result<Zeroizing<IntPoly>> {
    let q = params.q as u32;
    let mut ci = Zeroizing::new(e.mul_priv(kp.private().t(), q)?.scalar_mul(3).add(e)?);
    ci.mod_center(q)?;
    ci.mod3();
    Ok(ci)
}

/// Decrypt `ct` with `kp`
///
/// Fails with [`Error::DecryptionFailed`] if the recovered candidate is
/// unbalanced, the encoded length or padding is malformed, or re-encryption
/// does not reproduce the ciphertext.
pub fn decrypt(
    params: &NtruEncParams,
    kp: &KeyPair,
    ct: &[u8],
    hash: &dyn HashFunction,
) -> Result<Vec<u8>> {
    check_public_key(params, kp.public())?;
    validate::key(
        kp.private().t().is_product() == params.prod_flag,
        "private key shape does not match the parameter set",
    )?;
    validate::ciphertext_length(ct.len(), ciphertext_len(params))?;

    let n = params.n as usize;
    let q = params.q as u32;
    let db = params.db as usize / 8;
    let max_len = max_msg_len(params) as u8;

    let e = unpack_coeffs(ct, n, params.log2_q())?;
    let ci = recover_candidate(params, kp, &e)?;
    let mut ok = dm0_satisfied(&ci, params.dm0);

    let mut cr = Zeroizing::new(e.sub(&ci)?);
    cr.reduce(q)?;
    let mask_seed = Zeroizing::new(pack_coeffs(&cr, 2)?);
    let mask = Zeroizing::new(generate_mask(&mask_seed, params, hash));
    let mut cm = Zeroizing::new(ci.sub(&mask)?);
    cm.mod3();

    let (m, valid) = to_sves_checked(&cm, params.skips_constant_coeff());
    let m = Zeroizing::new(m);
    ok &= valid;

    let b = &m[..db];
    let declared = m[db];
    let len_ok = !declared.ct_gt(&max_len);
    ok &= len_ok;
    let len = ct_select(max_len, declared, len_ok);

    // everything after the message must be zero
    let body = &m[db + 1..];
    let mut pad = 0u8;
    for (i, &byte) in body.iter().enumerate() {
        let in_pad = !(i as u32).ct_lt(&(len as u32));
        pad |= u8::conditional_select(&0, &byte, in_pad);
    }
    ok &= pad.ct_eq(&0);
    let msg = &body[..len as usize];

    let packed_h = pack_coeffs(kp.public().h(), params.log2_q())?;
    let seed = blinding_seed(params, msg, b, &packed_h);
    let r = Zeroizing::new(generate_blinding_poly(&seed, params, hash)?);
    let r_check = Zeroizing::new(kp.public().h().mul_priv(&r, q)?);
    let expected = Zeroizing::new(pack_coeffs(&r_check, params.log2_q())?);
    let actual = Zeroizing::new(pack_coeffs(&cr, params.log2_q())?);
    ok &= ct_eq_choice(&*expected, &*actual);

    if bool::from(ok) {
        Ok(msg.to_vec())
    } else {
        debug!(params = params.name, "decryption failed");
        Err(Error::DecryptionFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ntru::keygen::generate_key_pair;
    use ntruenc_algorithms::hash::provider;
    use ntruenc_params::pqc::ntru::{EES401EP1, EES439EP1};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    /// Counts draws so retried encryption attempts become visible
    struct CountingRng {
        inner: ChaCha20Rng,
        fills: usize,
    }

    impl CountingRng {
        fn new(seed: u64) -> Self {
            Self {
                inner: ChaCha20Rng::seed_from_u64(seed),
                fills: 0,
            }
        }
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.inner.next_u32()
        }
        fn next_u64(&mut self) -> u64 {
            self.inner.next_u64()
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.fills += 1;
            self.inner.fill_bytes(dest)
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
            self.fills += 1;
            self.inner.try_fill_bytes(dest)
        }
    }

    impl CryptoRng for CountingRng {}

    /// Encrypt a run of messages under `params`, checking each round trip
    /// and the recovered candidate; returns whether any attempt was retried
    fn encrypt_batch(params: &NtruEncParams, seed: u64, check: impl Fn(&IntPoly)) -> bool {
        let hash = provider(params.hash);
        let kp = generate_key_pair(params, &mut ChaCha20Rng::seed_from_u64(seed)).unwrap();
        let mut rng = CountingRng::new(seed + 1);
        let mut retried = false;
        for i in 0..16u8 {
            let msg = [i; 24];
            let before = rng.fills;
            let ct = encrypt(params, kp.public(), &msg, hash, &mut rng).unwrap();
            retried |= rng.fills - before > 1;

            let e = unpack_coeffs(ct.as_bytes(), params.n as usize, params.log2_q()).unwrap();
            check(&recover_candidate(params, &kp, &e).unwrap());
            assert_eq!(decrypt(params, &kp, ct.as_bytes(), hash).unwrap(), msg);
        }
        retried
    }

    #[test]
    fn test_maxm1_rejects_and_retries() {
        let mut params = EES401EP1;
        params.maxm1 = 1;
        assert!(params.skips_constant_coeff());

        let retried = encrypt_batch(&params, 40, |ci| {
            assert_eq!(ci.coeffs()[0], 0);
            // coefficient 0 was at most -1 before it was cleared
            assert!(ci.sum() <= params.maxm1 as i64 + 1);
        });
        assert!(retried);
    }

    #[test]
    fn test_dm0_rejects_and_retries() {
        let mut params = EES401EP1;
        params.dm0 = 127;

        let retried = encrypt_batch(&params, 50, |ci| {
            assert_eq!(ci.coeffs()[0], 0);
            for v in [-1, 0, 1] {
                assert!(ci.count(v) >= params.dm0 as usize);
            }
        });
        assert!(retried);
    }

    #[test]
    fn test_constant_coeff_kept_without_maxm1() {
        assert!(!EES439EP1.skips_constant_coeff());
        let saw_nonzero = core::cell::Cell::new(false);
        encrypt_batch(&EES439EP1, 60, |ci| {
            saw_nonzero.set(saw_nonzero.get() || ci.coeffs()[0] != 0);
        });
        assert!(saw_nonzero.get());
    }
}
