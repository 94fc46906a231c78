//! Key and ciphertext types with their wire encodings
//!
//! Public key: `N:u16 || q:u16 || h` with h packed `log2(q)` bits per
//! coefficient. Private key: `N:u16 || q:u16 || flags:u8` followed by one
//! (ternary) or three (product form) factor blocks
//! `ones:u16 || neg_ones:u16 || ones indices || neg_ones indices`.
//! All integers are big-endian.

use alloc::vec::Vec;
use byteorder::{BigEndian, ByteOrder};
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use ntruenc_algorithms::{pack_with, packed_len, unpack_coeffs, CoeffBits, IntPoly, PrivPoly, ProdPoly, TernPoly};
use ntruenc_api::error::{validate as api_validate, ResultExt};
use ntruenc_api::{Result as ApiResult, Serialize, SerializeSecret};
use ntruenc_internal::ct_eq;
use ntruenc_params::pqc::ntru::{MAX_N, MAX_ONES};

use crate::error::{validate, Error, Result};

/// Low flag bits, always set
const FLAGS_RESERVED: u8 = 0b11;
/// Flag bit marking a product-form private key
const FLAG_PRODUCT_FORM: u8 = 0b100;

/// `N || q`
const PUBLIC_HEADER_LEN: usize = 4;
/// `N || q || flags`
const PRIVATE_HEADER_LEN: usize = 5;

fn put_u16(out: &mut Vec<u8>, v: u16) {
    let mut b = [0u8; 2];
    BigEndian::write_u16(&mut b, v);
    out.extend_from_slice(&b);
}

/// Bounds-checked cursor over an encoded key
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(len).filter(|&end| end <= self.bytes.len());
        let end = end.ok_or(Error::InvalidKey("encoded key is truncated"))?;
        let out = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(out)
    }

    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.take(2)?))
    }

    fn finish(self) -> Result<()> {
        validate::key(self.pos == self.bytes.len(), "trailing bytes after encoded key")
    }
}

/// Read and check the `N || q` header shared by both key encodings
fn read_header(r: &mut Reader<'_>) -> Result<(u16, u16)> {
    let n = r.u16()?;
    let q = r.u16()?;
    validate::key(n >= 2 && n as usize <= MAX_N, "ring degree out of range")?;
    validate::key(q >= 4 && q.is_power_of_two(), "q is not a power of two")?;
    Ok((n, q))
}

/// NTRUEncrypt public key `h = 3 * g * f^-1 mod q`
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    q: u16,
    bits: CoeffBits,
    h: IntPoly,
}

impl PublicKey {
    pub(crate) fn new(q: u16, h: IntPoly) -> Result<Self> {
        let bits = CoeffBits::new(q.trailing_zeros())?;
        Ok(Self { q, bits, h })
    }

    /// Ring degree N
    pub fn n(&self) -> usize {
        self.h.n()
    }

    /// Modulus q
    pub fn q(&self) -> u16 {
        self.q
    }

    /// The public polynomial, coefficients in `[0, q)`
    pub fn h(&self) -> &IntPoly {
        &self.h
    }

    /// Encoded length in bytes
    pub fn encoded_len(&self) -> usize {
        PUBLIC_HEADER_LEN + packed_len(self.n(), self.bits.get())
    }

    /// Encode as `N || q || packed h`
    pub fn export(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        put_u16(&mut out, self.n() as u16);
        put_u16(&mut out, self.q);
        out.extend_from_slice(&pack_with(&self.h, self.bits));
        out
    }

    /// Decode a key produced by [`PublicKey::export`]
    pub fn import(bytes: &[u8]) -> Result<Self> {
        let mut r = Reader::new(bytes);
        let (n, q) = read_header(&mut r)?;
        let bits = CoeffBits::new(q.trailing_zeros())?;
        let packed = r.take(packed_len(n as usize, bits.get()))?;
        let h = unpack_coeffs(packed, n as usize, bits.get())?;
        r.finish()?;
        Ok(Self { q, bits, h })
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("n", &self.n())
            .field("q", &self.q)
            .finish_non_exhaustive()
    }
}

impl Serialize for PublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        api_validate::min_length("NTRUEncrypt public key", bytes.len(), PUBLIC_HEADER_LEN)?;
        Self::import(bytes).with_context("NTRUEncrypt public key")
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.export()
    }
}

/// NTRUEncrypt private key: the trapdoor `t` with `f = 1 + 3t`
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    q: u16,
    t: PrivPoly,
}

impl PrivateKey {
    pub(crate) fn new(q: u16, t: PrivPoly) -> Self {
        Self { q, t }
    }

    /// Ring degree N
    pub fn n(&self) -> usize {
        self.t.n()
    }

    /// Modulus q
    pub fn q(&self) -> u16 {
        self.q
    }

    /// The private polynomial
    pub fn t(&self) -> &PrivPoly {
        &self.t
    }

    /// Encoded length in bytes
    pub fn encoded_len(&self) -> usize {
        let factors: usize = self
            .t
            .factors()
            .map(|f| 4 + 2 * (f.ones().len() + f.neg_ones().len()))
            .sum();
        PRIVATE_HEADER_LEN + factors
    }

    /// Encode as `N || q || flags || factor blocks`
    pub fn export(&self) -> Zeroizing<Vec<u8>> {
        let mut out = Zeroizing::new(Vec::with_capacity(self.encoded_len()));
        put_u16(&mut out, self.n() as u16);
        put_u16(&mut out, self.q);
        let flags = if self.t.is_product() {
            FLAGS_RESERVED | FLAG_PRODUCT_FORM
        } else {
            FLAGS_RESERVED
        };
        out.push(flags);

        for f in self.t.factors() {
            put_u16(&mut out, f.ones().len() as u16);
            put_u16(&mut out, f.neg_ones().len() as u16);
            for &i in f.ones().iter().chain(f.neg_ones()) {
                put_u16(&mut out, i);
            }
        }
        out
    }

    /// Decode a key produced by [`PrivateKey::export`]
    pub fn import(bytes: &[u8]) -> Result<Self> {
        let mut r = Reader::new(bytes);
        let (n, q) = read_header(&mut r)?;
        let flags = r.u8()?;
        validate::key(flags & FLAGS_RESERVED == FLAGS_RESERVED, "reserved flag bits not set")?;
        validate::key(flags & !(FLAGS_RESERVED | FLAG_PRODUCT_FORM) == 0, "unknown flag bits")?;

        let t = if flags & FLAG_PRODUCT_FORM != 0 {
            let f1 = read_factor(&mut r, n)?;
            let f2 = read_factor(&mut r, n)?;
            let f3 = read_factor(&mut r, n)?;
            PrivPoly::Product(ProdPoly::new(f1, f2, f3)?)
        } else {
            PrivPoly::Ternary(read_factor(&mut r, n)?)
        };
        r.finish()?;
        Ok(Self { q, t })
    }
}

fn read_factor(r: &mut Reader<'_>, n: u16) -> Result<TernPoly> {
    let num_ones = r.u16()? as usize;
    let num_neg_ones = r.u16()? as usize;
    validate::key(
        num_ones <= MAX_ONES && num_neg_ones <= MAX_ONES && num_ones + num_neg_ones <= n as usize,
        "too many non-zero coefficients",
    )?;

    let mut read_indices = |count: usize| -> Result<Vec<u16>> {
        r.take(2 * count)?
            .chunks_exact(2)
            .map(|b| {
                let i = BigEndian::read_u16(b);
                validate::key(i < n, "coefficient index out of range").map(|_| i)
            })
            .collect()
    };
    let ones = read_indices(num_ones)?;
    let neg_ones = read_indices(num_neg_ones)?;
    TernPoly::new(n, ones, neg_ones).map_err(|_| Error::InvalidKey("duplicate coefficient index"))
}

/// Compares the encodings in constant time
impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&*self.export(), &*other.export())
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("n", &self.n())
            .field("q", &self.q)
            .field("product_form", &self.t.is_product())
            .finish_non_exhaustive()
    }
}

impl SerializeSecret for PrivateKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        api_validate::min_length("NTRUEncrypt private key", bytes.len(), PRIVATE_HEADER_LEN)?;
        Self::import(bytes).with_context("NTRUEncrypt private key")
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.export()
    }
}

/// Matching private and public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    /// Pair up two halves, checking that they share N and q
    ///
    /// Whether `public` really belongs to `private` is only detected at
    /// decryption time.
    pub fn new(private: PrivateKey, public: PublicKey) -> Result<Self> {
        validate::key(private.n() == public.n(), "ring degree mismatch between key halves")?;
        validate::key(private.q() == public.q(), "modulus mismatch between key halves")?;
        Ok(Self { private, public })
    }

    /// The private half
    pub fn private(&self) -> &PrivateKey {
        &self.private
    }

    /// The public half
    pub fn public(&self) -> &PublicKey {
        &self.public
    }
}

/// Encrypted message: `log2(q)`-bit packed coefficients of `e`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext(Vec<u8>);

impl Ciphertext {
    /// Wrap raw ciphertext bytes; the length is checked on decryption
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw ciphertext bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Unwrap into the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Ciphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Ciphertext {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntruenc_algorithms::random_tern;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn sample_product_key(rng: &mut ChaCha20Rng) -> PrivateKey {
        let t = PrivPoly::Product(
            ProdPoly::new(
                random_tern(401, 8, 8, rng).unwrap(),
                random_tern(401, 8, 8, rng).unwrap(),
                random_tern(401, 6, 6, rng).unwrap(),
            )
            .unwrap(),
        );
        PrivateKey::new(2048, t)
    }

    #[test]
    fn test_private_key_layout() {
        let t = PrivPoly::Ternary(TernPoly::new(11, vec![1, 9], vec![4]).unwrap());
        let key = PrivateKey::new(32, t);
        let bytes = key.export();
        assert_eq!(
            &bytes[..],
            &[0, 11, 0, 32, 0b011, 0, 2, 0, 1, 0, 1, 0, 9, 0, 4][..]
        );
        assert_eq!(bytes.len(), key.encoded_len());
        assert_eq!(PrivateKey::import(&bytes).unwrap(), key);
    }

    #[test]
    fn test_product_key_round_trip() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let key = sample_product_key(&mut rng);
        let bytes = key.export();
        assert_eq!(bytes[4], 0b111);
        assert_eq!(bytes.len(), 5 + 36 + 36 + 28);
        let back = PrivateKey::import(&bytes).unwrap();
        assert_eq!(back, key);
        assert_eq!(back.export(), bytes);
    }

    #[test]
    fn test_public_key_layout() {
        let h = IntPoly::from_coeffs(vec![1, 2047, 0, 5]);
        let key = PublicKey::new(2048, h).unwrap();
        let bytes = key.export();
        assert_eq!(&bytes[..4], &[0, 4, 0x08, 0x00]);
        assert_eq!(bytes.len(), key.encoded_len());
        assert_eq!(bytes.len(), 4 + 6);
        assert_eq!(PublicKey::import(&bytes).unwrap(), key);
        assert_eq!(key.to_bytes(), bytes);
        assert_eq!(<PublicKey as Serialize>::from_bytes(&key.to_bytes()).unwrap(), key);

        // q must give a packing width in 1..=16
        assert!(PublicKey::new(1, IntPoly::zero(4)).is_err());
    }

    #[test]
    fn test_malformed_keys() {
        let mut rng = ChaCha20Rng::seed_from_u64(10);
        let bytes = sample_product_key(&mut rng).export();

        // truncated, padded
        assert!(PrivateKey::import(&bytes[..bytes.len() - 1]).is_err());
        let mut long = bytes.to_vec();
        long.push(0);
        assert!(PrivateKey::import(&long).is_err());

        // reserved flag bits cleared
        let mut bad = bytes.to_vec();
        bad[4] = 0b100;
        assert!(matches!(PrivateKey::import(&bad), Err(Error::InvalidKey(_))));

        // index out of range
        let mut bad = bytes.to_vec();
        bad[9] = 0x7f;
        assert!(PrivateKey::import(&bad).is_err());

        // duplicate index
        let mut bad = bytes.to_vec();
        bad[11] = bad[9];
        bad[12] = bad[10];
        assert!(PrivateKey::import(&bad).is_err());

        // q not a power of two
        let mut bad = bytes.to_vec();
        bad[3] = 1;
        assert!(PrivateKey::import(&bad).is_err());

        assert!(PublicKey::import(&[0, 4, 0x08]).is_err());
        assert_eq!(
            <PublicKey as Serialize>::from_bytes(&[0, 4, 0x08]),
            Err(ntruenc_api::Error::InvalidLength {
                context: "NTRUEncrypt public key",
                expected: 4,
                actual: 3,
            })
        );
        assert!(matches!(
            <PrivateKey as SerializeSecret>::from_bytes(&bytes[..4]),
            Err(ntruenc_api::Error::InvalidLength { expected: 5, actual: 4, .. })
        ));
        assert!(matches!(
            <PrivateKey as SerializeSecret>::from_bytes(&bad),
            Err(ntruenc_api::Error::InvalidKey { context: "NTRUEncrypt private key", .. })
        ));
    }

    #[test]
    fn test_factor_weight_bound() {
        let mut bytes = vec![0x05, 0xdb, 0x08, 0x00, FLAGS_RESERVED];
        let ones = MAX_ONES as u16 + 1;
        put_u16(&mut bytes, ones);
        put_u16(&mut bytes, 0);
        for i in 0..ones {
            put_u16(&mut bytes, i);
        }
        assert_eq!(
            PrivateKey::import(&bytes),
            Err(Error::InvalidKey("too many non-zero coefficients"))
        );
    }

    #[test]
    fn test_private_key_equality() {
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        let a = sample_product_key(&mut rng);
        let b = sample_product_key(&mut rng);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);

        let t = PrivPoly::Ternary(TernPoly::new(11, vec![1, 9], vec![4]).unwrap());
        assert_ne!(PrivateKey::new(32, t.clone()), PrivateKey::new(64, t));
    }

    #[test]
    fn test_key_pair_mismatch() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let private = sample_product_key(&mut rng);
        let public = PublicKey::new(2048, IntPoly::zero(439)).unwrap();
        assert!(KeyPair::new(private.clone(), public).is_err());
        let public = PublicKey::new(1024, IntPoly::zero(401)).unwrap();
        assert!(KeyPair::new(private, public).is_err());
    }

    #[test]
    fn test_debug_hides_coefficients() {
        let t = PrivPoly::Ternary(TernPoly::new(11, vec![1, 9], vec![4]).unwrap());
        let s = format!("{:?}", PrivateKey::new(32, t));
        assert!(s.contains("PrivateKey"));
        assert!(!s.contains("ones"));
    }
}
