//! Parameter sets for the NTRUEncrypt public-key encryption scheme
//!
//! The `EES*` names follow IEEE P1363.1 / X9.98. Sets ending in `EP1`/`EP2`
//! with a single `df` use a ternary private polynomial; the product-form sets
//! store three sparse factors `f1`, `f2`, `f3` and are noticeably faster.

use crate::utils::hash::{SHA1_OUTPUT_SIZE, SHA256_OUTPUT_SIZE};

/// Largest ring degree of any supported parameter set
pub const MAX_N: usize = 1499;

/// Largest number of non-zero coefficients of a sampled ternary polynomial
pub const MAX_ONES: usize = 499;

/// Largest message length the SVES length byte can describe
pub const MAX_MSG_LEN_LIMIT: usize = 255;

/// Hash function used by the index and mask generation functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HashAlgorithm {
    /// SHA-1
    Sha1,
    /// SHA-256
    Sha256,
}

impl HashAlgorithm {
    /// Digest length in bytes
    pub const fn output_size(self) -> usize {
        match self {
            HashAlgorithm::Sha1 => SHA1_OUTPUT_SIZE,
            HashAlgorithm::Sha256 => SHA256_OUTPUT_SIZE,
        }
    }
}

/// NTRUEncrypt parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NtruEncParams {
    /// Name of the parameter set
    pub name: &'static str,

    /// Ring degree
    pub n: u16,

    /// Large modulus, a power of two
    pub q: u16,

    /// Whether the private polynomial is in product form
    pub prod_flag: bool,

    /// Number of ones (and of negative ones) in the private polynomial,
    /// or in `f1` for product-form sets
    pub df1: u16,

    /// Number of ones (and of negative ones) in `f2`; zero for ternary sets
    pub df2: u16,

    /// Number of ones (and of negative ones) in `f3`; zero for ternary sets
    pub df3: u16,

    /// Number of ones in `g`; `g` has one fewer negative ones
    pub dg: u16,

    /// Maximum absolute coefficient sum of the masked message, or zero when
    /// the constant coefficient is not reserved
    pub maxm1: u16,

    /// Minimum number of each of -1, 0 and 1 in the masked message
    pub dm0: u16,

    /// Number of random bits prepended to the message
    pub db: u16,

    /// Bits consumed per index candidate by the index generation function
    pub c: u16,

    /// Minimum number of hash calls made by the index generation function
    pub min_calls_r: u16,

    /// Minimum number of hash calls made by the mask generation function
    pub min_calls_mask: u16,

    /// Object identifier prepended to the blinding seed
    pub oid: [u8; 3],

    /// Hash function for index and mask generation
    pub hash: HashAlgorithm,

    /// Number of bits of the packed public key mixed into the blinding seed
    pub pklen: u16,
}

impl NtruEncParams {
    /// Digest length of the configured hash in bytes
    pub const fn hash_len(&self) -> usize {
        self.hash.output_size()
    }

    /// Whether the constant coefficient is left out of the message encoding
    pub const fn skips_constant_coeff(&self) -> bool {
        self.maxm1 > 0
    }

    /// Base-2 logarithm of `q`
    pub const fn log2_q(&self) -> u32 {
        self.q.trailing_zeros()
    }
}

/// EES401EP1: 112-bit security, ternary private key, optimised for key and ciphertext size
pub const EES401EP1: NtruEncParams = NtruEncParams {
    name: "EES401EP1",
    n: 401,
    q: 2048,
    prod_flag: false,
    df1: 113,
    df2: 0,
    df3: 0,
    dg: 133,
    maxm1: 112,
    dm0: 113,
    db: 112,
    c: 11,
    min_calls_r: 32,
    min_calls_mask: 9,
    oid: [0, 2, 4],
    hash: HashAlgorithm::Sha1,
    pklen: 114,
};

/// EES449EP1: 128-bit security, ternary private key, optimised for size
pub const EES449EP1: NtruEncParams = NtruEncParams {
    name: "EES449EP1",
    n: 449,
    q: 2048,
    prod_flag: false,
    df1: 134,
    df2: 0,
    df3: 0,
    dg: 149,
    maxm1: 128,
    dm0: 134,
    db: 128,
    c: 9,
    min_calls_r: 31,
    min_calls_mask: 9,
    oid: [0, 3, 3],
    hash: HashAlgorithm::Sha1,
    pklen: 128,
};

/// EES677EP1: 192-bit security, ternary private key, optimised for size
pub const EES677EP1: NtruEncParams = NtruEncParams {
    name: "EES677EP1",
    n: 677,
    q: 2048,
    prod_flag: false,
    df1: 157,
    df2: 0,
    df3: 0,
    dg: 225,
    maxm1: 192,
    dm0: 157,
    db: 192,
    c: 11,
    min_calls_r: 27,
    min_calls_mask: 9,
    oid: [0, 5, 3],
    hash: HashAlgorithm::Sha256,
    pklen: 192,
};

/// EES1087EP2: 256-bit security, ternary private key, optimised for size
pub const EES1087EP2: NtruEncParams = NtruEncParams {
    name: "EES1087EP2",
    n: 1087,
    q: 2048,
    prod_flag: false,
    df1: 120,
    df2: 0,
    df3: 0,
    dg: 362,
    maxm1: 256,
    dm0: 120,
    db: 256,
    c: 13,
    min_calls_r: 25,
    min_calls_mask: 14,
    oid: [0, 6, 3],
    hash: HashAlgorithm::Sha256,
    pklen: 256,
};

/// EES541EP1: 112-bit security, ternary private key, size/speed tradeoff
pub const EES541EP1: NtruEncParams = NtruEncParams {
    name: "EES541EP1",
    n: 541,
    q: 2048,
    prod_flag: false,
    df1: 49,
    df2: 0,
    df3: 0,
    dg: 180,
    maxm1: 0,
    dm0: 49,
    db: 112,
    c: 12,
    min_calls_r: 15,
    min_calls_mask: 11,
    oid: [0, 2, 5],
    hash: HashAlgorithm::Sha1,
    pklen: 112,
};

/// EES613EP1: 128-bit security, ternary private key, size/speed tradeoff
pub const EES613EP1: NtruEncParams = NtruEncParams {
    name: "EES613EP1",
    n: 613,
    q: 2048,
    prod_flag: false,
    df1: 55,
    df2: 0,
    df3: 0,
    dg: 204,
    maxm1: 0,
    dm0: 55,
    db: 128,
    c: 11,
    min_calls_r: 16,
    min_calls_mask: 13,
    oid: [0, 3, 4],
    hash: HashAlgorithm::Sha1,
    pklen: 128,
};

/// EES887EP1: 192-bit security, ternary private key, size/speed tradeoff
pub const EES887EP1: NtruEncParams = NtruEncParams {
    name: "EES887EP1",
    n: 887,
    q: 2048,
    prod_flag: false,
    df1: 81,
    df2: 0,
    df3: 0,
    dg: 295,
    maxm1: 0,
    dm0: 81,
    db: 192,
    c: 10,
    min_calls_r: 13,
    min_calls_mask: 12,
    oid: [0, 5, 4],
    hash: HashAlgorithm::Sha256,
    pklen: 192,
};

/// EES1171EP1: 256-bit security, ternary private key, size/speed tradeoff
pub const EES1171EP1: NtruEncParams = NtruEncParams {
    name: "EES1171EP1",
    n: 1171,
    q: 2048,
    prod_flag: false,
    df1: 106,
    df2: 0,
    df3: 0,
    dg: 390,
    maxm1: 0,
    dm0: 106,
    db: 256,
    c: 12,
    min_calls_r: 20,
    min_calls_mask: 15,
    oid: [0, 6, 4],
    hash: HashAlgorithm::Sha256,
    pklen: 256,
};

/// EES659EP1: 112-bit security, ternary private key, optimised for speed
pub const EES659EP1: NtruEncParams = NtruEncParams {
    name: "EES659EP1",
    n: 659,
    q: 2048,
    prod_flag: false,
    df1: 38,
    df2: 0,
    df3: 0,
    dg: 219,
    maxm1: 0,
    dm0: 38,
    db: 112,
    c: 11,
    min_calls_r: 11,
    min_calls_mask: 14,
    oid: [0, 2, 6],
    hash: HashAlgorithm::Sha1,
    pklen: 112,
};

/// EES761EP1: 128-bit security, ternary private key, optimised for speed
pub const EES761EP1: NtruEncParams = NtruEncParams {
    name: "EES761EP1",
    n: 761,
    q: 2048,
    prod_flag: false,
    df1: 42,
    df2: 0,
    df3: 0,
    dg: 253,
    maxm1: 0,
    dm0: 42,
    db: 128,
    c: 12,
    min_calls_r: 13,
    min_calls_mask: 16,
    oid: [0, 3, 5],
    hash: HashAlgorithm::Sha1,
    pklen: 128,
};

/// EES1087EP1: 192-bit security, ternary private key, optimised for speed
pub const EES1087EP1: NtruEncParams = NtruEncParams {
    name: "EES1087EP1",
    n: 1087,
    q: 2048,
    prod_flag: false,
    df1: 63,
    df2: 0,
    df3: 0,
    dg: 362,
    maxm1: 0,
    dm0: 63,
    db: 192,
    c: 13,
    min_calls_r: 13,
    min_calls_mask: 14,
    oid: [0, 5, 5],
    hash: HashAlgorithm::Sha256,
    pklen: 192,
};

/// EES1499EP1: 256-bit security, ternary private key, optimised for speed
pub const EES1499EP1: NtruEncParams = NtruEncParams {
    name: "EES1499EP1",
    n: 1499,
    q: 2048,
    prod_flag: false,
    df1: 79,
    df2: 0,
    df3: 0,
    dg: 499,
    maxm1: 0,
    dm0: 79,
    db: 256,
    c: 13,
    min_calls_r: 17,
    min_calls_mask: 19,
    oid: [0, 6, 5],
    hash: HashAlgorithm::Sha256,
    pklen: 256,
};

/// EES401EP2: 112-bit security, product-form private key
pub const EES401EP2: NtruEncParams = NtruEncParams {
    name: "EES401EP2",
    n: 401,
    q: 2048,
    prod_flag: true,
    df1: 8,
    df2: 8,
    df3: 6,
    dg: 133,
    maxm1: 0,
    dm0: 101,
    db: 112,
    c: 11,
    min_calls_r: 10,
    min_calls_mask: 6,
    oid: [0, 2, 16],
    hash: HashAlgorithm::Sha1,
    pklen: 112,
};

/// EES439EP1: 128-bit security, product-form private key
pub const EES439EP1: NtruEncParams = NtruEncParams {
    name: "EES439EP1",
    n: 439,
    q: 2048,
    prod_flag: true,
    df1: 9,
    df2: 8,
    df3: 5,
    dg: 146,
    maxm1: 0,
    dm0: 112,
    db: 128,
    c: 9,
    min_calls_r: 15,
    min_calls_mask: 6,
    oid: [0, 3, 16],
    hash: HashAlgorithm::Sha1,
    pklen: 128,
};

/// EES443EP1: 128-bit security, product-form private key, SHA-256 hash
pub const EES443EP1: NtruEncParams = NtruEncParams {
    name: "EES443EP1",
    n: 443,
    q: 2048,
    prod_flag: true,
    df1: 9,
    df2: 8,
    df3: 5,
    dg: 148,
    maxm1: 0,
    dm0: 115,
    db: 128,
    c: 9,
    min_calls_r: 8,
    min_calls_mask: 5,
    oid: [0, 3, 17],
    hash: HashAlgorithm::Sha256,
    pklen: 128,
};

/// EES593EP1: 192-bit security, product-form private key
pub const EES593EP1: NtruEncParams = NtruEncParams {
    name: "EES593EP1",
    n: 593,
    q: 2048,
    prod_flag: true,
    df1: 10,
    df2: 10,
    df3: 8,
    dg: 197,
    maxm1: 0,
    dm0: 158,
    db: 192,
    c: 11,
    min_calls_r: 12,
    min_calls_mask: 5,
    oid: [0, 5, 16],
    hash: HashAlgorithm::Sha256,
    pklen: 192,
};

/// EES587EP1: 192-bit security, product-form private key, alternate ring
pub const EES587EP1: NtruEncParams = NtruEncParams {
    name: "EES587EP1",
    n: 587,
    q: 2048,
    prod_flag: true,
    df1: 10,
    df2: 10,
    df3: 8,
    dg: 196,
    maxm1: 0,
    dm0: 157,
    db: 192,
    c: 11,
    min_calls_r: 13,
    min_calls_mask: 7,
    oid: [0, 5, 17],
    hash: HashAlgorithm::Sha256,
    pklen: 192,
};

/// EES743EP1: 256-bit security, product-form private key
pub const EES743EP1: NtruEncParams = NtruEncParams {
    name: "EES743EP1",
    n: 743,
    q: 2048,
    prod_flag: true,
    df1: 11,
    df2: 11,
    df3: 15,
    dg: 247,
    maxm1: 0,
    dm0: 204,
    db: 256,
    c: 13,
    min_calls_r: 12,
    min_calls_mask: 7,
    oid: [0, 6, 16],
    hash: HashAlgorithm::Sha256,
    pklen: 256,
};

/// Default parameters for 112-bit security
pub const DEFAULT_PARAMS_112_BITS: NtruEncParams = EES401EP2;

/// Default parameters for 128-bit security
pub const DEFAULT_PARAMS_128_BITS: NtruEncParams = EES439EP1;

/// Default parameters for 192-bit security
pub const DEFAULT_PARAMS_192_BITS: NtruEncParams = EES593EP1;

/// Default parameters for 256-bit security
pub const DEFAULT_PARAMS_256_BITS: NtruEncParams = EES743EP1;

/// Every named parameter set
pub static ALL_PARAMS: [NtruEncParams; 18] = [
    EES401EP1,
    EES449EP1,
    EES677EP1,
    EES1087EP2,
    EES541EP1,
    EES613EP1,
    EES887EP1,
    EES1171EP1,
    EES659EP1,
    EES761EP1,
    EES1087EP1,
    EES1499EP1,
    EES401EP2,
    EES439EP1,
    EES443EP1,
    EES593EP1,
    EES587EP1,
    EES743EP1,
];

/// Looks up a parameter set by name, ignoring ASCII case
pub fn by_name(name: &str) -> Option<&'static NtruEncParams> {
    ALL_PARAMS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Looks up a parameter set by its object identifier
pub fn by_oid(oid: &[u8; 3]) -> Option<&'static NtruEncParams> {
    ALL_PARAMS.iter().find(|p| &p.oid == oid)
}
