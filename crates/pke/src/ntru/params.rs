//! Parameter-set binding and derived sizes for NTRUEncrypt

use ntruenc_algorithms::bits::MAX_BIT_BUFFER_BYTES;
use ntruenc_algorithms::packed_len;
use ntruenc_params::pqc::ntru::{self as tables, NtruEncParams, MAX_MSG_LEN_LIMIT, MAX_N};

use crate::error::{validate, Result};

/// Compile-time selection of a named parameter set
pub trait NtruParamSet: Clone + Send + Sync + 'static {
    /// The parameter set
    const PARAMS: NtruEncParams;
}

macro_rules! param_sets {
    ($($marker:ident => $set:ident),* $(,)?) => {
        $(
            #[doc = concat!("Marker type for ", stringify!($set))]
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $marker;

            impl NtruParamSet for $marker {
                const PARAMS: NtruEncParams = tables::$set;
            }
        )*
    };
}

param_sets! {
    Ees401Ep1Params => EES401EP1,
    Ees449Ep1Params => EES449EP1,
    Ees677Ep1Params => EES677EP1,
    Ees1087Ep2Params => EES1087EP2,
    Ees541Ep1Params => EES541EP1,
    Ees613Ep1Params => EES613EP1,
    Ees887Ep1Params => EES887EP1,
    Ees1171Ep1Params => EES1171EP1,
    Ees659Ep1Params => EES659EP1,
    Ees761Ep1Params => EES761EP1,
    Ees1087Ep1Params => EES1087EP1,
    Ees1499Ep1Params => EES1499EP1,
    Ees401Ep2Params => EES401EP2,
    Ees439Ep1Params => EES439EP1,
    Ees443Ep1Params => EES443EP1,
    Ees593Ep1Params => EES593EP1,
    Ees587Ep1Params => EES587EP1,
    Ees743Ep1Params => EES743EP1,
}

/// Number of coefficient pairs carrying message bits
pub(crate) fn sves_pairs(params: &NtruEncParams) -> usize {
    (params.n as usize - params.skips_constant_coeff() as usize) / 2
}

/// Length in bytes of the encoded message buffer `b || len || msg || pad`
pub(crate) fn sves_len(params: &NtruEncParams) -> usize {
    (3 * sves_pairs(params)).div_ceil(8)
}

/// Longest plaintext in bytes the parameter set can encrypt
pub fn max_msg_len(params: &NtruEncParams) -> usize {
    (3 * sves_pairs(params) / 8).saturating_sub(1 + params.db as usize / 8)
}

/// Ciphertext length in bytes
pub fn ciphertext_len(params: &NtruEncParams) -> usize {
    packed_len(params.n as usize, params.log2_q())
}

/// Encoded public key length in bytes
pub fn public_key_len(params: &NtruEncParams) -> usize {
    4 + ciphertext_len(params)
}

/// Encoded private key length in bytes
pub fn private_key_len(params: &NtruEncParams) -> usize {
    let factors: usize = if params.prod_flag {
        [params.df1, params.df2, params.df3].iter().map(|&d| 4 + 4 * d as usize).sum()
    } else {
        4 + 4 * params.df1 as usize
    };
    5 + factors
}

/// Reject parameter combinations the scheme cannot run with
pub fn validate_params(params: &NtruEncParams) -> Result<()> {
    let n = params.n as usize;
    validate::parameters(
        params.q >= 4 && params.q.is_power_of_two() && params.q <= 1 << 15,
        "q must be a power of two between 4 and 2^15",
    )?;
    validate::parameters((2..=MAX_N).contains(&n), "N is out of range")?;
    validate::parameters(
        params.c >= 1 && params.c <= 16 && (1usize << params.c) >= n,
        "c must be at most 16 and 2^c at least N",
    )?;
    validate::parameters(params.db % 8 == 0, "db must be a multiple of 8")?;

    let max_len = max_msg_len(params);
    validate::parameters(max_len > 0, "parameter set leaves no room for a message")?;
    validate::parameters(max_len <= MAX_MSG_LEN_LIMIT, "maximum message length exceeds 255")?;

    let factors = if params.prod_flag {
        [params.df1, params.df2, params.df3]
    } else {
        [params.df1, 0, 0]
    };
    validate::parameters(factors[0] > 0, "df must be non-zero")?;
    validate::parameters(
        !params.prod_flag || (params.df2 > 0 && params.df3 > 0),
        "product-form sets need non-zero df2 and df3",
    )?;
    validate::parameters(
        factors.iter().all(|&d| 2 * d as usize <= n),
        "df exceeds the ring degree",
    )?;
    validate::parameters(
        params.dg > 0 && 2 * params.dg as usize <= n + 1,
        "dg is out of range",
    )?;
    validate::parameters(3 * params.dm0 as usize <= n, "dm0 exceeds N/3")?;

    validate::parameters(
        params.min_calls_r > 0 && params.min_calls_mask > 0,
        "minimum hash call counts must be non-zero",
    )?;
    validate::parameters(
        params.min_calls_r as usize * params.hash_len() + params.hash_len() <= MAX_BIT_BUFFER_BYTES,
        "min_calls_r exceeds the index generator buffer",
    )?;
    validate::parameters(
        params.pklen as usize / 8 <= ciphertext_len(params),
        "pklen exceeds the packed public key",
    )?;
    Ok(())
}
