//! Mask generation function MGF-TP-1 (IEEE P1363.1 section 8.4.1.1)

use alloc::vec::Vec;
use zeroize::Zeroize;

use ntruenc_algorithms::hash::{hash_counter_blocks, HashFunction};
use ntruenc_algorithms::IntPoly;
use ntruenc_params::pqc::ntru::NtruEncParams;

/// Largest byte value that is a valid five-digit base-3 number, plus one
const BASE3_LIMIT: u8 = 243;

/// Derive a ternary mask polynomial of degree N from `seed`
///
/// The seed is hashed once to `Z`; output bytes come from `H(Z || counter)`.
/// Bytes of 243 or more are skipped, the rest yield five base-3 digits each,
/// least-significant first, mapped `0 -> -1`, `1 -> 0`, `2 -> 1`.
pub fn generate_mask(seed: &[u8], params: &NtruEncParams, hash: &dyn HashFunction) -> IntPoly {
    let n = params.n as usize;
    let mut coeffs = Vec::with_capacity(n);
    if n == 0 {
        return IntPoly::from_coeffs(coeffs);
    }

    let mut z = hash.hash(seed);
    let mut buf = Vec::with_capacity(params.min_calls_mask as usize * hash.output_size());
    let mut counter = hash_counter_blocks(hash, &z, 0, params.min_calls_mask as usize, &mut buf);

    let mut pos = 0;
    'fill: loop {
        while let Some(&byte) = buf.get(pos) {
            pos += 1;
            if byte >= BASE3_LIMIT {
                continue;
            }
            let mut o = byte;
            for _ in 0..5 {
                coeffs.push((o % 3) as i32 - 1);
                o /= 3;
                if coeffs.len() == n {
                    break 'fill;
                }
            }
        }
        counter = hash_counter_blocks(hash, &z, counter, 1, &mut buf);
    }

    z.zeroize();
    buf.zeroize();
    IntPoly::from_coeffs(coeffs)
}
