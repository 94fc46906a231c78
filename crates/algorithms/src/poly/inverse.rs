//! Inversion in Z_q[x]/(x^N - 1) for power-of-two q
//!
//! The inverse is first found modulo 2 with a binary extended-GCD over
//! GF(2)[x], then lifted to modulo q by Newton iteration:
//! `Fq <- Fq * (2 - a * Fq)`, which squares the working modulus each round.

use core::mem;

use super::dense::IntPoly;
use super::private::PrivPoly;
use crate::error::{validate, Result};

fn check_q(q: u32) -> Result<()> {
    validate::parameter(q >= 2 && q.is_power_of_two(), "q", "must be a power of two")
}

/// Inverse of `a` modulo 2, coefficients in {0, 1}
///
/// Returns `None` when `a` is not invertible mod 2.
pub fn invert_mod2(a: &IntPoly) -> Option<IntPoly> {
    let n = a.n();
    if n == 0 {
        return None;
    }

    // Working polynomials carry one extra coefficient so that g can hold x^N + 1.
    let mut k = 0usize;
    let mut b = IntPoly::one(n + 1);
    let mut c = IntPoly::zero(n + 1);
    let mut f = IntPoly::zero(n + 1);
    for (dst, &src) in f.coeffs_mut().iter_mut().zip(a.coeffs()) {
        *dst = src & 1;
    }
    let mut g = IntPoly::zero(n + 1);
    g.coeffs_mut()[0] = 1;
    g.coeffs_mut()[n] = 1;

    if f.equals_zero() {
        return None;
    }

    loop {
        while f.coeffs()[0] == 0 {
            // f /= x, c *= x
            f.coeffs_mut().rotate_left(1);
            let cc = c.coeffs_mut();
            cc.rotate_right(1);
            cc[0] = 0;
            k += 1;
            if f.equals_zero() {
                return None;
            }
        }
        if f.equals_one() {
            break;
        }
        if f.degree() < g.degree() {
            mem::swap(&mut f, &mut g);
            mem::swap(&mut b, &mut c);
        }
        for (x, y) in f.coeffs_mut().iter_mut().zip(g.coeffs()) {
            *x ^= *y;
        }
        for (x, y) in b.coeffs_mut().iter_mut().zip(c.coeffs()) {
            *x ^= *y;
        }
    }

    if b.coeffs()[n] != 0 {
        return None;
    }

    // F2 = x^(-k) * b mod (x^N - 1)
    let k = k % n;
    let mut inv = IntPoly::zero(n);
    for (i, &bi) in b.coeffs()[..n].iter().enumerate() {
        inv.coeffs_mut()[(i + n - k) % n] = bi;
    }
    Some(inv)
}

/// Newton-lift an inverse mod 2 to an inverse mod `q`
///
/// `mul_a` multiplies its argument by the polynomial being inverted,
/// reducing mod `q`.
fn lift<F>(mut fq: IntPoly, q: u32, mul_a: F) -> Result<IntPoly>
where
    F: Fn(&IntPoly) -> Result<IntPoly>,
{
    let mut v = 2u64;
    while v < q as u64 {
        v *= v;
        // t = 2 - a * Fq
        let mut t = mul_a(&fq)?.scalar_mul(-1);
        t.coeffs_mut()[0] += 2;
        t.reduce(q)?;
        fq = fq.mul(&t, q)?;
    }
    Ok(fq)
}

/// Inverse of `a` modulo `q`, coefficients in `[0, q)`
///
/// Returns `Ok(None)` when `a` is not invertible, and an error when `q` is
/// not a power of two or `a` has ring degree zero.
pub fn invert(a: &IntPoly, q: u32) -> Result<Option<IntPoly>> {
    check_q(q)?;
    validate::parameter(a.n() > 0, "polynomial", "ring degree must be non-zero")?;

    let f2 = match invert_mod2(a) {
        Some(f2) => f2,
        None => return Ok(None),
    };
    let fq = lift(f2, q, |x| x.mul(a, q))?;
    Ok(Some(fq))
}

/// Inverse of `f = 1 + 3t` modulo `q` for a private polynomial `t`
///
/// Lifting multiplies through the sparse representation,
/// `x * f = x + 3 * (x * t)`, instead of densifying `f`.
pub fn invert_private(t: &PrivPoly, q: u32) -> Result<Option<IntPoly>> {
    check_q(q)?;

    // f = 1 + 3t is congruent to 1 + t mod 2
    let mut f_mod2 = t.to_int_poly(q)?;
    f_mod2.coeffs_mut()[0] += 1;

    let f2 = match invert_mod2(&f_mod2) {
        Some(f2) => f2,
        None => return Ok(None),
    };
    let fq = lift(f2, q, |x| {
        let mut xf = x.mul_priv(t, q)?.scalar_mul(3).add(x)?;
        xf.reduce(q)?;
        Ok(xf)
    })?;
    Ok(Some(fq))
}
