//! Index generation function IGF-2 (IEEE P1363.1 section 8.4.2.1)
//!
//! Turns a seed into a stream of indices uniformly distributed in `[0, N)`.
//! Each candidate is the top `c` bits of a hash-fed [`BitBuffer`]; values at
//! or above the largest multiple of N below `2^c` are discarded so the
//! reduction mod N is unbiased.

use alloc::vec::Vec;
use tracing::trace;
use zeroize::Zeroize;

use ntruenc_algorithms::hash::{hash_counter_blocks, HashFunction};
use ntruenc_algorithms::{sample_tern, BitBuffer, PrivPoly, ProdPoly, TernPoly};
use ntruenc_params::pqc::ntru::NtruEncParams;

use crate::error::{validate, Result};

/// Deterministic index stream for one blinding-polynomial derivation
pub struct IndexGenerator<'a> {
    seed: &'a [u8],
    n: u32,
    c: u32,
    threshold: u32,
    counter: u16,
    hash: &'a dyn HashFunction,
    buf: BitBuffer,
}

impl<'a> IndexGenerator<'a> {
    /// Seed the generator, hashing `min_calls_r` blocks up front
    pub fn new(
        seed: &'a [u8],
        params: &NtruEncParams,
        hash: &'a dyn HashFunction,
    ) -> Result<Self> {
        let n = params.n as u32;
        let c = params.c as u32;
        validate::parameters(n > 0, "N must be non-zero")?;
        validate::parameters(
            (1..=16).contains(&c) && (1u32 << c) >= n,
            "c must be at most 16 and 2^c at least N",
        )?;

        let mut blocks = Vec::with_capacity(params.min_calls_r as usize * hash.output_size());
        let counter = hash_counter_blocks(hash, seed, 0, params.min_calls_r as usize, &mut blocks);
        let mut buf = BitBuffer::with_capacity(blocks.len());
        buf.append(&blocks)?;
        blocks.zeroize();

        let range = 1u32 << c;
        Ok(Self {
            seed,
            n,
            c,
            threshold: range - range % n,
            counter,
            hash,
            buf,
        })
    }

    /// Next index in `[0, N)`
    pub fn next_index(&mut self) -> Result<u16> {
        loop {
            if self.buf.len() < self.c as usize {
                let mut extended = self.buf.trailing(self.buf.len())?;
                while extended.len() < self.c as usize {
                    let mut block = Vec::with_capacity(self.hash.output_size());
                    self.counter =
                        hash_counter_blocks(self.hash, self.seed, self.counter, 1, &mut block);
                    extended.append(&block)?;
                    block.zeroize();
                }
                trace!(counter = self.counter, bits = extended.len(), "extended IGF buffer");
                self.buf = extended;
            }

            let candidate = self.buf.leading(self.c)?;
            self.buf.truncate(self.c as usize)?;
            if candidate < self.threshold {
                let mut i = candidate;
                while i >= self.n {
                    i -= self.n;
                }
                return Ok(i as u16);
            }
        }
    }
}

/// Derive the blinding polynomial `r` from `seed`
///
/// Every factor draws its `+1` positions, then its `-1` positions, from one
/// shared index stream.
pub fn generate_blinding_poly(
    seed: &[u8],
    params: &NtruEncParams,
    hash: &dyn HashFunction,
) -> Result<PrivPoly> {
    let mut igf = IndexGenerator::new(seed, params, hash)?;
    let mut factor =
        |d: u16| -> Result<TernPoly> { sample_tern(params.n, d, d, || igf.next_index()) };

    if params.prod_flag {
        let f1 = factor(params.df1)?;
        let f2 = factor(params.df2)?;
        let f3 = factor(params.df3)?;
        Ok(PrivPoly::Product(ProdPoly::new(f1, f2, f3)?))
    } else {
        Ok(PrivPoly::Ternary(factor(params.df1)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntruenc_algorithms::hash::provider;
    use ntruenc_params::pqc::ntru::{EES1087EP2, EES401EP1, EES401EP2};

    #[test]
    fn test_deterministic() {
        let p = EES401EP2;
        let h = provider(p.hash);
        let mut a = IndexGenerator::new(b"seed", &p, h).unwrap();
        let mut b = IndexGenerator::new(b"seed", &p, h).unwrap();
        let mut c = IndexGenerator::new(b"seeD", &p, h).unwrap();
        let xs: Vec<u16> = (0..500).map(|_| a.next_index().unwrap()).collect();
        let ys: Vec<u16> = (0..500).map(|_| b.next_index().unwrap()).collect();
        let zs: Vec<u16> = (0..500).map(|_| c.next_index().unwrap()).collect();
        assert_eq!(xs, ys);
        assert_ne!(xs, zs);
    }

    #[test]
    fn test_uniformity() {
        let p = EES401EP1;
        let n = p.n as usize;
        let mut igf = IndexGenerator::new(b"uniformity", &p, provider(p.hash)).unwrap();

        let draws = 100_000;
        let mut hits = alloc::vec![0u32; n];
        let mut total = 0u64;
        for _ in 0..draws {
            let i = igf.next_index().unwrap() as usize;
            assert!(i < n);
            hits[i] += 1;
            total += i as u64;
        }

        assert!(hits.iter().all(|&h| h > 0));
        let mean = total as f64 / draws as f64;
        let expected = (n - 1) as f64 / 2.0;
        // standard error of the mean is about 0.37 here
        assert!((mean - expected).abs() < 3.0, "mean {}", mean);
    }

    #[test]
    fn test_blinding_poly_shape() {
        for p in [EES401EP1, EES401EP2, EES1087EP2] {
            let r = generate_blinding_poly(b"blinding", &p, provider(p.hash)).unwrap();
            assert_eq!(r.is_product(), p.prod_flag);
            let expected = if p.prod_flag {
                [p.df1, p.df2, p.df3].to_vec()
            } else {
                [p.df1].to_vec()
            };
            for (f, d) in r.factors().zip(expected) {
                assert_eq!(f.ones().len(), d as usize);
                assert_eq!(f.neg_ones().len(), d as usize);
            }
            assert_eq!(r, generate_blinding_poly(b"blinding", &p, provider(p.hash)).unwrap());
        }
    }
}
