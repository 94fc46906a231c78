//! Append-only bit string
//!
//! Bytes are appended at the most-significant end: byte 0 holds the oldest,
//! least-significant bits. `leading` reads from the most-significant end and
//! `trailing` from the least-significant end.

use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Error, Result};

/// Maximum size of a [`BitBuffer`] in bytes
pub const MAX_BIT_BUFFER_BYTES: usize = 2048;

/// Growable bit string with a bounded capacity
///
/// `last_byte_bits` is the number of valid bits in the final byte (1..=8),
/// or 0 when the buffer is empty. Bits above it are always zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct BitBuffer {
    buf: Vec<u8>,
    last_byte_bits: u8,
}

impl BitBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `bytes` bytes
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            buf: Vec::with_capacity(bytes.min(MAX_BIT_BUFFER_BYTES)),
            last_byte_bits: 0,
        }
    }

    /// Logical length in bits
    pub fn len(&self) -> usize {
        match self.buf.len() {
            0 => 0,
            bytes => (bytes - 1) * 8 + self.last_byte_bits as usize,
        }
    }

    /// Whether the buffer holds no bits
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Underlying bytes, least-significant first
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    fn push(&mut self, byte: u8) -> Result<()> {
        validate::max_length("bit buffer", self.buf.len() + 1, MAX_BIT_BUFFER_BYTES)?;
        self.buf.push(byte);
        Ok(())
    }

    /// Append 8 bits above the current most-significant bit
    pub fn append_byte(&mut self, byte: u8) -> Result<()> {
        match self.last_byte_bits {
            0 | 8 => {
                self.push(byte)?;
                self.last_byte_bits = 8;
            }
            used => {
                let spill = byte >> (8 - used);
                self.push(spill)?;
                let last = self.buf.len() - 2;
                self.buf[last] |= byte << used;
            }
        }
        Ok(())
    }

    /// Append every byte of `bytes` in order
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        for &b in bytes {
            self.append_byte(b)?;
        }
        Ok(())
    }

    fn check_bits(&self, n: usize) -> Result<()> {
        if n > self.len() {
            return Err(Error::Length {
                context: "bit buffer read",
                expected: n,
                actual: self.len(),
            });
        }
        Ok(())
    }

    /// The `n` most-significant bits as an integer, `n < 32`
    pub fn leading(&self, n: u32) -> Result<u32> {
        validate::parameter(n < 32, "leading bit count", "must be below 32")?;
        self.check_bits(n as usize)?;
        if n == 0 {
            return Ok(0);
        }

        let start = self.len() - n as usize;
        let mut acc = 0u64;
        for (i, &b) in self.buf[start / 8..].iter().enumerate() {
            acc |= (b as u64) << (8 * i);
        }
        Ok(((acc >> (start % 8)) & ((1u64 << n) - 1)) as u32)
    }

    /// A new buffer holding only the `n` least-significant bits
    pub fn trailing(&self, n: usize) -> Result<BitBuffer> {
        self.check_bits(n)?;
        let mut out = BitBuffer::with_capacity(n.div_ceil(8));
        out.buf.extend_from_slice(&self.buf[..n.div_ceil(8)]);
        out.set_bit_len(n);
        Ok(out)
    }

    /// Remove the `n` most-significant bits
    pub fn truncate(&mut self, n: usize) -> Result<()> {
        self.check_bits(n)?;
        let remaining = self.len() - n;
        self.buf.truncate(remaining.div_ceil(8));
        self.set_bit_len(remaining);
        Ok(())
    }

    // Fix up the bit counter after `buf` was cut to exactly `bits` bits and
    // clear anything above them in the final byte.
    fn set_bit_len(&mut self, bits: usize) {
        if bits == 0 {
            self.buf.clear();
            self.last_byte_bits = 0;
            return;
        }
        self.last_byte_bits = match bits % 8 {
            0 => 8,
            r => r as u8,
        };
        if self.last_byte_bits < 8 {
            if let Some(last) = self.buf.last_mut() {
                *last &= (1u8 << self.last_byte_bits) - 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use proptest::prelude::*;

    // Reference model: the whole bit string as one integer, later bytes more
    // significant.
    fn as_int(bytes: &[u8]) -> u128 {
        bytes
            .iter()
            .enumerate()
            .fold(0u128, |acc, (i, &b)| acc | (b as u128) << (8 * i))
    }

    #[test]
    fn test_append_after_truncate() {
        let mut b = BitBuffer::new();
        b.append(&[0xff, 0x0f]).unwrap();
        assert_eq!(b.len(), 16);
        assert_eq!(b.leading(4).unwrap(), 0x0);
        assert_eq!(b.leading(8).unwrap(), 0x0f);

        b.truncate(5).unwrap();
        assert_eq!(b.len(), 11);
        assert_eq!(b.as_bytes(), &[0xff, 0x07]);

        b.append_byte(0xa5).unwrap();
        assert_eq!(b.len(), 19);
        assert_eq!(b.leading(8).unwrap(), 0xa5);
        assert_eq!(b.leading(11).unwrap(), 0xa5 << 3 | 0x7);
        assert_eq!(b.as_bytes(), &[0xff, 0x2f, 0x05]);
    }

    #[test]
    fn test_trailing() {
        let mut b = BitBuffer::new();
        b.append(&[0xab, 0xcd, 0xef]).unwrap();
        let t = b.trailing(12).unwrap();
        assert_eq!(t.len(), 12);
        assert_eq!(t.as_bytes(), &[0xab, 0x0d]);
        assert_eq!(b.trailing(0).unwrap(), BitBuffer::new());
        assert_eq!(b.trailing(24).unwrap(), b);
    }

    #[test]
    fn test_bounds() {
        let mut b = BitBuffer::new();
        b.append(&[1, 2]).unwrap();
        assert!(b.leading(17).is_err());
        assert!(b.leading(32).is_err());
        assert!(b.trailing(17).is_err());
        assert!(b.truncate(17).is_err());

        let mut full = BitBuffer::new();
        full.append(&vec![0u8; MAX_BIT_BUFFER_BYTES]).unwrap();
        assert!(matches!(full.append_byte(0), Err(Error::Length { .. })));
    }

    proptest! {
        #[test]
        fn leading_matches_reference(bytes in proptest::collection::vec(any::<u8>(), 1..12), n in 0u32..32) {
            let mut b = BitBuffer::new();
            b.append(&bytes).unwrap();
            let len = b.len();
            let n = n.min(len as u32);
            let expected = (as_int(&bytes) >> (len - n as usize)) & ((1u128 << n) - 1);
            prop_assert_eq!(b.leading(n).unwrap() as u128, expected);
        }

        #[test]
        fn truncate_then_trailing_keeps_remaining_bits(
            bytes in proptest::collection::vec(any::<u8>(), 1..12),
            cut in 0usize..96,
            extra in any::<u8>(),
        ) {
            let mut b = BitBuffer::new();
            b.append(&bytes).unwrap();
            let len = b.len();
            let cut = cut.min(len);
            let remaining = len - cut;

            b.truncate(cut).unwrap();
            prop_assert_eq!(b.len(), remaining);
            let mask = if remaining == 0 { 0 } else { (1u128 << remaining) - 1 };
            prop_assert_eq!(as_int(b.as_bytes()), as_int(&bytes) & mask);
            prop_assert_eq!(&b.trailing(remaining).unwrap(), &b);

            // appends after a truncate land directly above the kept bits
            b.append_byte(extra).unwrap();
            prop_assert_eq!(b.len(), remaining + 8);
            prop_assert_eq!(b.leading(8).unwrap(), extra as u32);
        }
    }
}
