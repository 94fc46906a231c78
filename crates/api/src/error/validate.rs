//! Validation helpers returning [`Error`] values
//!
//! Each helper checks one condition and produces a ready-made error when it
//! does not hold, so call sites stay a single `?` expression.

use super::types::{Error, Result};

/// Ensure a buffer has exactly the expected length
#[inline]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Ensure a buffer is at least `min` bytes long
#[inline]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::InvalidLength {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Ensure a buffer is at most `max` bytes long
#[inline]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::InvalidLength {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}
