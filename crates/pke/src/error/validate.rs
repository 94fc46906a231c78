//! Validation helpers for NTRUEncrypt operations

use super::{Error, Result};

/// Ensure a parameter-set condition holds
#[inline(always)]
pub fn parameters(condition: bool, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameters(reason));
    }
    Ok(())
}

/// Ensure a key condition holds
#[inline(always)]
pub fn key(condition: bool, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey(reason));
    }
    Ok(())
}

/// Ensure a ciphertext has the expected length
#[inline(always)]
pub fn ciphertext_length(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidCiphertextFormat("ciphertext has the wrong length"));
    }
    Ok(())
}

/// Ensure a plaintext fits the parameter set
#[inline(always)]
pub fn message_length(actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::MessageTooLong { max, actual });
    }
    Ok(())
}
