//! Validation utilities for hash primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::Length {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Reject operations on a state that has already produced its digest
#[inline]
pub fn not_finalized(finalized: bool, algorithm: &'static str) -> Result<()> {
    if finalized {
        log::warn!("{}: rejected operation on a finalized hash state", algorithm);
        return Err(Error::UseAfterFinalize { algorithm });
    }
    Ok(())
}
