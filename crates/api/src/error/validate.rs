//! Validation helpers that turn failed checks into [`Error`] values

use super::{Error, Result};

/// Validate that `actual` equals `expected`
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

/// Validate an arbitrary parameter condition
pub fn parameter(condition: bool, context: &'static str, message: &str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context,
            message: message.to_string(),
        });
    }
    Ok(())
}

/// Validate a key generation precondition
pub fn key_generation(condition: bool, algorithm: &'static str, details: &str) -> Result<()> {
    if !condition {
        return Err(Error::key_generation(algorithm, details));
    }
    Ok(())
}
