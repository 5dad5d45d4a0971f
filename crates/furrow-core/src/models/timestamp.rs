//! Range check for epoch-second timestamps entering the record store.

use crate::error::{FurrowError, Result};

/// Latest accepted timestamp, 9999-12-31T23:59:59Z.
pub const MAX_TIMESTAMP: i64 = 253_402_300_799;

/// Checks that `timestamp` lies in `0..=MAX_TIMESTAMP`.
///
/// # Errors
///
/// Returns `FurrowError::InvalidInput` naming `field` otherwise.
pub fn check_timestamp(field: &str, timestamp: i64) -> Result<i64> {
    if timestamp < 0 {
        return Err(FurrowError::invalid_input(field)
            .with_reason(format!("must not be negative, got {timestamp}")));
    }
    if timestamp > MAX_TIMESTAMP {
        return Err(FurrowError::invalid_input(field)
            .with_reason(format!("must not be after 9999-12-31, got {timestamp}")));
    }
    Ok(timestamp)
}
