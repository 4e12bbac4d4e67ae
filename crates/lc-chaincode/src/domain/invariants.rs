//! # Domain Invariants
//!
//! Checks run by the dispatcher before any state access:
//! - Argument count matches the routed function
//! - User paths never target the reserved index key (when guarded)

use crate::errors::ChaincodeError;

/// Argument count must equal the function's arity.
///
/// # Errors
///
/// Returns `ChaincodeError::Arity` on mismatch.
pub fn check_arity(
    function: &'static str,
    expected: usize,
    args: &[String],
) -> Result<(), ChaincodeError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ChaincodeError::Arity {
            function,
            expected,
            actual: args.len(),
        })
    }
}

/// A user-supplied key must not be the reserved index key.
///
/// # Errors
///
/// Returns `ChaincodeError::ReservedKey` if `key == index_key`.
pub fn check_not_reserved(key: &str, index_key: &str) -> Result<(), ChaincodeError> {
    if key == index_key {
        Err(ChaincodeError::ReservedKey {
            key: key.to_string(),
        })
    } else {
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
