//! # Error Types
//!
//! All error types for chaincode invocations.

use crate::domain::value_objects::EntryPoint;
use thiserror::Error;

// =============================================================================
// STATE ERRORS
// =============================================================================

/// Errors reported by the host state accessor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Ledger state is not reachable from this invocation.
    #[error("state accessor unavailable")]
    Unavailable,

    /// The host refused the get/put.
    #[error("state access rejected: {0}")]
    Rejected(String),

    /// In-process store lock was poisoned.
    #[error("state lock poisoned")]
    LockPoisoned,

    /// Other state error.
    #[error("state error: {0}")]
    Other(String),
}

// =============================================================================
// CHAINCODE ERRORS
// =============================================================================

/// Terminal failure of a single invocation.
///
/// Returned synchronously to the host runtime, which discards the
/// invocation's writes. Nothing is retried internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChaincodeError {
    /// Wrong argument count for the requested function.
    #[error("incorrect number of arguments for {function}: expected {expected}, got {actual}")]
    Arity {
        /// Wire name of the function.
        function: &'static str,
        /// Required argument count.
        expected: usize,
        /// Count actually supplied.
        actual: usize,
    },

    /// Function name not routed by the entry point.
    #[error("received unknown function {entry_point}: {function}")]
    UnknownFunction {
        /// Entry point that received the call.
        entry_point: EntryPoint,
        /// Function name as supplied.
        function: String,
    },

    /// Payload is not a well-formed letter of credit.
    #[error("error unmarshal L/C: {0}")]
    Decode(String),

    /// Canonical re-encoding failed.
    #[error("error marshal L/C: {0}")]
    Encode(String),

    /// Underlying get/put failed.
    #[error("state error: {0}")]
    Storage(#[from] StateError),

    /// Read of a key failed or the key is absent.
    #[error("{{\"Error\":\"Failed to get state for {key}\"}}")]
    NotFoundOrStorage {
        /// Key that was read.
        key: String,
    },

    /// Attempt to write the reserved index key through a user path.
    #[error("key {key} is reserved for the L/C index")]
    ReservedKey {
        /// The reserved key.
        key: String,
    },
}

impl ChaincodeError {
    /// Returns true if the invocation was rejected before touching state.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Arity { .. }
                | Self::UnknownFunction { .. }
                | Self::Decode(_)
                | Self::ReservedKey { .. }
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_embeds_key() {
        let err = ChaincodeError::NotFoundOrStorage {
            key: "LC42".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"{"Error":"Failed to get state for LC42"}"#
        );
    }

    #[test]
    fn test_arity_display() {
        let err = ChaincodeError::Arity {
            function: "write",
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "incorrect number of arguments for write: expected 2, got 1"
        );
    }

    #[test]
    fn test_unknown_function_display() {
        let err = ChaincodeError::UnknownFunction {
            entry_point: EntryPoint::Invoke,
            function: "delete".to_string(),
        };
        assert!(err.to_string().contains("invoke"));
        assert!(err.to_string().contains("delete"));
    }

    #[test]
    fn test_state_error_conversion() {
        let err: ChaincodeError = StateError::Unavailable.into();
        assert!(matches!(err, ChaincodeError::Storage(StateError::Unavailable)));
        assert!(!err.is_rejection());
    }

    #[test]
    fn test_rejections() {
        assert!(ChaincodeError::Decode("bad".to_string()).is_rejection());
        assert!(ChaincodeError::ReservedKey {
            key: "lcIndex".to_string()
        }
        .is_rejection());
        assert!(!ChaincodeError::Encode("bad".to_string()).is_rejection());
    }
}
