//! # Driven Ports (SPI - Outbound)
//!
//! The one capability the chaincode depends on: the ledger's key-value
//! state, exposed by the host runtime.
//!
//! - Keys are arbitrary strings, values opaque bytes
//! - No enumeration, no range queries, no compare-and-swap
//! - Writes are staged by the host and committed only if the invocation
//!   returns `Ok`

use crate::errors::StateError;
use async_trait::async_trait;

// =============================================================================
// STATE ACCESS
// =============================================================================

/// Interface to the ledger key-value state.
///
/// ## Implementation Notes
///
/// The host-side adapter translates these calls to the runtime's
/// `GetState` / `PutState` messages. Absence of a key is not an error at
/// this layer; callers decide what absence means.
#[async_trait]
pub trait StateAccess: Send + Sync {
    /// Get the value stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Some(bytes)` - If the key holds a value
    /// * `None` - If the key was never written
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StateError>;

    /// Get the value under `key`, treating absence as empty bytes.
    async fn get_state_or_empty(&self, key: &str) -> Result<Vec<u8>, StateError> {
        Ok(self.get_state(key).await?.unwrap_or_default())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Mock implementation for testing
    struct MockStateAccess;

    #[async_trait]
    impl StateAccess for MockStateAccess {
        async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
            Ok((key == "present").then(|| b"value".to_vec()))
        }

        async fn put_state(&self, _key: &str, _value: Vec<u8>) -> Result<(), StateError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_absent_key_reads_as_empty() {
        let state = MockStateAccess;

        let value = state.get_state_or_empty("present").await.unwrap();
        assert_eq!(value, b"value");

        let value = state.get_state_or_empty("missing").await.unwrap();
        assert!(value.is_empty());
    }
}
