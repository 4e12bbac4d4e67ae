//! # State Adapter
//!
//! In-memory ledger state for testing and local embedding.
//! Production hosts supply their own `StateAccess` bound to the runtime's
//! `GetState` / `PutState` calls.

use crate::errors::StateError;
use crate::ports::outbound::StateAccess;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::RwLock;

/// In-memory key-value state.
///
/// Supports per-key failure injection so tests can exercise the
/// storage-error paths of the dispatcher.
#[derive(Debug, Default)]
pub struct InMemoryState {
    /// Committed entries.
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
    /// Keys whose `get_state` fails.
    failing_gets: RwLock<HashSet<String>>,
    /// Keys whose `put_state` fails.
    failing_puts: RwLock<HashSet<String>>,
    /// Successful puts so far.
    put_count: RwLock<u64>,
}

impl InMemoryState {
    /// Create a new empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `get_state(key)` fail.
    pub fn fail_get_on(&self, key: impl Into<String>) {
        if let Ok(mut keys) = self.failing_gets.write() {
            keys.insert(key.into());
        }
    }

    /// Make every subsequent `put_state(key, _)` fail.
    pub fn fail_put_on(&self, key: impl Into<String>) {
        if let Ok(mut keys) = self.failing_puts.write() {
            keys.insert(key.into());
        }
    }

    /// Clear all injected failures.
    pub fn clear_failures(&self) {
        if let Ok(mut keys) = self.failing_gets.write() {
            keys.clear();
        }
        if let Ok(mut keys) = self.failing_puts.write() {
            keys.clear();
        }
    }

    /// Copy of all entries, ordered by key.
    ///
    /// # Errors
    ///
    /// Returns `StateError::LockPoisoned` if the store lock is poisoned.
    pub fn snapshot(&self) -> Result<BTreeMap<String, Vec<u8>>, StateError> {
        let entries = self.entries.read().map_err(|_| StateError::LockPoisoned)?;
        Ok(entries.clone())
    }

    /// Number of successful puts.
    #[must_use]
    pub fn put_count(&self) -> u64 {
        self.put_count.read().map(|c| *c).unwrap_or_default()
    }

    fn is_failing(set: &RwLock<HashSet<String>>, key: &str) -> Result<bool, StateError> {
        let keys = set.read().map_err(|_| StateError::LockPoisoned)?;
        Ok(keys.contains(key))
    }
}

#[async_trait]
impl StateAccess for InMemoryState {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        if Self::is_failing(&self.failing_gets, key)? {
            return Err(StateError::Rejected(format!("get {key}")));
        }
        let entries = self.entries.read().map_err(|_| StateError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StateError> {
        if Self::is_failing(&self.failing_puts, key)? {
            return Err(StateError::Rejected(format!("put {key}")));
        }
        {
            let mut entries = self.entries.write().map_err(|_| StateError::LockPoisoned)?;
            entries.insert(key.to_string(), value);
        }
        let mut count = self.put_count.write().map_err(|_| StateError::LockPoisoned)?;
        *count += 1;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_put_state() {
        let state = InMemoryState::new();

        // Initially absent
        assert_eq!(state.get_state("k").await.unwrap(), None);

        state.put_state("k", b"v1".to_vec()).await.unwrap();
        assert_eq!(state.get_state("k").await.unwrap(), Some(b"v1".to_vec()));

        // Overwrite
        state.put_state("k", b"v2".to_vec()).await.unwrap();
        assert_eq!(state.get_state("k").await.unwrap(), Some(b"v2".to_vec()));
        assert_eq!(state.put_count(), 2);
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let state = InMemoryState::new();
        state.fail_put_on("locked");
        state.fail_get_on("hidden");

        assert!(matches!(
            state.put_state("locked", vec![1]).await,
            Err(StateError::Rejected(_))
        ));
        assert!(state.get_state("hidden").await.is_err());

        // Other keys are unaffected
        state.put_state("open", vec![1]).await.unwrap();
        assert_eq!(state.put_count(), 1);

        state.clear_failures();
        state.put_state("locked", vec![2]).await.unwrap();
        assert_eq!(state.get_state("hidden").await.unwrap(), None);
    }
}
