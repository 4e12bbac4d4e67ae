//! # Record Index Manager
//!
//! The ledger state has no enumeration, so the ids of created records are
//! kept in one list under a reserved key. The list only grows.
//!
//! The append is a read-modify-write over two host calls and is not atomic:
//! two concurrent creates can each read the same list and the later write
//! drops the other's id. The host store exposes no compare-and-swap, so the
//! race is left to the runtime's read/write conflict detection.

use crate::domain::entities::RecordIndex;
use crate::domain::services::{decode_index, encode_index};
use crate::errors::ChaincodeError;
use crate::ports::outbound::StateAccess;
use tracing::{debug, warn};

/// Handle over the index entry of one state accessor.
pub struct IndexManager<'a, S: StateAccess + ?Sized> {
    state: &'a S,
    key: &'a str,
}

impl<'a, S: StateAccess + ?Sized> IndexManager<'a, S> {
    /// Bind to the index stored under `key`.
    pub fn new(state: &'a S, key: &'a str) -> Self {
        Self { state, key }
    }

    /// The reserved key.
    #[must_use]
    pub fn key(&self) -> &str {
        self.key
    }

    /// Store `seed` verbatim as the index value.
    ///
    /// The seed is not validated; anything that is not a JSON list is
    /// replaced by the next [`append`](Self::append).
    ///
    /// # Errors
    ///
    /// Returns `ChaincodeError::Storage` if the put fails.
    pub async fn seed(&self, seed: &str) -> Result<(), ChaincodeError> {
        self.state
            .put_state(self.key, seed.as_bytes().to_vec())
            .await?;
        debug!(key = self.key, seed_len = seed.len(), "Index seeded");
        Ok(())
    }

    /// Read the current index.
    ///
    /// Absent or empty values load as an empty index. A present value that
    /// is not a list of ids also loads as empty, with a warning.
    ///
    /// # Errors
    ///
    /// Returns `ChaincodeError::Storage` if the get fails.
    pub async fn load(&self) -> Result<RecordIndex, ChaincodeError> {
        let bytes = self.state.get_state_or_empty(self.key).await?;
        match decode_index(&bytes) {
            Ok(index) => Ok(index),
            Err(e) => {
                warn!(key = self.key, error = %e, "Index value is not an id list, starting empty");
                Ok(RecordIndex::new())
            }
        }
    }

    /// Append `id` and write the index back.
    ///
    /// No dedup and no existence check against other ids.
    ///
    /// # Returns
    ///
    /// * The index as written
    ///
    /// # Errors
    ///
    /// Returns `ChaincodeError::Storage` if the get or put fails, and
    /// `ChaincodeError::Encode` if the list cannot be encoded.
    pub async fn append(&self, id: &str) -> Result<RecordIndex, ChaincodeError> {
        let mut index = self.load().await?;
        let duplicate = index.contains(id);
        index.push(id);

        let bytes = encode_index(&index)?;
        self.state.put_state(self.key, bytes).await?;

        debug!(key = self.key, id, duplicate, entries = index.len(), "Index appended");
        Ok(index)
    }
}

// =============================================================================
// TESTS
// =============================================================================
