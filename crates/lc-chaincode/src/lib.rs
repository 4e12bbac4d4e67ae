//! # LC Chaincode - Letter-of-Credit Ledger State Handler
//!
//! ## Purpose
//!
//! Request-dispatch and state-mutation logic hosted by a ledger execution
//! runtime. The runtime routes invocations here, this crate reads and writes
//! the runtime's key-value state, and the runtime commits the writes on
//! success or discards them on error.
//!
//! ## Entry Points
//!
//! | Entry point | Function | Args | Effect |
//! |-------------|----------|------|--------|
//! | `init` | (ignored) | 1 | seed the index |
//! | `invoke` | `init` | 1 | re-seed the index |
//! | `invoke` | `write` | 2 | raw key/value set |
//! | `invoke` | `create` | 1 | store an L/C under its id, append id to index |
//! | `query` | `read` | 1 | raw get by key |
//!
//! ## State Layout
//!
//! | Key | Value |
//! |-----|-------|
//! | `<cusip>` | L/C as compact JSON |
//! | `lcIndex` (configurable) | JSON array of ids in creation order |
//! | anything else | raw bytes from `write` |
//!
//! ## Outbound Dependencies
//!
//! | Capability | Trait | Purpose |
//! |------------|-------|---------|
//! | Ledger state | `StateAccess` | `GetState` / `PutState` |
//!
//! ## Usage Example
//!
//! ```ignore
//! use lc_chaincode::prelude::*;
//!
//! let service = ChaincodeService::new(host_state, ChaincodeConfig::from_env());
//! service.init("init", &["[]".to_string()]).await?;
//! service.invoke("create", &[payload]).await?;
//! let bytes = service.query("read", &["LC1".to_string()]).await?;
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod index;
pub mod ports;
pub mod service;
pub mod telemetry;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{LetterOfCredit, RecordIndex};

    // Value objects
    pub use crate::domain::value_objects::{EntryPoint, InvokeFunction, QueryFunction};

    // Record codec
    pub use crate::domain::services::{decode_index, decode_record, encode_index, encode_record};

    // Ports
    pub use crate::ports::inbound::ChaincodeApi;
    pub use crate::ports::outbound::StateAccess;

    // Events
    pub use crate::events::{InvocationRequestPayload, InvocationResponsePayload};

    // Errors
    pub use crate::errors::{ChaincodeError, StateError};

    // Config
    pub use crate::config::{ChaincodeConfig, DEFAULT_INDEX_KEY};

    // Index
    pub use crate::index::IndexManager;

    // Adapters
    pub use crate::adapters::InMemoryState;

    // Service
    pub use crate::service::{create_test_service, ChaincodeService};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Chaincode name.
pub const CHAINCODE_NAME: &str = "lc-chaincode";

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_exports() {
        // Verify prelude exports compile
        use prelude::*;
        let _ = ChaincodeConfig::default();
        let _ = RecordIndex::new();
        assert_eq!(DEFAULT_INDEX_KEY, "lcIndex");
    }
}
