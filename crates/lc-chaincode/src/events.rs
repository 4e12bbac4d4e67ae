//! # Invocation Envelopes
//!
//! Serializable request/response payloads mirroring the host runtime's
//! calling convention: an entry point, a function name and a list of
//! string arguments in; result bytes or an error message out.
//!
//! All request/response pairs carry the same `correlation_id`.

use crate::domain::value_objects::EntryPoint;
use crate::errors::ChaincodeError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// INBOUND
// =============================================================================

/// One invocation scheduled by the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationRequestPayload {
    /// Correlation ID echoed in the response.
    pub correlation_id: Uuid,
    /// Which entry point to drive.
    pub entry_point: EntryPoint,
    /// Requested function name (ignored by `init`).
    #[serde(default)]
    pub function: String,
    /// Ordered string arguments.
    #[serde(default)]
    pub args: Vec<String>,
}

impl InvocationRequestPayload {
    /// Build a request with a fresh correlation ID.
    pub fn new<I, A>(entry_point: EntryPoint, function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            correlation_id: Uuid::new_v4(),
            entry_point,
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

// =============================================================================
// OUTBOUND
// =============================================================================

/// Result of one invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResponsePayload {
    /// Correlation ID from the request.
    pub correlation_id: Uuid,
    /// Whether the host should commit this invocation's writes.
    pub success: bool,
    /// Result bytes (empty for mutating functions).
    pub payload: Vec<u8>,
    /// Error message (if failed).
    pub error: Option<String>,
}

impl InvocationResponsePayload {
    /// Build a response from an entry point's result.
    #[must_use]
    pub fn from_result(correlation_id: Uuid, result: Result<Vec<u8>, ChaincodeError>) -> Self {
        match result {
            Ok(payload) => Self {
                correlation_id,
                success: true,
                payload,
                error: None,
            },
            Err(e) => Self {
                correlation_id,
                success: false,
                payload: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
