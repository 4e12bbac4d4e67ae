//! # Value Objects
//!
//! Routing vocabulary of the host calling convention.
//!
//! The host addresses the chaincode with a function name and a list of
//! string arguments. Names are parsed into the enums below once, at the
//! dispatcher boundary, so every routed operation is covered by an
//! exhaustive `match`.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ENTRY POINT
// =============================================================================

/// One of the three host entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPoint {
    /// Deployment-time initialization.
    Init,
    /// State-changing invocation.
    Invoke,
    /// Read-only query.
    Query,
}

impl EntryPoint {
    /// Returns true if the host commits writes made under this entry point.
    #[must_use]
    pub fn is_mutating(self) -> bool {
        !matches!(self, Self::Query)
    }

    /// Wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Invoke => "invoke",
            Self::Query => "query",
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// INVOKE FUNCTIONS
// =============================================================================

/// Functions routed by the `Invoke` entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvokeFunction {
    /// Re-run initialization (seed the index).
    Init,
    /// Generic key/value set.
    Write,
    /// Decode and store a letter of credit, append its id to the index.
    Create,
}

impl InvokeFunction {
    /// All routed functions.
    pub const ALL: [Self; 3] = [Self::Init, Self::Write, Self::Create];

    /// Parse a host function name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Host function name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Write => "write",
            Self::Create => "create",
        }
    }

    /// Required argument count.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Init | Self::Create => 1,
            Self::Write => 2,
        }
    }
}

// =============================================================================
// QUERY FUNCTIONS
// =============================================================================

/// Functions routed by the `Query` entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryFunction {
    /// Raw get by key.
    Read,
}

impl QueryFunction {
    /// All routed functions.
    pub const ALL: [Self; 1] = [Self::Read];

    /// Parse a host function name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Host function name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Read => "read",
        }
    }

    /// Required argument count.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Read => 1,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
