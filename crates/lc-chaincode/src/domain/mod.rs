//! # Domain Layer (Inner Hexagon)
//!
//! Pure business logic for the letter-of-credit chaincode.
//! NO I/O, NO async.
//!
//! - Adapters and the service depend on this layer, not vice versa.

pub mod entities;
pub mod invariants;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use invariants::*;
pub use services::*;
pub use value_objects::*;
