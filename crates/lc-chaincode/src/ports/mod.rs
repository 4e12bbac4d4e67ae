//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions between the chaincode domain and the host runtime.
//!
//! - **Driving Port (Inbound)**: `ChaincodeApi`
//! - **Driven Port (Outbound)**: `StateAccess`
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
