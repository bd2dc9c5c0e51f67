//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer talks to the
//! voice platform. Implementations live in adapter crates.

mod gateway;

pub use gateway::*;
