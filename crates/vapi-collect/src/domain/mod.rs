//! Domain Layer
//!
//! Pure data shaping without infrastructure dependencies.
//! Contains entities, domain services, and errors.

pub mod entities;
pub mod errors;
pub mod services;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use services::*;
