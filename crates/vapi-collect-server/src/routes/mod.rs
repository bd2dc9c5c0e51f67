//! API Routes
//!
//! - /api/initiate-call, /api/call-status/:call_id - Call placement and lookup
//! - /api/health - Health check

pub mod call;
pub mod health;
pub mod swagger;
