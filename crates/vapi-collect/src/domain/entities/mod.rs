//! Domain Entities
//!
//! Per-request models; nothing here outlives a single request.
//! - CallRequest: business fields for one collections call
//! - VariableMap / CollectionPolicy: assistant prompt variables
//! - Call envelopes: the create-call payload and normalized results

mod call;
mod call_request;
mod variables;

pub use call::*;
pub use call_request::*;
pub use variables::*;
