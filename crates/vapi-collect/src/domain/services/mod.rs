//! Domain Services
//!
//! - normalizer: raw request body → CallRequest
//! - variable_builder: CallRequest → VariableMap
//! - response_adapter: platform JSON → CallResult / CallStatusReport
//! - caller: the full initiate / status flow over a CallGateway

mod caller;
mod normalizer;
mod response_adapter;
mod variable_builder;

pub use caller::*;
pub use normalizer::*;
pub use response_adapter::*;
pub use variable_builder::*;
