//! Vapi Gateway for vapi-collect
//!
//! reqwest implementation of the [`vapi_collect::CallGateway`] port.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vapi_collect_gateway::{VapiConfig, VapiGateway};
//!
//! let config = VapiConfig::from_env();
//! let gateway = VapiGateway::new(config)?;
//! ```

mod client;
mod config;

pub use client::VapiGateway;
pub use config::{VapiConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
