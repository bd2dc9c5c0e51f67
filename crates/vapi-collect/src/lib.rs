//! vapi-collect Domain Library
//!
//! Core types and interfaces for relaying invoice-collection calls to the
//! Vapi voice platform.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure data shaping
//!   - `entities/`: CallRequest, VariableMap, CollectionPolicy, call envelopes
//!   - `services/`: Input normalization, variable building, response adaptation,
//!     and the `CollectionCaller` that strings them together
//!   - `errors/`: Domain error type
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `CallGateway`: outbound call creation and status lookup
//!
//! # Usage
//!
//! ```rust,ignore
//! use vapi_collect::{CallSettings, CollectionCaller, CollectionPolicy};
//!
//! let caller = CollectionCaller::new(gateway, CallSettings::new(assistant_id));
//! let call = caller.initiate(&request, &CollectionPolicy::default()).await?;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    build_variables, call_metadata, extract_call_result, extract_status_report, format_cents,
    min_payment_amount, normalize_call_request, normalize_phone, parse_call_request,
    AssistantOverrides, CallRequest, CallResult, CallSettings, CallStatusReport,
    CollectionCaller, CollectionPolicy, CreateCallRequest, Customer, DomainError, InitiatedCall,
    ServerEndpoint, VariableMap, DEFAULT_INVOICE_AMOUNT_CENTS, DEFAULT_TEST_PHONE_NUMBER,
    SERVER_MESSAGES,
};
pub use ports::CallGateway;
