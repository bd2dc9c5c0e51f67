//! Call Gateway Port
//!
//! Abstract interface for the voice platform's call endpoints.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::CreateCallRequest;
use crate::domain::errors::DomainError;

/// Outbound call gateway
///
/// Every method is a single attempt: no retry, no backoff. A non-2xx answer
/// must surface as [`DomainError::Gateway`] with the upstream status and body
/// text verbatim; connection failures and timeouts as
/// [`DomainError::Transport`].
///
/// # Example
///
/// ```rust,ignore
/// use vapi_collect::CallGateway;
///
/// struct VapiGateway { /* reqwest client */ }
///
/// #[async_trait]
/// impl CallGateway for VapiGateway {
///     async fn create_call(&self, request: &CreateCallRequest) -> Result<Value, DomainError> {
///         // POST with bearer auth
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait CallGateway: Send + Sync {
    /// Create an outbound call and return the platform's raw response
    async fn create_call(&self, request: &CreateCallRequest) -> Result<Value, DomainError>;

    /// Fetch the platform's current view of a call
    async fn get_call(&self, call_id: &str) -> Result<Value, DomainError>;
}
