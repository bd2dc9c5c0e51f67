//! API error responses
//!
//! Every failure leaves the service as `{success: false, error}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use vapi_collect::DomainError;

use crate::models::ErrorResponse;

/// Domain error on its way out of a handler
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    /// Malformed request bodies are the caller's fault; everything else is 500
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::warn!(error = %self.0, "Rejected request");
        }

        (status, Json(ErrorResponse::new(self.0.to_string()))).into_response()
    }
}
