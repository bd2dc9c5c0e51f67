//! Call Routes - Initiate collections calls and look up their status

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use vapi_collect::{parse_call_request, CollectionPolicy};

use crate::error::ApiError;
use crate::models::{CallStatusResponse, ErrorResponse, InitiateCallBody, InitiateCallResponse};
use crate::AppState;

/// Initiate a Vapi call with invoice collection parameters
#[utoipa::path(
    post,
    path = "/api/initiate-call",
    request_body = InitiateCallBody,
    responses(
        (status = 200, description = "Call created", body = InitiateCallResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 500, description = "Gateway or credential failure", body = ErrorResponse)
    ),
    tag = "Call"
)]
pub async fn initiate_call(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<InitiateCallResponse>, ApiError> {
    let request = parse_call_request(&body, &state.config.default_phone_number)?;

    tracing::debug!(request = ?request, "Received initiate-call request");

    let call = state
        .caller
        .initiate(request, &CollectionPolicy::default())
        .await?;

    Ok(Json(call.into()))
}

/// Get the status of a Vapi call
#[utoipa::path(
    get,
    path = "/api/call-status/{call_id}",
    params(("call_id" = String, Path, description = "Vapi call ID")),
    responses(
        (status = 200, description = "Current call status", body = CallStatusResponse),
        (status = 500, description = "Gateway or credential failure", body = ErrorResponse)
    ),
    tag = "Call"
)]
pub async fn get_call_status(
    State(state): State<AppState>,
    Path(call_id): Path<String>,
) -> Result<Json<CallStatusResponse>, ApiError> {
    let report = state.caller.status(&call_id).await?;
    Ok(Json(report.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/initiate-call", post(initiate_call))
        .route("/api/call-status/:call_id", get(get_call_status))
}
