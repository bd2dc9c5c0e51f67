//! Health Route

use axum::{extract::State, routing::get, Json, Router};

use crate::models::HealthResponse;
use crate::AppState;

pub const SERVICE_NAME: &str = "vapi-voice-agent";

/// Report liveness. Never contacts the voice platform.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        assistant_id: state.config.assistant_id.clone(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health_check))
}
