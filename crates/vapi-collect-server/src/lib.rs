//! vapi-collect HTTP API
//!
//! - POST /api/initiate-call - place a collections call
//! - GET /api/call-status/:call_id - current call status
//! - GET /api/health - liveness, no outbound call
//! - /swagger-ui - OpenAPI docs

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use vapi_collect::{CallGateway, CallSettings, CollectionCaller};

pub mod config;
pub mod error;
pub mod models;
pub mod routes;

pub use config::ServerConfig;
pub use error::ApiError;

/// Caller over whichever gateway the server was built with
pub type AppCaller = CollectionCaller<dyn CallGateway>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub caller: Arc<AppCaller>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig, gateway: Arc<dyn CallGateway>) -> Self {
        let settings = CallSettings::new(config.assistant_id.clone().unwrap_or_default())
            .with_phone_number_id(config.phone_number_id.clone())
            .with_server_url(config.server_url.clone());

        Self {
            caller: Arc::new(CollectionCaller::new(gateway, settings)),
            config: Arc::new(config),
        }
    }
}

/// Build the router with shared state
pub fn create_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::health::router())
        .merge(routes::call::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
