//! OpenAPI Documentation

use utoipa::OpenApi;

use crate::models::{
    CallStatusResponse, ErrorResponse, HealthResponse, InitiateCallBody, InitiateCallResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::health_check,
        super::call::initiate_call,
        super::call::get_call_status,
    ),
    info(
        title = "vapi-collect API",
        version = "0.1.0",
        description = "Relay invoice-collection calls to the Vapi voice platform.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Call", description = "Call - initiate collections calls and query status"),
    ),
    components(
        schemas(
            InitiateCallBody,
            InitiateCallResponse,
            CallStatusResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
