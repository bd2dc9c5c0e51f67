//! Full path: router → VapiGateway → local stand-in for the Vapi API

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceExt;

use vapi_collect_gateway::{VapiConfig, VapiGateway};
use vapi_collect_server::{create_router, AppState, ServerConfig};

type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

async fn record_call(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    seen.lock().unwrap().push((auth, body));
    (
        StatusCode::CREATED,
        Json(json!({"id": "call_e2e", "status": "queued"})),
    )
}

#[tokio::test]
async fn test_initiate_call_end_to_end() {
    let seen: Seen = Arc::default();
    let fake = Router::new()
        .route("/call", post(record_call))
        .with_state(seen.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, fake).await.expect("serve fake vapi") });

    let config = ServerConfig {
        assistant_id: Some("asst_e2e".to_string()),
        vapi: VapiConfig::new("e2e-key").with_api_url(format!("http://{addr}/call")),
        ..ServerConfig::default()
    };
    let gateway = VapiGateway::new(config.vapi.clone()).expect("gateway");
    let app = create_router(AppState::new(config, Arc::new(gateway)));

    let request = Request::builder()
        .method("POST")
        .uri("/api/initiate-call")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({"phoneNumber": "17657469771", "invoiceAmountCents": 50000}).to_string(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["callId"], "call_e2e");
    assert_eq!(body["phoneNumber"], "+17657469771");
    assert_eq!(body["amount"], "$500.00");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1, "exactly one outbound POST");
    let (auth, payload) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer e2e-key"));
    assert_eq!(payload["assistantId"], "asst_e2e");
    assert_eq!(payload["customer"]["number"], "+17657469771");
    assert!(payload.get("phoneNumberId").is_none());

    let overrides = payload["assistantOverrides"].as_object().unwrap();
    assert_eq!(overrides.len(), 1, "no metadata or webhook without ids/server url");

    let variables = overrides["variableValues"].as_object().unwrap();
    assert_eq!(variables.len(), 31);
    assert_eq!(variables["formattedAmount"], "$500.00");
    assert_eq!(variables["minPaymentAmount"], "$125.00");
    assert_eq!(variables["totalOutstanding"], "$500.00");
    assert_eq!(variables["maxInstallments"], 3);
    assert_eq!(variables["contactWindowStart"], "09:00");
}
