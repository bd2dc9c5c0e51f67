use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use vapi_collect_gateway::VapiGateway;
use vapi_collect_server::{create_router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "vapi_collect=info,vapi_collect_server=info,vapi_collect_gateway=info,tower_http=info"
                .into()
        }))
        .init();

    tracing::info!("📞 vapi-collect API initializing...");

    let config = ServerConfig::from_env();
    for name in config.missing_credentials() {
        tracing::warn!(
            "⚠️  No {} set - call initiation will fail until it is configured",
            name
        );
    }
    if config.server_url.is_none() {
        tracing::info!("No VAPI_SERVER_URL set - calls will not register a webhook");
    }

    let gateway = VapiGateway::new(config.vapi.clone()).context("Failed to build Vapi gateway")?;
    tracing::info!(api_url = %config.vapi.api_url, "🔌 Vapi gateway ready");

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(config, Arc::new(gateway));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(%addr, "📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ vapi-collect API ready at http://{}/api/", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
