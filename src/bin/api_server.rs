// API Server Binary Entry Point
//
// Purpose: Start the Axum server for the catalog pages
// Usage: cargo run --bin api_server

use porsche_catalog::{AppConfig, AppState, create_router};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "porsche_catalog=info,tower_http=debug,axum=debug,warn";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    // LOG_FORMAT=json for log shippers, human-readable otherwise
    if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting catalog server...");

    let config = AppConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  CATALOG_URL: {}", config.catalog_url);
    tracing::info!("  STATIC_DIR: {}", config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let state = AppState::new(config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://localhost:{}", addr.port());

    axum::serve(listener, app)
        .await?;

    Ok(())
}
