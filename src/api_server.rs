// Axum Server Module
//
// Purpose: router, shared state and error responses for the catalog pages.
// Every page handler fetches the catalog itself; the state only carries the
// configuration and a pooled HTTP client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use std::sync::Arc;

use crate::config::AppConfig;
use crate::data::{CatalogClient, FetchError};
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: CatalogClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let catalog = CatalogClient::new(http, config.catalog_url.clone());
        Ok(Self::from_parts(config, catalog))
    }

    pub fn from_parts(config: AppConfig, catalog: CatalogClient) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // HTML pages
        .route("/", get(pages::index_page))
        .route("/porsches/:id", get(pages::detail_page))
        .route("/manufacturer/:id", get(pages::manufacturer_page))

        // Anything else is looked up under the static directory (css, images)
        .fallback_service(static_files)

        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http()) // Request logging
                .layer(CompressionLayer::new()), // gzip + brotli compression
        )
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            AppError::Fetch(e) => {
                tracing::error!("Catalog fetch failed: {}", e);
                (StatusCode::BAD_GATEWAY, "Upstream catalog unavailable")
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error")
            }
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_plain_404() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn test_fetch_error_is_bad_gateway() {
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::from(FetchError::Decode {
            url: "http://upstream/porsche.json".to_string(),
            source: decode,
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
