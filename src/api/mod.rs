pub mod surat;
pub mod upload;

use crate::config::AppConfig;
use crate::state::AppState;
use anyhow::Result;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub async fn create_router(config: &AppConfig) -> Result<Router<AppState>> {
    let router = Router::new()
        .route("/status", get(status_handler))
        .nest("/surat", surat::create_router().await?)
        .merge(upload::create_router(config).await?);

    Ok(router)
}

/// Full application: `/api` routes plus the root banner and health check,
/// wrapped in permissive CORS and HTTP tracing.
pub async fn create_app(app_state: AppState) -> Result<Router> {
    let app = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .nest("/api", create_router(&app_state.config).await?)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    Ok(app)
}

async fn status_handler() -> &'static str {
    "API is running"
}

async fn root_handler() -> &'static str {
    "Surat-RS: Surat Keterangan API"
}

async fn health_handler() -> &'static str {
    "OK"
}
