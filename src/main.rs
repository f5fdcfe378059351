use anyhow::Result;
use surat_rs::{api, AppConfig, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "surat_rs=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::new()?;
    let bind_address = config.bind_address();

    info!("Starting Surat-RS server on {}", bind_address);

    let app_state = AppState::new(config);

    info!("Serving uploads from {}", app_state.file_store.root().display());
    info!("Surat store initialized with {} records", app_state.surat_repository.count().await);

    // Build application router
    let app = api::create_app(app_state).await?;

    // Create TCP listener
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Server is running on port {}", listener.local_addr()?.port());

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
