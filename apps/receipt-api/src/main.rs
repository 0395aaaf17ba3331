//! # Receipt API
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Receipt API Server                               │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► ReceiptService ───► ReceiptStore          │
//! │                                                   (in memory)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use receipt_api::{router, ApiConfig, AppState};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    info!("Starting Receipt API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        max_body_bytes = config.max_body_bytes,
        "Configuration loaded"
    );

    let bind_addr = config.bind_address();
    let state = Arc::new(AppState::new(config));
    let app = router(state);

    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Receipt API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
