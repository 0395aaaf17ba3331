//! # Receipt API
//!
//! HTTP server that scores purchase receipts.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API Server                              │
//! │                                                                         │
//! │  Client ───► axum Router ───► ReceiptService ───► ReceiptStore          │
//! │                  │                  │                                   │
//! │                  │                  ▼                                   │
//! │                  │          receipt_core::validate                      │
//! │                  │          receipt_core::points_breakdown              │
//! │                  ▼                                                      │
//! │              ApiError (JSON)                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `RECEIPT_API_BIND_ADDR` - listen address (default: 0.0.0.0)
//! - `RECEIPT_API_PORT` - HTTP port (default: 8080)
//! - `RECEIPT_API_MAX_BODY_BYTES` - request body limit (default: 1048576)
//! - `RUST_LOG` - log filter (default: info)

pub mod config;
pub mod error;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use receipt_store::ReceiptStore;

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ErrorCode};
pub use services::{ReceiptService, ServiceError};

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    pub service: ReceiptService,
    pub config: ApiConfig,
}

impl AppState {
    /// State backed by a fresh, empty store.
    pub fn new(config: ApiConfig) -> Self {
        AppState {
            service: ReceiptService::new(Arc::new(ReceiptStore::new())),
            config,
        }
    }
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/receipts/process", post(routes::process_receipt))
        .route("/receipts/{id}/points", get(routes::receipt_points))
        .route("/health", get(routes::health))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
