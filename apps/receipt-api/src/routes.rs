//! HTTP handlers.
//!
//! ```text
//! POST /receipts/process      Receipt JSON  → {"id": "..."}
//! GET  /receipts/{id}/points                → {"points": N}
//! GET  /health                              → OK
//! ```

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use receipt_core::Receipt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

/// Body of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// Body of a successful points query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Validates and stores a submitted receipt.
pub async fn process_receipt(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(receipt) = payload.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Unreadable receipt body");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::payload_too_large(state.config.max_body_bytes)
        } else {
            ApiError::malformed()
        }
    })?;

    let id = state.service.process_receipt(&receipt).await?;
    Ok(Json(ProcessResponse { id }))
}

/// Returns the points awarded to a stored receipt.
pub async fn receipt_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = state.service.receipt_points(&id).await?;
    Ok(Json(PointsResponse { points }))
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    "OK"
}
