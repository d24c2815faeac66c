//! Health check handlers.

use axum::Json;
use axum::extract::State;

use drive_core::error::AppError;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /api/health/ready
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthResponse>>, ApiError> {
    if let Err(e) = state.store.health_check().await {
        tracing::warn!(error = %e, "Readiness check failed");
        return Err(AppError::service_unavailable("Backing store unavailable").into());
    }

    Ok(Json(ApiResponse::ok(HealthResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })))
}
