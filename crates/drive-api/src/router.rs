//! Route definitions for the CloudDrive HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::Router;
use axum::routing::{get, patch, post};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(file_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Breadcrumb, listing, folder creation, and move
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", get(handlers::files::list_files))
        .route("/files/path", get(handlers::files::get_path))
        .route("/files/folder", post(handlers::files::create_folder))
        .route("/files/{id}/move", patch(handlers::files::move_file))
}

/// Liveness and readiness
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/ready", get(handlers::health::ready))
}
