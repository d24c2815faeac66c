//! # drive-api
//!
//! HTTP API layer for CloudDrive built on Axum.
//!
//! Provides the REST endpoints, middleware (request logging, CORS,
//! compression, timeouts), the authenticated-caller extractor, DTOs, and
//! error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
