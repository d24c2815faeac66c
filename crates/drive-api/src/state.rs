//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use drive_auth::JwtDecoder;
use drive_core::config::AppConfig;
use drive_database::store::FileStore;
use drive_service::file::FileService;
use drive_service::folder::PathResolver;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Node store (PostgreSQL or in-memory)
    pub store: Arc<dyn FileStore>,

    // ── Auth ─────────────────────────────────────────────────
    /// Identity token validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Breadcrumb path resolver
    pub path_resolver: Arc<PathResolver>,
    /// Listing and move service
    pub file_service: Arc<FileService>,
}

impl AppState {
    /// Wires services around the given store.
    pub fn new(config: AppConfig, store: Arc<dyn FileStore>) -> Self {
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let path_resolver = Arc::new(PathResolver::new(Arc::clone(&store), &config.folders));
        let file_service = Arc::new(FileService::new(
            Arc::clone(&store),
            Arc::clone(&path_resolver),
        ));

        Self {
            config: Arc::new(config),
            store,
            jwt_decoder,
            path_resolver,
            file_service,
        }
    }
}
