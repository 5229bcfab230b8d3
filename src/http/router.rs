//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! static file serving, and creates the axum router ready for serving.

use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
///
/// `static_dir` is served for any path not matched by a route; it may be
/// missing on disk, in which case those requests simply 404.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::greeting))
        .route("/db/seed", post(handlers::seed_database))
        // Show CRUD
        .route("/tv-shows", get(handlers::list_tv_shows))
        .route("/tv-shows", post(handlers::create_tv_show))
        .route("/tv-shows/{id}", get(handlers::get_tv_show))
        .route("/tv-shows/{id}", put(handlers::update_tv_show))
        .route("/tv-shows/{id}", delete(handlers::delete_tv_show))
        // Static assets (poster images etc.)
        .fallback_service(ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
