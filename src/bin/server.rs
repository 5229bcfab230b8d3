//! TV-Show Catalog HTTP Server Binary
//!
//! Entry point for the catalog REST API server. It seeds the in-memory
//! repository, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin tvshows-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3000)
//! - `STATIC_DIR`: Directory of static assets (default: public)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use tvshows_rust::db::repository::ShowRepository;
use tvshows_rust::db::LocalRepository;
use tvshows_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting TV-show catalog server");

    // Seed the in-memory repository and share it across handlers
    let repository = LocalRepository::new();
    info!("Seeded repository with {} shows", repository.show_count());
    let repository = Arc::new(repository) as Arc<dyn ShowRepository>;

    // Create application state and router
    let state = AppState::new(repository);
    let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());
    let app = create_router(state, &static_dir);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
