//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::ShowRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance holding the show collection
    pub repository: Arc<dyn ShowRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn ShowRepository>) -> Self {
        Self { repository }
    }
}
