//! HTTP server module for the show catalog.
//!
//! This module provides an axum-based HTTP facade over the service layer and
//! the in-memory repository. Handlers translate requests directly into
//! service calls and map repository errors to bare status codes.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
