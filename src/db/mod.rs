//! Storage module for the show catalog.
//!
//! This module provides abstractions for catalog operations via the Repository
//! pattern, with a thin service layer carrying the business rules on top.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API)                           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic           │
//! │  - Payload validation                                    │
//! │  - Genre-intersection filtering                          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The catalog has no durable backend: the only repository implementation is
//! [`LocalRepository`], which keeps an ordered `Vec<Show>` behind a lock and is
//! reseeded wholesale from the static dataset in [`seed`].

pub mod repositories;
pub mod repository;
pub mod seed;
pub mod services;


pub use repositories::LocalRepository;
pub use repository::{RepositoryError, RepositoryResult, ShowRepository};
pub use seed::seed_shows;
