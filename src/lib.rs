//! # TV-Show Catalog Backend
//!
//! In-memory TV-show catalog with a REST facade.
//!
//! This crate holds an ordered collection of TV-show records, seeded from a
//! static dataset, and exposes list/filter/get/create/update/delete operations
//! over HTTP via Axum. There is no persistence: the collection lives in process
//! memory and is restored to the seed dataset on startup and on explicit reseed.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: The `Show` domain type (an open, extensible record)
//! - [`db`]: Repository trait, in-memory implementation, and service layer
//! - [`http`]: Axum-based HTTP server and request handlers
//!

pub mod db;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
