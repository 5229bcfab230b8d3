//! Core show repository trait for CRUD operations.
//!
//! This trait defines the catalog operations the HTTP facade is built on.
//! The storage backend is abstract so tests can swap in fresh instances, but
//! the only shipped implementation is the in-memory
//! [`LocalRepository`](crate::db::repositories::LocalRepository).

mod error;

pub use error::{RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::models::Show;

/// Repository trait for show catalog operations.
///
/// Every mutating operation must treat its lookup-then-mutate sequence as a
/// single critical section with respect to other mutations, so concurrent
/// requests cannot observe lost updates or mint duplicate ids.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ShowRepository: Send + Sync {
    /// List all shows in insertion order.
    async fn list_shows(&self) -> RepositoryResult<Vec<Show>>;

    /// Retrieve a single show by exact id match.
    ///
    /// # Returns
    /// * `Ok(Show)` - The matching record
    /// * `Err(RepositoryError::NotFound)` - If no record has that id
    async fn get_show(&self, id: &str) -> RepositoryResult<Show>;

    /// Append a new show to the collection.
    ///
    /// The stored record gets a freshly generated unique id; any
    /// caller-supplied id in the payload is discarded.
    ///
    /// # Returns
    /// * `Ok(Show)` - The stored record, including the assigned id
    async fn create_show(&self, payload: Show) -> RepositoryResult<Show>;

    /// Replace the show at `id` wholesale with `payload`.
    ///
    /// The payload is stored as given: its own `id` field (or the absence of
    /// one) becomes the record's identity, and fields missing from the
    /// payload are gone afterwards.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no record has the lookup id
    async fn update_show(&self, id: &str, payload: Show) -> RepositoryResult<()>;

    /// Remove the show at `id`, preserving the order of the remainder.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no record has that id
    async fn delete_show(&self, id: &str) -> RepositoryResult<()>;

    /// Replace the entire collection with a fresh copy of the seed dataset,
    /// discarding all prior mutations.
    async fn reseed(&self) -> RepositoryResult<()>;
}
