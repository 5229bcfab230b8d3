//! In-memory local repository implementation.
//!
//! All records live in an ordered `Vec<Show>` behind an `RwLock`. Mutating
//! operations hold the write lock across the whole lookup-then-mutate
//! sequence, which is the entire concurrency story of this service: no lost
//! updates, no duplicate ids, no partial states.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::repository::{RepositoryError, RepositoryResult, ShowRepository};
use crate::db::seed;
use crate::models::Show;

/// In-memory show repository.
///
/// `new()` starts from the seed dataset; construct one per test for
/// isolation, or use [`LocalRepository::with_shows`] to start from custom
/// records.
///
/// # Example
/// ```
/// use tvshows_rust::db::{LocalRepository, ShowRepository};
///
/// # async fn example() {
/// let repo = LocalRepository::new();
/// let shows = repo.list_shows().await.unwrap();
/// assert_eq!(shows.len(), 8);
/// # }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    shows: Arc<RwLock<Vec<Show>>>,
}

impl LocalRepository {
    /// Create a repository populated with the seed dataset.
    pub fn new() -> Self {
        Self::with_shows(seed::seed_shows().to_vec())
    }

    /// Create a repository holding exactly `shows`.
    pub fn with_shows(shows: Vec<Show>) -> Self {
        Self {
            shows: Arc::new(RwLock::new(shows)),
        }
    }

    /// Create a repository with no records at all.
    pub fn empty() -> Self {
        Self::with_shows(Vec::new())
    }

    /// Get the number of shows stored.
    pub fn show_count(&self) -> usize {
        self.shows.read().unwrap().len()
    }

    /// Check if a show with the given id exists.
    pub fn has_show(&self, id: &str) -> bool {
        self.shows.read().unwrap().iter().any(|s| s.has_id(id))
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShowRepository for LocalRepository {
    async fn list_shows(&self) -> RepositoryResult<Vec<Show>> {
        Ok(self.shows.read().unwrap().clone())
    }

    async fn get_show(&self, id: &str) -> RepositoryResult<Show> {
        self.shows
            .read()
            .unwrap()
            .iter()
            .find(|s| s.has_id(id))
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(format!("show with id {}", id)))
    }

    async fn create_show(&self, payload: Show) -> RepositoryResult<Show> {
        // id generation and append happen under one write lock acquisition
        let mut shows = self.shows.write().unwrap();
        let show = payload.with_id(Uuid::new_v4().to_string());
        shows.push(show.clone());
        Ok(show)
    }

    async fn update_show(&self, id: &str, payload: Show) -> RepositoryResult<()> {
        let mut shows = self.shows.write().unwrap();
        let index = shows
            .iter()
            .position(|s| s.has_id(id))
            .ok_or_else(|| RepositoryError::not_found(format!("show with id {}", id)))?;
        // Wholesale replacement: the payload's own id (or lack of one)
        // becomes the stored identity.
        shows[index] = payload;
        Ok(())
    }

    async fn delete_show(&self, id: &str) -> RepositoryResult<()> {
        let mut shows = self.shows.write().unwrap();
        let index = shows
            .iter()
            .position(|s| s.has_id(id))
            .ok_or_else(|| RepositoryError::not_found(format!("show with id {}", id)))?;
        shows.remove(index);
        Ok(())
    }

    async fn reseed(&self) -> RepositoryResult<()> {
        let mut shows = self.shows.write().unwrap();
        *shows = seed::seed_shows().to_vec();
        Ok(())
    }
}
