//! High-level catalog service layer.
//!
//! Repository-agnostic operations that carry the business rules the storage
//! backend should not know about: empty-payload rejection and genre
//! filtering. HTTP handlers call these functions rather than the repository
//! directly.
//!
//! # Usage
//!
//! ```no_run
//! use tvshows_rust::db::{services, LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!
//!     let shows = services::list_shows(&repo, None).await?;
//!     println!("Found {} shows", shows.len());
//!
//!     Ok(())
//! }
//! ```

use log::{debug, info};

use super::repository::{RepositoryError, RepositoryResult, ShowRepository};
use crate::models::Show;

/// List shows, optionally filtered by genre.
///
/// With no genres (or an empty list) this is the identity listing: every
/// show in stored order. With genres, only shows whose genre list overlaps
/// the requested set are kept, still in stored order. An empty result is a
/// valid result, not an error.
pub async fn list_shows(
    repo: &dyn ShowRepository,
    genres: Option<&[String]>,
) -> RepositoryResult<Vec<Show>> {
    let shows = repo.list_shows().await?;
    match genres {
        None => Ok(shows),
        Some(wanted) if wanted.is_empty() => Ok(shows),
        Some(wanted) => {
            let filtered: Vec<Show> = shows
                .into_iter()
                .filter(|s| s.matches_any_genre(wanted))
                .collect();
            debug!("Filtered shows by {:?}: {} matched", wanted, filtered.len());
            Ok(filtered)
        }
    }
}

/// Look up a single show by id.
pub async fn get_show(repo: &dyn ShowRepository, id: &str) -> RepositoryResult<Show> {
    repo.get_show(id).await
}

/// Create a new show from `payload`.
///
/// Rejects empty payloads with a validation error; otherwise the repository
/// assigns a fresh id and appends the record.
pub async fn create_show(repo: &dyn ShowRepository, payload: Show) -> RepositoryResult<Show> {
    if payload.is_empty() {
        return Err(RepositoryError::validation("show payload must not be empty"));
    }
    let show = repo.create_show(payload).await?;
    info!("Created show {}", show.id.as_deref().unwrap_or("<no id>"));
    Ok(show)
}

/// Replace the show at `id` wholesale with `payload`.
///
/// The target id is resolved before the payload is considered, so an unknown
/// id reports not-found even when the payload is also empty.
pub async fn update_show(
    repo: &dyn ShowRepository,
    id: &str,
    payload: Show,
) -> RepositoryResult<()> {
    if payload.is_empty() {
        // Nothing will be stored either way; resolve the id first so the
        // caller sees not-found rather than validation for unknown targets.
        repo.get_show(id).await?;
        return Err(RepositoryError::validation("show payload must not be empty"));
    }
    repo.update_show(id, payload).await?;
    info!("Updated show {}", id);
    Ok(())
}

/// Remove the show at `id`.
pub async fn delete_show(repo: &dyn ShowRepository, id: &str) -> RepositoryResult<()> {
    repo.delete_show(id).await?;
    info!("Deleted show {}", id);
    Ok(())
}

/// Restore the collection to the seed dataset.
pub async fn reseed(repo: &dyn ShowRepository) -> RepositoryResult<()> {
    repo.reseed().await?;
    info!("Reseeded show collection");
    Ok(())
}
