//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the actual catalog logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::ShowsQuery;
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::models::Show;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /
///
/// Plain-text greeting.
pub async fn greeting() -> &'static str {
    "Hello, World!"
}

/// POST /db/seed
///
/// Restore the collection to the seed dataset.
pub async fn seed_database(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    db_services::reseed(state.repository.as_ref()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /tv-shows
///
/// List all shows, optionally filtered with `?genres=a,b`.
pub async fn list_tv_shows(
    State(state): State<AppState>,
    Query(query): Query<ShowsQuery>,
) -> HandlerResult<Vec<Show>> {
    let genres = query.genre_list();
    let shows = db_services::list_shows(state.repository.as_ref(), genres.as_deref()).await?;
    Ok(Json(shows))
}

/// GET /tv-shows/{id}
///
/// Look up a single show by id.
pub async fn get_tv_show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Show> {
    let show = db_services::get_show(state.repository.as_ref(), &id).await?;
    Ok(Json(show))
}

/// POST /tv-shows
///
/// Create a new show. The id is always server-assigned.
pub async fn create_tv_show(
    State(state): State<AppState>,
    Json(payload): Json<Show>,
) -> Result<(StatusCode, Json<Show>), AppError> {
    let show = db_services::create_show(state.repository.as_ref(), payload).await?;
    Ok((StatusCode::CREATED, Json(show)))
}

/// PUT /tv-shows/{id}
///
/// Replace a show wholesale with the request payload.
pub async fn update_tv_show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Show>,
) -> Result<StatusCode, AppError> {
    db_services::update_show(state.repository.as_ref(), &id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /tv-shows/{id}
///
/// Remove a show from the collection.
pub async fn delete_tv_show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    db_services::delete_show(state.repository.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
