//! Favorites CRUD API handlers.
//!
//! The store owns entry ids and the one-entry-per-movie rule; handlers
//! only translate store errors into HTTP statuses.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use flicklist_core::metrics::{FAVORITES_ADDED, FAVORITES_CONFLICTS, FAVORITES_REMOVED};
use flicklist_core::{FavoriteEntry, FavoriteUpdate, FavoritesError, NewFavorite};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn internal_error(e: FavoritesError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

/// GET /api/favorites
pub async fn list_favorites(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FavoriteEntry>>, impl IntoResponse> {
    state
        .favorites()
        .list()
        .map(Json)
        .map_err(internal_error)
}

/// POST /api/favorites
///
/// Returns 201 with the stored entry, or 409 when the movie is
/// already favorited.
pub async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Json(favorite): Json<NewFavorite>,
) -> Result<(StatusCode, Json<FavoriteEntry>), impl IntoResponse> {
    match state.favorites().add(favorite) {
        Ok(entry) => {
            FAVORITES_ADDED.inc();
            Ok((StatusCode::CREATED, Json(entry)))
        }
        Err(FavoritesError::Duplicate(_)) => {
            FAVORITES_CONFLICTS.inc();
            Err((
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: "movie is already in favorites".to_string(),
                }),
            ))
        }
        Err(e) => Err(internal_error(e)),
    }
}

/// GET /api/favorites/{id}
pub async fn get_favorite(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<FavoriteEntry>, impl IntoResponse> {
    match state.favorites().get(id) {
        Ok(entry) => Ok(Json(entry)),
        Err(FavoritesError::NotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Favorite not found: {}", id),
            }),
        )),
        Err(e) => Err(internal_error(e)),
    }
}

/// PUT /api/favorites/{id}
pub async fn update_favorite(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(update): Json<FavoriteUpdate>,
) -> Result<Json<FavoriteEntry>, impl IntoResponse> {
    match state.favorites().update(id, update) {
        Ok(entry) => Ok(Json(entry)),
        Err(FavoritesError::NotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Favorite not found: {}", id),
            }),
        )),
        Err(e) => Err(internal_error(e)),
    }
}

/// DELETE /api/favorites/{id}
pub async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, impl IntoResponse> {
    match state.favorites().remove(id) {
        Ok(()) => {
            FAVORITES_REMOVED.inc();
            Ok(StatusCode::NO_CONTENT)
        }
        Err(FavoritesError::NotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Favorite not found: {}", id),
            }),
        )),
        Err(e) => Err(internal_error(e)),
    }
}
