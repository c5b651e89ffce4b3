//! Types for the favorites store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogMovie;

/// A persisted favorite. The `id` is assigned by the store and is the
/// identifier used in share links, never the tmdb_id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteEntry {
    /// Store-assigned identifier.
    pub id: i64,
    /// TMDB identifier of the movie.
    pub tmdb_id: i64,
    /// Movie title.
    pub title: String,
    /// Poster path relative to the image CDN base.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Average vote at the time of favoriting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
    /// When the favorite was created.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a favorite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFavorite {
    pub tmdb_id: i64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
}

impl From<CatalogMovie> for NewFavorite {
    fn from(movie: CatalogMovie) -> Self {
        Self {
            tmdb_id: movie.tmdb_id,
            title: movie.title,
            poster_path: movie.poster_path,
            vote_average: movie.vote_average,
        }
    }
}

/// Payload for updating a favorite. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoriteUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}
