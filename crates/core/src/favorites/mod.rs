//! Favorites store - the persisted list of movies a user has starred.
//!
//! The store is the sole source of truth: it assigns entry ids and
//! enforces the one-entry-per-movie invariant. Clients fully reload
//! the list after every mutation instead of patching local state.

mod sqlite;
mod types;

pub use sqlite::SqliteFavoritesStore;
pub use types::*;

use thiserror::Error;

/// Errors for favorites operations.
#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Favorite not found: {0}")]
    NotFound(i64),

    /// The movie is already favorited. Carries the offending tmdb_id.
    #[error("Movie {0} is already in favorites")]
    Duplicate(i64),
}

/// Trait for favorites storage.
pub trait FavoritesStore: Send + Sync {
    /// List all favorites in insertion order.
    fn list(&self) -> Result<Vec<FavoriteEntry>, FavoritesError>;

    /// Add a favorite. Fails with [`FavoritesError::Duplicate`] when the
    /// movie's tmdb_id is already present.
    fn add(&self, favorite: NewFavorite) -> Result<FavoriteEntry, FavoritesError>;

    /// Get a favorite by its store-assigned id.
    fn get(&self, id: i64) -> Result<FavoriteEntry, FavoritesError>;

    /// Update the mutable fields of a favorite.
    fn update(&self, id: i64, update: FavoriteUpdate) -> Result<FavoriteEntry, FavoritesError>;

    /// Remove a favorite by id.
    fn remove(&self, id: i64) -> Result<(), FavoritesError>;

    /// Remove all favorites.
    fn clear(&self) -> Result<(), FavoritesError>;
}
