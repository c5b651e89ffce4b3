//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the external service
//! traits so the API surface can be tested without real infrastructure.
//!
//! # Example
//!
//! ```rust,ignore
//! use flicklist_core::testing::{fixtures, MockMovieCatalog};
//!
//! let catalog = MockMovieCatalog::new();
//! catalog.set_results(vec![fixtures::catalog_movie(603, "The Matrix")]).await;
//!
//! let results = catalog.search_movies("matrix").await?;
//! assert_eq!(results.len(), 1);
//! ```

mod mock_catalog;
mod mock_poster;

pub use mock_catalog::MockMovieCatalog;
pub use mock_poster::MockPosterFetcher;

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::Utc;

    use crate::catalog::CatalogMovie;
    use crate::favorites::{FavoriteEntry, NewFavorite};

    /// Create a test catalog movie with reasonable defaults.
    pub fn catalog_movie(tmdb_id: i64, title: &str) -> CatalogMovie {
        CatalogMovie {
            tmdb_id,
            title: title.to_string(),
            poster_path: Some("/poster.jpg".to_string()),
            vote_average: Some(7.5),
            overview: Some(format!("A movie about {}.", title.to_lowercase())),
            release_date: Some("1999-06-15".to_string()),
        }
    }

    /// Create a test favorite payload.
    pub fn new_favorite(tmdb_id: i64, title: &str) -> NewFavorite {
        NewFavorite {
            tmdb_id,
            title: title.to_string(),
            poster_path: Some("/poster.jpg".to_string()),
            vote_average: Some(7.5),
        }
    }

    /// Create a stored favorite entry, as the store would return it.
    pub fn favorite_entry(id: i64, tmdb_id: i64, title: &str) -> FavoriteEntry {
        FavoriteEntry {
            id,
            tmdb_id,
            title: title.to_string(),
            poster_path: Some("/poster.jpg".to_string()),
            vote_average: Some(7.5),
            created_at: Utc::now(),
        }
    }
}
