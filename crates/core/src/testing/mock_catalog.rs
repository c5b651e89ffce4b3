//! Mock movie catalog for testing.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::{CatalogError, CatalogMovie, MovieCatalog};

/// Mock implementation of the MovieCatalog trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable results, filtered by title substring
/// - Track queries for assertions
/// - Simulate failures
pub struct MockMovieCatalog {
    movies: Arc<RwLock<Vec<CatalogMovie>>>,
    queries: Arc<RwLock<Vec<String>>>,
    /// If set, the next search will fail with this error.
    next_error: Arc<RwLock<Option<CatalogError>>>,
}

impl Default for MockMovieCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMovieCatalog {
    /// Create a new empty mock catalog.
    pub fn new() -> Self {
        Self {
            movies: Arc::new(RwLock::new(Vec::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Replace the configured movies.
    pub async fn set_results(&self, movies: Vec<CatalogMovie>) {
        *self.movies.write().await = movies;
    }

    /// Configure the next search to fail with the given error.
    pub async fn set_next_error(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// Get all recorded search queries.
    pub async fn recorded_queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }
}

#[async_trait]
impl MovieCatalog for MockMovieCatalog {
    async fn search_movies(&self, query: &str) -> Result<Vec<CatalogMovie>, CatalogError> {
        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        self.queries.write().await.push(query.to_string());

        let query_lower = query.to_lowercase();
        let results = self
            .movies
            .read()
            .await
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&query_lower))
            .cloned()
            .collect();

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_search_filters_by_title() {
        let catalog = MockMovieCatalog::new();
        catalog
            .set_results(vec![
                fixtures::catalog_movie(603, "The Matrix"),
                fixtures::catalog_movie(604, "The Matrix Reloaded"),
                fixtures::catalog_movie(550, "Fight Club"),
            ])
            .await;

        let results = catalog.search_movies("matrix").await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_error_injection_consumed_once() {
        let catalog = MockMovieCatalog::new();
        catalog.set_next_error(CatalogError::RateLimited).await;

        assert!(catalog.search_movies("anything").await.is_err());
        assert!(catalog.search_movies("anything").await.is_ok());
    }

    #[tokio::test]
    async fn test_records_queries() {
        let catalog = MockMovieCatalog::new();
        catalog.search_movies("first").await.unwrap();
        catalog.search_movies("second").await.unwrap();

        assert_eq!(catalog.recorded_queries().await, vec!["first", "second"]);
    }
}
