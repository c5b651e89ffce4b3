//! TMDB (The Movie Database) API client.
//!
//! TMDB requires an API key for access.
//! Rate limits are generous (around 40 requests per second).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::types::CatalogMovie;
use super::{CatalogError, MovieCatalog};
use crate::config::CatalogConfig;

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB API client.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        if config.api_key.is_empty() {
            return Err(CatalogError::NotConfigured(
                "TMDB API key is required".to_string(),
            ));
        }

        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn search_movies(&self, query: &str) -> Result<Vec<CatalogMovie>, CatalogError> {
        let url = format!("{}/search/movie", self.base_url);

        debug!("TMDB movie search: query='{}'", query);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("query", query)])
            .send()
            .await?;

        let status = response.status();
        if status == 401 {
            return Err(CatalogError::NotConfigured(
                "Invalid TMDB API key".to_string(),
            ));
        }
        if status == 429 {
            return Err(CatalogError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let search_result: TmdbSearchResponse = response.json().await.map_err(|e| {
            CatalogError::Parse(format!("Failed to parse movie search response: {}", e))
        })?;

        let movies = search_result
            .results
            .into_iter()
            .map(|r| r.into())
            .collect();

        Ok(movies)
    }
}

// ============================================================================
// TMDB API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct TmdbSearchResponse {
    results: Vec<TmdbMovieResult>,
}

#[derive(Debug, Deserialize)]
struct TmdbMovieResult {
    id: i64,
    title: String,
    poster_path: Option<String>,
    vote_average: Option<f32>,
    overview: Option<String>,
    release_date: Option<String>,
}

impl From<TmdbMovieResult> for CatalogMovie {
    fn from(r: TmdbMovieResult) -> Self {
        Self {
            tmdb_id: r.id,
            title: r.title,
            poster_path: r.poster_path,
            vote_average: r.vote_average,
            // TMDB returns empty strings for unreleased titles
            overview: r.overview.filter(|o| !o.is_empty()),
            release_date: r.release_date.filter(|d| !d.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        let result = TmdbClient::new(CatalogConfig {
            api_key: String::new(),
            base_url: None,
        });
        assert!(matches!(result, Err(CatalogError::NotConfigured(_))));
    }

    #[test]
    fn test_new_defaults_base_url() {
        let client = TmdbClient::new(CatalogConfig {
            api_key: "key".to_string(),
            base_url: None,
        })
        .unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_movie_result_conversion() {
        let result = TmdbMovieResult {
            id: 603,
            title: "The Matrix".to_string(),
            poster_path: Some("/poster.jpg".to_string()),
            vote_average: Some(8.2),
            overview: Some("A computer hacker...".to_string()),
            release_date: Some("1999-03-30".to_string()),
        };

        let movie: CatalogMovie = result.into();
        assert_eq!(movie.tmdb_id, 603);
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.year(), Some(1999));
    }

    #[test]
    fn test_empty_strings_become_none() {
        let result = TmdbMovieResult {
            id: 1,
            title: "Unreleased".to_string(),
            poster_path: None,
            vote_average: None,
            overview: Some(String::new()),
            release_date: Some(String::new()),
        };

        let movie: CatalogMovie = result.into();
        assert!(movie.overview.is_none());
        assert!(movie.release_date.is_none());
    }

    #[test]
    fn test_search_response_parsing() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 603, "title": "The Matrix", "poster_path": "/p.jpg",
                 "vote_average": 8.2, "overview": "...", "release_date": "1999-03-30"},
                {"id": 604, "title": "The Matrix Reloaded", "poster_path": null,
                 "vote_average": 7.0, "overview": "...", "release_date": "2003-05-15"}
            ],
            "total_pages": 1,
            "total_results": 2
        }"#;

        let parsed: TmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].id, 603);
        assert!(parsed.results[1].poster_path.is_none());
    }
}
