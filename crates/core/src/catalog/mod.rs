//! External movie catalog integration (TMDB).
//!
//! This module provides the client used to search the external movie
//! catalog. Results are transient per search; nothing from here is
//! persisted until the user favorites a movie.

mod session;
mod tmdb;
mod types;

pub use session::SearchSession;
pub use tmdb::TmdbClient;
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when querying the external catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, please wait before retrying")]
    RateLimited,

    /// API returned an error.
    #[error("Catalog API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse catalog response: {0}")]
    Parse(String),

    /// Client not configured (missing API key, etc.).
    #[error("Catalog client not configured: {0}")]
    NotConfigured(String),
}

/// Trait for external movie catalog clients.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Search for movies by query. Result order is the catalog's order.
    async fn search_movies(&self, query: &str) -> Result<Vec<CatalogMovie>, CatalogError>;
}
