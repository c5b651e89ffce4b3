//! Types for the external movie catalog.

use serde::{Deserialize, Serialize};

/// A movie as returned by the external catalog search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogMovie {
    /// TMDB identifier.
    pub tmdb_id: i64,
    /// Movie title.
    pub title: String,
    /// Poster path relative to the image CDN base (e.g. "/abc.jpg").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Average vote, 0.0..=10.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
    /// Plot summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Release date as "YYYY-MM-DD".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

impl CatalogMovie {
    /// Release year, parsed from the release date.
    pub fn year(&self) -> Option<u32> {
        self.release_date
            .as_ref()
            .and_then(|d| d.split('-').next())
            .and_then(|y| y.parse().ok())
    }
}
