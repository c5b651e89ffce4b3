//! Mock poster fetcher for testing the export pipeline.

use async_trait::async_trait;

use crate::export::{PosterError, PosterFetcher};

/// Mock implementation of the PosterFetcher trait.
///
/// Each level of the fetch chain returns its configured bytes, or a
/// fetch error when unconfigured. `failing()` makes every fetch fail,
/// which exercises the text-only fallback.
pub struct MockPosterFetcher {
    poster: Option<Vec<u8>>,
    placeholder: Option<Vec<u8>>,
}

impl MockPosterFetcher {
    pub fn new(poster: Option<Vec<u8>>, placeholder: Option<Vec<u8>>) -> Self {
        Self {
            poster,
            placeholder,
        }
    }

    /// A fetcher where every fetch fails.
    pub fn failing() -> Self {
        Self::new(None, None)
    }
}

#[async_trait]
impl PosterFetcher for MockPosterFetcher {
    async fn fetch(&self, _poster_path: &str) -> Result<Vec<u8>, PosterError> {
        self.poster.clone().ok_or(PosterError::Status(404))
    }

    async fn fetch_placeholder(&self) -> Result<Vec<u8>, PosterError> {
        self.placeholder.clone().ok_or(PosterError::NoPlaceholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failing_fetcher() {
        let fetcher = MockPosterFetcher::failing();
        assert!(fetcher.fetch("/a.jpg").await.is_err());
        assert!(fetcher.fetch_placeholder().await.is_err());
    }

    #[tokio::test]
    async fn test_configured_bytes_returned() {
        let fetcher = MockPosterFetcher::new(Some(vec![1, 2, 3]), None);
        assert_eq!(fetcher.fetch("/a.jpg").await.unwrap(), vec![1, 2, 3]);
        assert!(fetcher.fetch_placeholder().await.is_err());
    }
}
