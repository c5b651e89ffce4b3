//! Poster image fetching for the export pipeline and the image proxy.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::debug;

use crate::config::ExportConfig;

#[derive(Debug, Error)]
pub enum PosterError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    Status(u16),

    #[error("No placeholder image configured")]
    NoPlaceholder,

    #[error("Invalid image URL: {0}")]
    InvalidUrl(String),

    #[error("Host not allowed: {0}")]
    ForbiddenHost(String),
}

/// Trait for poster retrieval, keyed by the catalog's poster path.
#[async_trait]
pub trait PosterFetcher: Send + Sync {
    /// Fetch the poster bytes for a poster path (e.g. "/abc.jpg").
    async fn fetch(&self, poster_path: &str) -> Result<Vec<u8>, PosterError>;

    /// Fetch the configured placeholder image.
    async fn fetch_placeholder(&self) -> Result<Vec<u8>, PosterError>;
}

/// Poster fetcher backed by the image CDN configured for exports.
pub struct HttpPosterFetcher {
    client: Client,
    image_base_url: String,
    placeholder_url: Option<String>,
}

impl HttpPosterFetcher {
    pub fn new(config: &ExportConfig) -> Result<Self, PosterError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            image_base_url: config.image_base_url.trim_end_matches('/').to_string(),
            placeholder_url: config.placeholder_url.clone(),
        })
    }

    fn poster_url(&self, poster_path: &str) -> String {
        if poster_path.starts_with('/') {
            format!("{}{}", self.image_base_url, poster_path)
        } else {
            format!("{}/{}", self.image_base_url, poster_path)
        }
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, PosterError> {
        debug!("Fetching image: {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PosterError::Status(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl PosterFetcher for HttpPosterFetcher {
    async fn fetch(&self, poster_path: &str) -> Result<Vec<u8>, PosterError> {
        let url = self.poster_url(poster_path);
        self.fetch_bytes(&url).await
    }

    async fn fetch_placeholder(&self) -> Result<Vec<u8>, PosterError> {
        let url = self
            .placeholder_url
            .as_deref()
            .ok_or(PosterError::NoPlaceholder)?;
        self.fetch_bytes(url).await
    }
}

/// A proxied image response: raw bytes plus the upstream content type.
#[derive(Debug)]
pub struct ProxiedImage {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// Same-origin image proxy.
///
/// Only hosts the deployment already trusts for posters may be proxied;
/// everything else is refused before any request is made.
pub struct ImageProxy {
    client: Client,
    allowed_hosts: Vec<String>,
}

impl ImageProxy {
    pub fn new(config: &ExportConfig) -> Result<Self, PosterError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let mut allowed_hosts = vec![host_of(&config.image_base_url)?];
        if let Some(placeholder) = &config.placeholder_url {
            let host = host_of(placeholder)?;
            if !allowed_hosts.contains(&host) {
                allowed_hosts.push(host);
            }
        }

        Ok(Self {
            client,
            allowed_hosts,
        })
    }

    pub fn host_allowed(&self, url: &Url) -> bool {
        url.host_str()
            .map(|h| self.allowed_hosts.iter().any(|a| a == h))
            .unwrap_or(false)
    }

    /// Fetch an allowlisted image URL and return its bytes.
    pub async fn fetch(&self, raw_url: &str) -> Result<ProxiedImage, PosterError> {
        let url =
            Url::parse(raw_url).map_err(|_| PosterError::InvalidUrl(raw_url.to_string()))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(PosterError::InvalidUrl(raw_url.to_string()));
        }
        if !self.host_allowed(&url) {
            return Err(PosterError::ForbiddenHost(
                url.host_str().unwrap_or_default().to_string(),
            ));
        }

        debug!("Proxying image: {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PosterError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        Ok(ProxiedImage {
            bytes: response.bytes().await?.to_vec(),
            content_type,
        })
    }
}

fn host_of(raw_url: &str) -> Result<String, PosterError> {
    let url = Url::parse(raw_url).map_err(|_| PosterError::InvalidUrl(raw_url.to_string()))?;
    url.host_str()
        .map(String::from)
        .ok_or_else(|| PosterError::InvalidUrl(raw_url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ExportConfig {
        ExportConfig {
            image_base_url: "https://image.tmdb.org/t/p/w200".to_string(),
            placeholder_url: Some("https://cdn.example.com/no-poster.png".to_string()),
        }
    }

    #[test]
    fn test_poster_url_joins_leading_slash() {
        let fetcher = HttpPosterFetcher::new(&test_config()).unwrap();
        assert_eq!(
            fetcher.poster_url("/abc.jpg"),
            "https://image.tmdb.org/t/p/w200/abc.jpg"
        );
        assert_eq!(
            fetcher.poster_url("abc.jpg"),
            "https://image.tmdb.org/t/p/w200/abc.jpg"
        );
    }

    #[tokio::test]
    async fn test_placeholder_unconfigured() {
        let config = ExportConfig {
            placeholder_url: None,
            ..test_config()
        };
        let fetcher = HttpPosterFetcher::new(&config).unwrap();
        let result = fetcher.fetch_placeholder().await;
        assert!(matches!(result, Err(PosterError::NoPlaceholder)));
    }

    #[test]
    fn test_proxy_allowlist_includes_both_hosts() {
        let proxy = ImageProxy::new(&test_config()).unwrap();
        let poster = Url::parse("https://image.tmdb.org/t/p/w200/abc.jpg").unwrap();
        let placeholder = Url::parse("https://cdn.example.com/no-poster.png").unwrap();
        assert!(proxy.host_allowed(&poster));
        assert!(proxy.host_allowed(&placeholder));
    }

    #[tokio::test]
    async fn test_proxy_refuses_unknown_host() {
        let proxy = ImageProxy::new(&test_config()).unwrap();
        let result = proxy.fetch("https://evil.example.net/secret.png").await;
        assert!(matches!(result, Err(PosterError::ForbiddenHost(h)) if h == "evil.example.net"));
    }

    #[tokio::test]
    async fn test_proxy_refuses_bad_url() {
        let proxy = ImageProxy::new(&test_config()).unwrap();
        assert!(matches!(
            proxy.fetch("not a url").await,
            Err(PosterError::InvalidUrl(_))
        ));
        assert!(matches!(
            proxy.fetch("file:///etc/passwd").await,
            Err(PosterError::InvalidUrl(_))
        ));
    }
}
