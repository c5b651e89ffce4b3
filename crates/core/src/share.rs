//! Share links - a favorites list serialized into a URL.
//!
//! A share link carries the store-assigned favorite ids as a
//! comma-joined `ids` query parameter. The link is stateless: a
//! different session resolves it by fetching each id back out of the
//! favorites store.

use serde::Serialize;
use thiserror::Error;

use crate::favorites::{FavoriteEntry, FavoritesError, FavoritesStore};

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Invalid favorite id: {0:?}")]
    InvalidId(String),
}

/// Parse a comma-joined id list from a share link.
///
/// Empty tokens (trailing commas, doubled commas) are discarded.
/// Duplicate ids are preserved - they resolve to duplicate entries.
pub fn parse_ids(raw: &str) -> Result<Vec<i64>, ShareError> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| ShareError::InvalidId(token.to_string()))
        })
        .collect()
}

/// Build a share URL for the given favorites, in the given order.
///
/// An empty list still produces a URL with an empty `ids` value; the
/// caller decides whether that is worth warning about.
pub fn build_share_url(base_url: &str, entries: &[FavoriteEntry]) -> String {
    let ids = entries
        .iter()
        .map(|e| e.id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("{}/favorites?ids={}", base_url.trim_end_matches('/'), ids)
}

/// Result of resolving a share link against the favorites store.
#[derive(Debug, Serialize)]
pub struct SharedResolution {
    /// Resolved entries, in id-list order. Duplicated ids yield
    /// duplicated entries.
    pub entries: Vec<FavoriteEntry>,
    /// Ids that no longer exist in the store.
    pub missing: Vec<i64>,
}

/// Resolve each id independently; ids that have been deleted since the
/// link was built go to `missing` instead of failing the whole batch.
pub fn resolve_shared(
    store: &dyn FavoritesStore,
    ids: &[i64],
) -> Result<SharedResolution, FavoritesError> {
    let mut entries = Vec::with_capacity(ids.len());
    let mut missing = Vec::new();

    for &id in ids {
        match store.get(id) {
            Ok(entry) => entries.push(entry),
            Err(FavoritesError::NotFound(_)) => missing.push(id),
            Err(e) => return Err(e),
        }
    }

    Ok(SharedResolution { entries, missing })
}
