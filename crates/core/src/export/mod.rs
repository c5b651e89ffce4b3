//! Favorites list export as a downloadable PDF.
//!
//! Each favorite becomes one row with its poster image (or a
//! placeholder) and title plus rating. Poster fetch failures degrade
//! gracefully: placeholder first, then text only.

mod layout;
mod pdf;
mod poster;

pub use layout::{ExportLayout, RowSlot};
pub use pdf::PdfRenderer;
pub use poster::{
    HttpPosterFetcher, ImageProxy, PosterError, PosterFetcher, ProxiedImage,
};

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use crate::favorites::FavoriteEntry;
use crate::metrics::POSTER_FETCHES;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export: favorites list is empty")]
    Empty,

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// Exports a favorites list to PDF, fetching poster art as it goes.
pub struct PdfExporter {
    fetcher: Arc<dyn PosterFetcher>,
    layout: ExportLayout,
}

impl PdfExporter {
    pub fn new(fetcher: Arc<dyn PosterFetcher>) -> Self {
        Self {
            fetcher,
            layout: ExportLayout::default(),
        }
    }

    pub fn with_layout(fetcher: Arc<dyn PosterFetcher>, layout: ExportLayout) -> Self {
        Self { fetcher, layout }
    }

    /// Render the given entries into PDF bytes.
    pub async fn export(&self, entries: &[FavoriteEntry]) -> Result<Vec<u8>, ExportError> {
        if entries.is_empty() {
            return Err(ExportError::Empty);
        }

        let slots = self.layout.plan(entries.len());

        // PdfRenderer wraps printpdf's Rc-based document and is !Send,
        // so it must not live across an await point: fetch all posters
        // first, then render synchronously.
        let mut posters = Vec::with_capacity(entries.len());
        for entry in entries {
            posters.push(self.poster_bytes(entry).await);
        }

        let mut renderer = PdfRenderer::new(self.layout.clone(), "My favorites")?;
        for ((entry, slot), poster_bytes) in entries.iter().zip(slots.iter()).zip(posters.iter()) {
            renderer.draw_row(slot, entry, poster_bytes.as_deref());
        }

        renderer.finish()
    }

    /// Poster bytes for one entry, with fallbacks. Entries without a
    /// poster path go straight to the placeholder; any fetch failure
    /// falls through to the next level, ending at text-only (None).
    async fn poster_bytes(&self, entry: &FavoriteEntry) -> Option<Vec<u8>> {
        if let Some(path) = &entry.poster_path {
            match self.fetcher.fetch(path).await {
                Ok(bytes) => {
                    POSTER_FETCHES.with_label_values(&["poster"]).inc();
                    return Some(bytes);
                }
                Err(e) => {
                    warn!("Poster fetch failed for {:?}: {}", entry.title, e);
                }
            }
        }

        match self.fetcher.fetch_placeholder().await {
            Ok(bytes) => {
                POSTER_FETCHES.with_label_values(&["placeholder"]).inc();
                Some(bytes)
            }
            Err(e) => {
                warn!("Placeholder fetch failed for {:?}: {}", entry.title, e);
                POSTER_FETCHES.with_label_values(&["text_only"]).inc();
                None
            }
        }
    }
}
