//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Catalog searches (requests, results, latency)
//! - Favorites store activity (adds, removals, conflicts)
//! - Exports and proxied images

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Catalog Search Metrics
// =============================================================================

/// Search requests total by result.
pub static SEARCH_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("flicklist_search_requests_total", "Total catalog searches"),
        &["result"], // "success", "rate_limited", "upstream_error", "not_configured"
    )
    .unwrap()
});

/// Search duration in seconds.
pub static SEARCH_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "flicklist_search_duration_seconds",
            "Duration of catalog searches",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &[],
    )
    .unwrap()
});

/// Search results returned per query.
pub static SEARCH_RESULTS: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "flicklist_search_results",
            "Number of results returned per search",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 20.0, 50.0, 100.0]),
        &[],
    )
    .unwrap()
});

// =============================================================================
// Favorites Metrics
// =============================================================================

/// Favorites added total.
pub static FAVORITES_ADDED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("flicklist_favorites_added_total", "Total favorites added").unwrap()
});

/// Favorites removed total.
pub static FAVORITES_REMOVED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "flicklist_favorites_removed_total",
        "Total favorites removed",
    )
    .unwrap()
});

/// Duplicate add attempts rejected.
pub static FAVORITES_CONFLICTS: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "flicklist_favorites_conflicts_total",
        "Add attempts rejected because the movie was already a favorite",
    )
    .unwrap()
});

// =============================================================================
// Export and Proxy Metrics
// =============================================================================

/// PDF exports generated total by result.
pub static EXPORTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("flicklist_exports_total", "Total PDF exports"),
        &["result"], // "success", "empty", "failed"
    )
    .unwrap()
});

/// Export duration in seconds.
pub static EXPORT_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "flicklist_export_duration_seconds",
            "Duration of PDF export generation",
        )
        .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &[],
    )
    .unwrap()
});

/// Poster fetches total by outcome.
pub static POSTER_FETCHES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("flicklist_poster_fetches_total", "Total poster fetches"),
        &["outcome"], // "poster", "placeholder", "text_only"
    )
    .unwrap()
});

/// Proxied images total by result.
pub static PROXIED_IMAGES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("flicklist_proxied_images_total", "Total proxied images"),
        &["result"], // "success", "forbidden", "invalid", "upstream_error"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        // Search
        Box::new(SEARCH_REQUESTS.clone()),
        Box::new(SEARCH_DURATION.clone()),
        Box::new(SEARCH_RESULTS.clone()),
        // Favorites
        Box::new(FAVORITES_ADDED.clone()),
        Box::new(FAVORITES_REMOVED.clone()),
        Box::new(FAVORITES_CONFLICTS.clone()),
        // Export and proxy
        Box::new(EXPORTS_TOTAL.clone()),
        Box::new(EXPORT_DURATION.clone()),
        Box::new(POSTER_FETCHES.clone()),
        Box::new(PROXIED_IMAGES.clone()),
    ]
}
