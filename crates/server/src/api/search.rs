//! Catalog search API handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use flicklist_core::metrics::{SEARCH_DURATION, SEARCH_REQUESTS, SEARCH_RESULTS};
use flicklist_core::{CatalogError, CatalogMovie};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<CatalogMovie>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /api/search?query=...
///
/// Search the external catalog. Results are never persisted; the
/// client holds them only for the current search.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, impl IntoResponse> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Query parameter is required".to_string(),
            }),
        ));
    }

    let Some(catalog) = state.catalog() else {
        SEARCH_REQUESTS.with_label_values(&["not_configured"]).inc();
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Movie catalog not configured".to_string(),
            }),
        ));
    };

    // Concurrent requests race to install their results; only the
    // most recently issued ticket sticks.
    let ticket = state.search_session().begin();

    let start = Instant::now();
    match catalog.search_movies(query).await {
        Ok(results) => {
            SEARCH_REQUESTS.with_label_values(&["success"]).inc();
            SEARCH_DURATION
                .with_label_values(&[])
                .observe(start.elapsed().as_secs_f64());
            SEARCH_RESULTS
                .with_label_values(&[])
                .observe(results.len() as f64);
            state.search_session().apply(ticket, results.clone());
            Ok(Json(SearchResponse { results }))
        }
        Err(CatalogError::RateLimited) => {
            SEARCH_REQUESTS.with_label_values(&["rate_limited"]).inc();
            Err((
                StatusCode::TOO_MANY_REQUESTS,
                Json(ErrorResponse {
                    error: CatalogError::RateLimited.to_string(),
                }),
            ))
        }
        Err(e @ CatalogError::NotConfigured(_)) => {
            SEARCH_REQUESTS.with_label_values(&["not_configured"]).inc();
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
        Err(e) => {
            SEARCH_REQUESTS
                .with_label_values(&["upstream_error"])
                .inc();
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
