//! Share link API handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use flicklist_core::share::{self, SharedResolution};
use flicklist_core::ShareError;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ShareLinkResponse {
    pub url: String,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct SharedParams {
    pub ids: Option<String>,
}

/// GET /api/favorites/share-link
///
/// Build a share URL carrying the current favorites list.
pub async fn share_link(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ShareLinkResponse>, (StatusCode, Json<ErrorResponse>)> {
    let entries = state.favorites().list().map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    let base_url = state.config().server.base_url();
    let url = share::build_share_url(&base_url, &entries);

    Ok(Json(ShareLinkResponse {
        url,
        count: entries.len(),
    }))
}

/// GET /api/favorites/shared?ids=1,2,3
///
/// Resolve a share link. Ids that have since been deleted are
/// reported separately instead of failing the whole request.
pub async fn resolve_shared(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SharedParams>,
) -> Result<Json<SharedResolution>, impl IntoResponse> {
    let Some(raw_ids) = params.ids else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing ids parameter".to_string(),
            }),
        ));
    };

    let ids = match share::parse_ids(&raw_ids) {
        Ok(ids) => ids,
        Err(e @ ShareError::InvalidId(_)) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ));
        }
    };

    match share::resolve_shared(state.favorites(), &ids) {
        Ok(resolution) => Ok(Json(resolution)),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}
