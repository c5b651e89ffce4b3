//! Same-origin image proxy handler.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use flicklist_core::metrics::PROXIED_IMAGES;
use flicklist_core::PosterError;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct ProxyParams {
    pub url: String,
}

/// GET /api/proxy-image?url=...
///
/// Fetch an allowlisted poster URL on the client's behalf so images
/// render without cross-origin restrictions.
pub async fn proxy_image(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProxyParams>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    match state.image_proxy().fetch(&params.url).await {
        Ok(image) => {
            PROXIED_IMAGES.with_label_values(&["success"]).inc();
            let content_type = image
                .content_type
                .unwrap_or_else(|| "application/octet-stream".to_string());
            Ok(([(header::CONTENT_TYPE, content_type)], image.bytes))
        }
        Err(e @ PosterError::ForbiddenHost(_)) => {
            PROXIED_IMAGES.with_label_values(&["forbidden"]).inc();
            Err((
                StatusCode::FORBIDDEN,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
        Err(e @ PosterError::InvalidUrl(_)) => {
            PROXIED_IMAGES.with_label_values(&["invalid"]).inc();
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
        Err(e) => {
            PROXIED_IMAGES.with_label_values(&["upstream_error"]).inc();
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
