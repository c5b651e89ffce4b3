//! PDF export API handler.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use flicklist_core::metrics::{EXPORTS_TOTAL, EXPORT_DURATION};
use flicklist_core::share;
use flicklist_core::{ExportError, ShareError};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    /// Optional subset of favorite ids, comma-joined. Exports the
    /// whole list when absent.
    pub ids: Option<String>,
}

/// GET /api/favorites/export
///
/// Render the favorites list (or the subset named by `ids`) as a PDF
/// download.
pub async fn export_favorites(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExportParams>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let entries = match params.ids {
        Some(raw_ids) => {
            let ids = share::parse_ids(&raw_ids).map_err(|e: ShareError| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: e.to_string(),
                    }),
                )
            })?;
            // Deleted ids are skipped rather than failing the export
            share::resolve_shared(state.favorites(), &ids)
                .map_err(|e| {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(ErrorResponse {
                            error: e.to_string(),
                        }),
                    )
                })?
                .entries
        }
        None => state.favorites().list().map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        })?,
    };

    let start = Instant::now();
    match state.exporter().export(&entries).await {
        Ok(bytes) => {
            EXPORTS_TOTAL.with_label_values(&["success"]).inc();
            EXPORT_DURATION
                .with_label_values(&[])
                .observe(start.elapsed().as_secs_f64());
            Ok((
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        "attachment; filename=\"favorites.pdf\"".to_string(),
                    ),
                ],
                bytes,
            ))
        }
        Err(ExportError::Empty) => {
            EXPORTS_TOTAL.with_label_values(&["empty"]).inc();
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: ExportError::Empty.to_string(),
                }),
            ))
        }
        Err(e) => {
            EXPORTS_TOTAL.with_label_values(&["failed"]).inc();
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
