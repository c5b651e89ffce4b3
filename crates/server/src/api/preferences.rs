//! User preference API handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use flicklist_core::preferences::{load_theme, save_theme, Theme};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub theme: String,
}

/// GET /api/preferences/theme
pub async fn get_theme(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ThemeResponse>, impl IntoResponse> {
    match load_theme(state.preferences()) {
        Ok(theme) => Ok(Json(ThemeResponse { theme })),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}

/// PUT /api/preferences/theme
///
/// Persist the theme so it survives restarts. Unknown values are
/// rejected with 422.
pub async fn set_theme(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ThemeRequest>,
) -> Result<Json<ThemeResponse>, impl IntoResponse> {
    let theme = match Theme::parse(&request.theme) {
        Ok(theme) => theme,
        Err(e) => {
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ));
        }
    };

    match save_theme(state.preferences(), theme) {
        Ok(()) => Ok(Json(ThemeResponse { theme })),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}
