use axum::{
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::{export, favorites, handlers, preferences, proxy, search, shared};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health, config, metrics
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::metrics))
        // Catalog search
        .route("/search", get(search::search))
        // Favorites
        .route(
            "/favorites",
            get(favorites::list_favorites).post(favorites::add_favorite),
        )
        .route("/favorites/share-link", get(shared::share_link))
        .route("/favorites/shared", get(shared::resolve_shared))
        .route("/favorites/export", get(export::export_favorites))
        .route(
            "/favorites/{id}",
            get(favorites::get_favorite)
                .put(favorites::update_favorite)
                .delete(favorites::remove_favorite),
        )
        // Image proxy
        .route("/proxy-image", get(proxy::proxy_image))
        // Preferences
        .route(
            "/preferences/theme",
            get(preferences::get_theme).put(preferences::set_theme),
        )
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(middleware::from_fn(super::middleware::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
