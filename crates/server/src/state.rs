use std::sync::Arc;

use flicklist_core::{
    Config, FavoritesStore, ImageProxy, MovieCatalog, PdfExporter, PreferenceStore,
    SanitizedConfig, SearchSession,
};

/// Shared application state
pub struct AppState {
    config: Config,
    catalog: Option<Arc<dyn MovieCatalog>>,
    favorites: Arc<dyn FavoritesStore>,
    preferences: Arc<dyn PreferenceStore>,
    exporter: Arc<PdfExporter>,
    image_proxy: Arc<ImageProxy>,
    search_session: SearchSession,
}

impl AppState {
    pub fn new(
        config: Config,
        catalog: Option<Arc<dyn MovieCatalog>>,
        favorites: Arc<dyn FavoritesStore>,
        preferences: Arc<dyn PreferenceStore>,
        exporter: Arc<PdfExporter>,
        image_proxy: Arc<ImageProxy>,
    ) -> Self {
        Self {
            config,
            catalog,
            favorites,
            preferences,
            exporter,
            image_proxy,
            search_session: SearchSession::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn catalog(&self) -> Option<&Arc<dyn MovieCatalog>> {
        self.catalog.as_ref()
    }

    pub fn favorites(&self) -> &dyn FavoritesStore {
        self.favorites.as_ref()
    }

    pub fn preferences(&self) -> &dyn PreferenceStore {
        self.preferences.as_ref()
    }

    pub fn exporter(&self) -> &PdfExporter {
        self.exporter.as_ref()
    }

    pub fn image_proxy(&self) -> &ImageProxy {
        self.image_proxy.as_ref()
    }

    pub fn search_session(&self) -> &SearchSession {
        &self.search_session
    }
}
