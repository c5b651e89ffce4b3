pub mod catalog;
pub mod config;
pub mod export;
pub mod favorites;
pub mod metrics;
pub mod preferences;
pub mod share;
pub mod testing;

pub use catalog::{CatalogError, CatalogMovie, MovieCatalog, SearchSession, TmdbClient};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    DatabaseConfig, ExportConfig, SanitizedConfig, ServerConfig,
};
pub use export::{
    ExportError, ExportLayout, HttpPosterFetcher, ImageProxy, PdfExporter, PosterError,
    PosterFetcher, ProxiedImage,
};
pub use favorites::{
    FavoriteEntry, FavoriteUpdate, FavoritesError, FavoritesStore, NewFavorite,
    SqliteFavoritesStore,
};
pub use preferences::{
    load_theme, save_theme, PreferenceStore, PreferencesError, SqlitePreferenceStore, Theme,
};
pub use share::{build_share_url, parse_ids, resolve_shared, ShareError, SharedResolution};
