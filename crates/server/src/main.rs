use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flicklist_core::{
    load_config, load_theme, validate_config, FavoritesStore, HttpPosterFetcher, ImageProxy,
    MovieCatalog, PdfExporter, PreferenceStore, SqliteFavoritesStore, SqlitePreferenceStore,
    TmdbClient,
};

use flicklist_server::api::create_router;
use flicklist_server::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("FLICKLIST_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Database path: {:?}", config.database.path);

    // Create SQLite favorites store
    let favorites: Arc<dyn FavoritesStore> = Arc::new(
        SqliteFavoritesStore::new(&config.database.path)
            .context("Failed to create favorites store")?,
    );
    info!("Favorites store initialized");

    // Create SQLite preference store
    let preferences: Arc<dyn PreferenceStore> = Arc::new(
        SqlitePreferenceStore::new(&config.database.path)
            .context("Failed to create preference store")?,
    );
    let theme = load_theme(preferences.as_ref()).context("Failed to load theme preference")?;
    info!("Theme preference: {}", theme.as_str());

    // Create TMDB client if configured
    let catalog: Option<Arc<dyn MovieCatalog>> = match &config.catalog {
        Some(catalog_config) => {
            info!("Initializing TMDB catalog client");
            match TmdbClient::new(catalog_config.clone()) {
                Ok(client) => Some(Arc::new(client)),
                Err(e) => {
                    error!("Failed to initialize TMDB client: {}", e);
                    None
                }
            }
        }
        None => {
            info!("No catalog configured, search will be unavailable");
            None
        }
    };

    // Create export pipeline and image proxy
    let poster_fetcher = Arc::new(
        HttpPosterFetcher::new(&config.export).context("Failed to create poster fetcher")?,
    );
    let exporter = Arc::new(PdfExporter::new(poster_fetcher));
    let image_proxy =
        Arc::new(ImageProxy::new(&config.export).context("Failed to create image proxy")?);
    info!("Export pipeline initialized");

    // Create app state
    let state = Arc::new(AppState::new(
        config.clone(),
        catalog,
        favorites,
        preferences,
        exporter,
        image_proxy,
    ));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutting down");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
