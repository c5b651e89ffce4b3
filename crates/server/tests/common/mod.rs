//! Common test utilities for API testing with mocks.
//!
//! Provides an in-process server with mock dependencies injected, so
//! the full HTTP surface can be tested without external infrastructure.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use flicklist_core::testing::{MockMovieCatalog, MockPosterFetcher};
use flicklist_core::{
    Config, FavoritesStore, ImageProxy, MovieCatalog, PdfExporter, SqliteFavoritesStore,
    SqlitePreferenceStore,
};

use flicklist_server::api::create_router;
use flicklist_server::state::AppState;

/// Re-export fixtures for test convenience
pub use flicklist_core::testing::fixtures;

/// Test fixture for API testing with mock dependencies.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_add_favorite() {
///     let fixture = TestFixture::new().await;
///
///     let response = fixture.post("/api/favorites", json!({
///         "tmdb_id": 603,
///         "title": "The Matrix"
///     })).await;
///
///     assert_eq!(response.status, 201);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock catalog - configure search results
    pub catalog: Arc<MockMovieCatalog>,
    /// The shared state behind the router, for direct assertions
    pub state: Arc<AppState>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with a mock catalog configured.
    pub async fn new() -> Self {
        Self::build(true).await
    }

    /// Create a fixture without a catalog (search unavailable).
    pub async fn without_catalog() -> Self {
        Self::build(false).await
    }

    async fn build(enable_catalog: bool) -> Self {
        let catalog = Arc::new(MockMovieCatalog::new());
        let favorites: Arc<dyn FavoritesStore> =
            Arc::new(SqliteFavoritesStore::in_memory().expect("Failed to create favorites store"));
        let preferences = Arc::new(
            SqlitePreferenceStore::in_memory().expect("Failed to create preference store"),
        );

        let config = Config::default();

        // Failing poster fetcher keeps exports offline (text-only rows)
        let exporter = Arc::new(PdfExporter::new(Arc::new(MockPosterFetcher::failing())));
        let image_proxy =
            Arc::new(ImageProxy::new(&config.export).expect("Failed to create image proxy"));

        let catalog_dep: Option<Arc<dyn MovieCatalog>> = if enable_catalog {
            Some(Arc::clone(&catalog) as Arc<dyn MovieCatalog>)
        } else {
            None
        };

        let state = Arc::new(AppState::new(
            config,
            catalog_dep,
            favorites,
            preferences,
            exporter,
            image_proxy,
        ));

        let router = create_router(Arc::clone(&state));

        Self {
            router,
            catalog,
            state,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a GET request and return the raw response for header checks.
    pub async fn get_raw(&self, path: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        (status, headers, body)
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a PUT request with JSON body.
    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        self.request("PUT", path, Some(body)).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request("DELETE", path, None).await
    }

    /// Send a POST request with raw string body (for malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        self.send(request_builder.body(body).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
