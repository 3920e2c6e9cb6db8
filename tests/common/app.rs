//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

use rampart::assets::AssetLoader;
use rampart::models::AppConfig;
use rampart::server::{build_router, create_app_state_with_config, AppState};

/// Boundary used for all hand-built multipart bodies
pub const BOUNDARY: &str = "rampart-test-boundary";

/// Test application with router, state access and isolated storage
pub struct TestApp {
    router: axum::Router,
    pub state: AppState,
    // Keeps the storage directories alive for the duration of the test
    _storage: tempfile::TempDir,
}

impl TestApp {
    /// Create a test application with default config and temp storage
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    /// Create a test application with a tweaked config.
    ///
    /// Storage directories always point into a per-test temp dir so tests
    /// never see each other's files.
    pub fn with_config(tweak: impl FnOnce(&mut AppConfig)) -> Self {
        let storage = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = AppConfig::default();
        config.upload_dir = storage.path().join("uploaded");
        config.converted_dir = storage.path().join("converted");
        tweak(&mut config);

        // Embedded assets only (no external paths)
        let asset_loader = Arc::new(AssetLoader::new(None, None));

        let state = create_app_state_with_config(config, asset_loader)
            .expect("Failed to create app state");

        // Build router using shared server module (same as production)
        let router = build_router(state.clone());

        Self {
            router,
            state,
            _storage: storage,
        }
    }

    pub fn upload_dir(&self) -> &Path {
        self.state.store.upload_dir()
    }

    pub fn converted_dir(&self) -> &Path {
        self.state.store.converted_dir()
    }

    /// File names currently in the upload directory, sorted
    pub fn uploaded_files(&self) -> Vec<String> {
        read_dir_names(self.upload_dir())
    }

    /// File names currently in the converted directory, sorted
    pub fn converted_files(&self) -> Vec<String> {
        read_dir_names(self.converted_dir())
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// POST a multipart/form-data body built from the given parts
    pub async fn post_multipart(&self, path: &str, parts: &[MultipartPart]) -> TestResponse {
        let body = encode_multipart(parts);
        let request = Request::post(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }

    /// POST a raw body with an arbitrary content type
    pub async fn post_raw(&self, path: &str, content_type: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", content_type)
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

fn read_dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read dir")
        .flatten()
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

/// One part of a hand-built multipart/form-data body
pub struct MultipartPart {
    pub name: &'static str,
    pub file_name: Option<&'static str>,
    pub content_type: Option<&'static str>,
    pub data: Vec<u8>,
}

impl MultipartPart {
    /// A file part (Content-Disposition carries a filename parameter)
    pub fn file(
        name: &'static str,
        file_name: &'static str,
        content_type: &'static str,
        data: Vec<u8>,
    ) -> Self {
        Self {
            name,
            file_name: Some(file_name),
            content_type: Some(content_type),
            data,
        }
    }

    /// A plain text field (no filename parameter)
    pub fn text(name: &'static str, value: &str) -> Self {
        Self {
            name,
            file_name: None,
            content_type: None,
            data: value.as_bytes().to_vec(),
        }
    }
}

/// Encode parts to a multipart/form-data body, binary safe
fn encode_multipart(parts: &[MultipartPart]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());

        let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", part.name);
        if let Some(file_name) = part.file_name {
            disposition.push_str(&format!("; filename=\"{file_name}\""));
        }
        disposition.push_str("\r\n");
        body.extend_from_slice(disposition.as_bytes());

        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }

        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(&part.data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get raw body bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Content-Type header value, if any
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
    }
}
