#![allow(dead_code)]

use agent_service::services::providers::mock::MockTextProvider;
use agent_service::services::providers::TextProvider;
use agent_service::services::HistoryStore;
use agent_service::startup::{build_router, AppState};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const INDEX_HTML: &str = "<html><body>agent</body></html>";

pub struct TestApp {
    pub router: Router,
    pub provider: Arc<MockTextProvider>,
    pub history_file: PathBuf,
    pub dir: TempDir,
}

impl TestApp {
    pub fn spawn() -> Self {
        Self::with_provider(MockTextProvider::new())
    }

    pub fn with_provider(provider: MockTextProvider) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let static_dir = dir.path().join("static");
        std::fs::create_dir_all(&static_dir).expect("Failed to create static dir");
        std::fs::write(static_dir.join("index.html"), INDEX_HTML)
            .expect("Failed to write index.html");

        let history_file = dir.path().join("agent_history.json");
        let provider = Arc::new(provider);
        let text_provider: Arc<dyn TextProvider> = provider.clone();

        let state = AppState::new(
            text_provider,
            HistoryStore::new(&history_file),
            static_dir.join("index.html"),
        );

        TestApp {
            router: build_router(state),
            provider,
            history_file,
            dir,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: &serde_json::Value) -> (StatusCode, Vec<u8>) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: impl Into<Body>) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }
}

pub fn json(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).expect("Response body is not JSON")
}
