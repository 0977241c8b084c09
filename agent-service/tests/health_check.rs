//! Integration tests that run the real server on a random port.

use agent_service::services::providers::mock::MockTextProvider;
use agent_service::services::HistoryStore;
use agent_service::startup::{AppState, Application};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Spawn the application on a random port and return the port number.
async fn spawn_app(provider: MockTextProvider, dir: &tempfile::TempDir) -> u16 {
    let state = AppState::new(
        Arc::new(provider),
        HistoryStore::new(dir.path().join("agent_history.json")),
        dir.path().join("index.html"),
    );

    let app = Application::build_with_state(0, state)
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for the server to accept connections
    let client = Client::new();
    for _ in 0..50 {
        if client
            .get(format!("http://127.0.0.1:{}/health", port))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let dir = tempfile::tempdir().unwrap();
    let port = spawn_app(MockTextProvider::new(), &dir).await;

    let response = Client::new()
        .get(format!("http://127.0.0.1:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "agent-service");
}

#[tokio::test]
async fn readiness_reflects_provider_health() {
    let dir = tempfile::tempdir().unwrap();
    let ready = spawn_app(MockTextProvider::new(), &dir).await;
    let not_ready = spawn_app(MockTextProvider::failing("no key"), &dir).await;
    let client = Client::new();

    let response = client
        .get(format!("http://127.0.0.1:{}/ready", ready))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let response = client
        .get(format!("http://127.0.0.1:{}/ready", not_ready))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 503);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Service unavailable" }));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let dir = tempfile::tempdir().unwrap();
    let port = spawn_app(MockTextProvider::new(), &dir).await;

    let response = Client::new()
        .request(
            reqwest::Method::OPTIONS,
            format!("http://127.0.0.1:{}/api/chat", port),
        )
        .header("Origin", "https://elsewhere.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}

#[tokio::test]
async fn chat_round_trip_over_http() {
    let dir = tempfile::tempdir().unwrap();
    let port = spawn_app(MockTextProvider::new(), &dir).await;

    let response = Client::new()
        .post(format!("http://127.0.0.1:{}/api/chat", port))
        .json(&serde_json::json!({ "prompt": "ping" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["text"], "Mock response for: ping");
}
