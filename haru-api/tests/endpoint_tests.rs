//! HTTP surface tests for the content endpoints
//!
//! Drives the assembled router with in-process requests and asserts the
//! status/body contract for each failure class.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use haru_api::{create_api_router, ApiConfig, AppState};
use haru_content::ContentOrchestrator;
use haru_llm::GenerationProvider;
use haru_storage::DocumentStore;
use haru_test_utils::{FailingStore, ManualClock, ScriptedProvider};

const HISTORY_TEXT: &str = "```json\n{\"topic\":\"T\",\"category\":\"History\",\"summary\":\"S\",\"keyFacts\":[\"a\",\"b\",\"c\",\"d\",\"e\"],\"reflection\":\"R\"}\n```";

struct TestApp {
    router: axum::Router,
    store: Arc<FailingStore>,
}

fn test_app(provider: Option<ScriptedProvider>) -> TestApp {
    let clock = Arc::new(ManualClock::at_noon_utc(2026, 2, 15));
    let store = Arc::new(FailingStore::new());
    let provider = provider.map(|p| Arc::new(p) as Arc<dyn GenerationProvider>);

    let orchestrator = Arc::new(ContentOrchestrator::new(
        clock.clone(),
        store.clone() as Arc<dyn DocumentStore>,
        provider,
    ));
    let state = AppState::new(orchestrator, clock, store.clone());
    let router = create_api_router(state, &ApiConfig::default());

    TestApp { router, store }
}

async fn get_json(router: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_history_success_returns_record_json() {
    let app = test_app(Some(ScriptedProvider::always(HISTORY_TEXT)));

    let (status, body) = get_json(&app.router, "/api/history").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["topic"], "T");
    assert_eq!(body["keyFacts"].as_array().unwrap().len(), 5);

    // The record was persisted under today's key as a side effect.
    assert!(app.store.inner().contains("daily-history", "2026-02-15"));
}

#[tokio::test]
async fn test_quota_exhaustion_returns_429_with_kind_message() {
    let app = test_app(Some(ScriptedProvider::always_quota_exhausted()));

    let (status, body) = get_json(&app.router, "/api/history").await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        body["error"],
        "The AI quota has been exhausted. Please try again shortly."
    );
}

#[tokio::test]
async fn test_invalid_output_returns_500_with_generic_message() {
    let app = test_app(Some(ScriptedProvider::always("garbage, not json")));

    let (status, body) = get_json(&app.router, "/api/literature").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate the literature excerpt.");
}

#[tokio::test]
async fn test_store_outage_returns_503_with_underlying_message() {
    let app = test_app(Some(ScriptedProvider::always(HISTORY_TEXT)));
    app.store.fail_reads(true);

    let (status, body) = get_json(&app.router, "/api/history").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Database connection failed:"));
    assert!(message.contains("simulated store outage"));
}

#[tokio::test]
async fn test_missing_provider_returns_500() {
    let app = test_app(None);

    let (status, body) = get_json(&app.router, "/api/generate").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("credentials are not configured"));
}

#[tokio::test]
async fn test_vocabulary_endpoint_serves_persisted_record_without_provider() {
    let app = test_app(None);
    app.store
        .inner()
        .put(
            "daily-vocabulary",
            "2026-02-15",
            &serde_json::json!({
                "subject": "travel",
                "language": "English",
                "vocabulary": [{"word": "w", "meaning": "m", "pronunciation": "p"}]
            }),
        )
        .await
        .unwrap();

    let (status, body) = get_json(&app.router, "/api/generate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subject"], "travel");
}

#[tokio::test]
async fn test_health_ping_and_ready() {
    let app = test_app(None);

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health/ping")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, body) = get_json(&app.router, "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["details"]["store"]["latency_ms"].is_u64() || body["details"]["store"]["latency_ms"].is_number());
}

#[tokio::test]
async fn test_health_ready_degrades_on_store_outage() {
    let app = test_app(None);
    app.store.fail_reads(true);

    let (status, body) = get_json(&app.router, "/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
    assert!(body["details"]["store"]["error"]
        .as_str()
        .unwrap()
        .contains("simulated store outage"));
}
