//! HARU API Server Entry Point
//!
//! Bootstraps telemetry, constructs the store/provider/orchestrator
//! explicitly, and starts the Axum HTTP server. Missing store credentials
//! fail startup; a missing provider key only degrades the service to
//! serving already-persisted content.

use std::sync::Arc;

use axum::Router;
use haru_api::telemetry::{init_tracing, TelemetryConfig};
use haru_api::{create_api_router, ApiConfig, ApiError, ApiResult, AppState};
use haru_content::ContentOrchestrator;
use haru_core::{Clock, SystemClock};
use haru_llm::{FallbackGenerator, GeminiBackend, GenerationProvider};
use haru_storage::{DocumentStore, FirestoreStore};

const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

#[tokio::main]
async fn main() -> ApiResult<()> {
    let telemetry_config = TelemetryConfig::default();
    init_tracing(&telemetry_config)?;

    let store: Arc<dyn DocumentStore> = Arc::new(FirestoreStore::from_env().map_err(|e| {
        ApiError::internal_error(format!("Failed to initialize document store: {}", e))
    })?);

    let provider = build_provider();
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let orchestrator = Arc::new(ContentOrchestrator::new(
        clock.clone(),
        store.clone(),
        provider,
    ));

    let api_config = ApiConfig::from_env();
    let state = AppState::new(orchestrator, clock, store);
    let app: Router = create_api_router(state, &api_config);

    let addr = haru_api::resolve_bind_addr()?;
    tracing::info!(%addr, "Starting haru API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

/// Build the generation provider from the environment, if configured.
fn build_provider() -> Option<Arc<dyn GenerationProvider>> {
    match std::env::var(GEMINI_API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => {
            let generator = FallbackGenerator::new(GeminiBackend::new(key));
            Some(Arc::new(generator))
        }
        _ => {
            tracing::warn!(
                "{} not set; serving persisted content only, full misses will fail",
                GEMINI_API_KEY_ENV
            );
            None
        }
    }
}
