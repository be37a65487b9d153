//! Health Check Endpoints
//!
//! Provides Kubernetes-compatible health check endpoints:
//! - /health/ping - Simple liveness check
//! - /health/live - Process alive check
//! - /health/ready - Document-store connectivity check
//!
//! No authentication required for health endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use haru_storage::DocumentStore;

use crate::state::AppState;

const PROBE_COLLECTION: &str = "health";

// ============================================================================
// TYPES
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HealthDetails>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
pub struct HealthDetails {
    pub store: ComponentHealth,
    pub cache: CacheHealth,
    pub version: String,
    pub uptime_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
pub struct ComponentHealth {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Memory-cache counters from the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
pub struct CacheHealth {
    pub entries: u64,
    pub hits: u64,
    pub misses: u64,
}

// ============================================================================
// HANDLERS
// ============================================================================

/// GET /health/ping - Simple pong response
#[utoipa::path(
    get,
    path = "/health/ping",
    tag = "Health",
    responses(
        (status = 200, description = "Service is responding", body = String),
    ),
)]
pub async fn ping() -> impl IntoResponse {
    (StatusCode::OK, "pong")
}

/// GET /health/live - Process liveness check
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "Health",
    responses(
        (status = 200, description = "Process is alive", body = HealthResponse),
    ),
)]
pub async fn liveness() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        message: Some("Process is alive".to_string()),
        details: None,
    };
    (StatusCode::OK, Json(response))
}

/// GET /health/ready - Readiness check (document-store connectivity)
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = HealthResponse),
        (status = 503, description = "Service is not ready", body = HealthResponse),
    ),
)]
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let store_health = match check_store(&state).await {
        Ok(latency) => ComponentHealth {
            status: HealthStatus::Healthy,
            latency_ms: Some(latency),
            error: None,
        },
        Err(e) => ComponentHealth {
            status: HealthStatus::Unhealthy,
            latency_ms: None,
            error: Some(e),
        },
    };

    let overall_status = store_health.status;
    let cache_stats = state.orchestrator.cache_stats();

    let response = HealthResponse {
        status: overall_status,
        message: None,
        details: Some(HealthDetails {
            store: store_health,
            cache: CacheHealth {
                entries: cache_stats.entry_count,
                hits: cache_stats.hits,
                misses: cache_stats.misses,
            },
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: state.start_time.elapsed().as_secs(),
        }),
    };

    let status_code = if overall_status == HealthStatus::Healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}

/// Probe the store with a read of a document that need not exist; an absent
/// document still proves the store answered.
async fn check_store(state: &AppState) -> Result<u64, String> {
    let start = std::time::Instant::now();
    let day = state.clock.today_key();

    match state.store.get(PROBE_COLLECTION, &day).await {
        Ok(_) => Ok(start.elapsed().as_millis() as u64),
        Err(e) => Err(format!("Store check failed: {}", e)),
    }
}

// ============================================================================
// ROUTER
// ============================================================================

/// Create health check router (no auth required)
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/live", get(liveness))
        .route("/ready", get(readiness))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: HealthStatus::Healthy,
            message: Some("All systems operational".to_string()),
            details: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
    }

    #[test]
    fn test_component_health_with_error() {
        let component = ComponentHealth {
            status: HealthStatus::Unhealthy,
            latency_ms: None,
            error: Some("Connection refused".to_string()),
        };

        let json = serde_json::to_string(&component).unwrap();
        assert!(json.contains("\"status\":\"unhealthy\""));
        assert!(json.contains("Connection refused"));
    }

    #[test]
    fn test_health_details_structure() {
        let details = HealthDetails {
            store: ComponentHealth {
                status: HealthStatus::Healthy,
                latency_ms: Some(5),
                error: None,
            },
            cache: CacheHealth {
                entries: 3,
                hits: 10,
                misses: 2,
            },
            version: "0.2.0".to_string(),
            uptime_seconds: 3600,
        };

        let json = serde_json::to_string(&details).unwrap();
        assert!(json.contains("\"version\":\"0.2.0\""));
        assert!(json.contains("\"uptime_seconds\":3600"));
        assert!(json.contains("\"entries\":3"));
    }
}
