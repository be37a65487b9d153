//! Tracing subscriber initialization
//!
//! Sets up the tracing subscriber once at startup: env-filter driven levels,
//! human-readable output by default, JSON formatting for log aggregation
//! when `HARU_LOG_JSON` is set.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{ApiError, ApiResult};

/// Telemetry configuration from environment variables.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name emitted in the startup log line.
    pub service_name: String,
    /// Emit JSON-formatted logs.
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: std::env::var("HARU_SERVICE_NAME")
                .unwrap_or_else(|_| "haru-api".to_string()),
            json_logs: std::env::var("HARU_LOG_JSON")
                .map(|s| s == "true" || s == "1")
                .unwrap_or(false),
        }
    }
}

/// Initialize the tracing subscriber.
///
/// Call once at application startup before any tracing occurs.
pub fn init_tracing(config: &TelemetryConfig) -> ApiResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("haru=debug,tower_http=debug,info"));

    let result = if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
    };

    result.map_err(|e| ApiError::internal_error(format!("Failed to init subscriber: {}", e)))?;

    tracing::info!(
        service_name = config.service_name,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );

    Ok(())
}
