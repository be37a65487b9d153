//! API Configuration Module
//!
//! CORS and bind configuration loaded from environment variables with
//! development-friendly defaults.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::error::{ApiError, ApiResult};

/// API configuration for CORS and binding.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Allowed CORS origins (comma-separated in env var).
    /// Empty means allow all origins (dev mode).
    pub cors_origins: Vec<String>,

    /// Max age for CORS preflight cache in seconds.
    pub cors_max_age_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(), // Empty = allow all
            cors_max_age_secs: 86400, // 24 hours
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `HARU_CORS_ORIGINS`: Comma-separated allowed origins (empty = allow all)
    /// - `HARU_CORS_MAX_AGE_SECS`: Preflight cache duration (default: 86400)
    pub fn from_env() -> Self {
        let cors_origins = std::env::var("HARU_CORS_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let cors_max_age_secs = std::env::var("HARU_CORS_MAX_AGE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(86400);

        Self {
            cors_origins,
            cors_max_age_secs,
        }
    }

    /// Check if running in production mode (strict CORS).
    pub fn is_production(&self) -> bool {
        !self.cors_origins.is_empty()
    }

    /// Build the CORS layer for the configured origins.
    pub fn cors_layer(&self) -> CorsLayer {
        let layer = CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any)
            .max_age(Duration::from_secs(self.cors_max_age_secs));

        if self.cors_origins.is_empty() {
            layer.allow_origin(Any)
        } else {
            let origins: Vec<HeaderValue> = self
                .cors_origins
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            layer.allow_origin(AllowOrigin::list(origins))
        }
    }
}

/// Resolve the server bind address from the environment.
///
/// - `HARU_API_BIND`: bind host (default `0.0.0.0`)
/// - `PORT` (platform-injected) or `HARU_API_PORT`: port (default `3000`)
pub fn resolve_bind_addr() -> ApiResult<SocketAddr> {
    let host = std::env::var("HARU_API_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port_str = std::env::var("PORT")
        .ok()
        .or_else(|| std::env::var("HARU_API_PORT").ok())
        .unwrap_or_else(|| "3000".to_string());
    let port = port_str
        .parse::<u16>()
        .map_err(|_| ApiError::invalid_input(format!("Invalid port value: {}", port_str)))?;

    let addr = format!("{}:{}", host, port);
    addr.parse::<SocketAddr>()
        .map_err(|e| ApiError::invalid_input(format!("Invalid bind address {}: {}", addr, e)))
}
