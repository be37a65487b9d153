//! HARU API - HTTP Layer
//!
//! Axum HTTP layer for the haru daily-content service. Exposes the three
//! content endpoints (vocabulary, history, literature), Kubernetes-style
//! health checks, and the OpenAPI document. All pipeline behavior lives in
//! `haru-content`; this crate only adapts it to HTTP.

pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod telemetry;

// Re-export commonly used types
pub use config::{resolve_bind_addr, ApiConfig};
pub use error::{ApiError, ApiResult, ErrorBody, ErrorCode};
pub use openapi::ApiDoc;
pub use routes::create_api_router;
pub use state::AppState;
