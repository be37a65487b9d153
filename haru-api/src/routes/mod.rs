//! Route assembly

pub mod content;
pub mod health;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::state::AppState;

/// Assemble the full application router: content endpoints under `/api`,
/// health checks under `/health`, CORS and request tracing on top.
pub fn create_api_router(state: AppState, config: &ApiConfig) -> Router {
    let api = Router::new()
        .route("/generate", get(content::vocabulary))
        .route("/history", get(content::history))
        .route("/literature", get(content::literature))
        .with_state(state.clone());

    Router::new()
        .nest("/api", api)
        .nest("/health", health::create_router(state))
        .layer(config.cors_layer())
        .layer(TraceLayer::new_for_http())
}
