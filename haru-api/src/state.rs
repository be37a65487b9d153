//! Shared application state for Axum routers.

use std::sync::Arc;

use haru_content::ContentOrchestrator;
use haru_core::Clock;
use haru_storage::DocumentStore;

/// Application-wide state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// The daily content pipeline. Owns the memory cache.
    pub orchestrator: Arc<ContentOrchestrator>,
    /// Clock shared with the orchestrator so handlers deriving the
    /// day-of-year variant and the pipeline deriving the cache key can
    /// never disagree about which day it is.
    pub clock: Arc<dyn Clock>,
    /// Raw store handle, used only by the readiness probe.
    pub store: Arc<dyn DocumentStore>,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(
        orchestrator: Arc<ContentOrchestrator>,
        clock: Arc<dyn Clock>,
        store: Arc<dyn DocumentStore>,
    ) -> Self {
        Self {
            orchestrator,
            clock,
            store,
            start_time: std::time::Instant::now(),
        }
    }
}
