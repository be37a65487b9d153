//! HARU LLM - Generation Abstraction Layer
//!
//! Provider-agnostic traits for daily-content text generation, the quota
//! classification heuristic, and the model fallback ladder. The production
//! backend (Gemini REST) lives under [`providers`]; callers only see
//! [`GenerationProvider`].

use std::time::Duration;

use async_trait::async_trait;
use haru_core::GenerationError;

pub mod providers;

pub use providers::gemini::{GeminiBackend, GeminiClient};

// ============================================================================
// QUOTA CLASSIFICATION
// ============================================================================

/// Default ordered model ladder, strongest first.
pub const DEFAULT_MODEL_LADDER: [&str; 3] = [
    "gemini-2.5-flash",
    "gemini-2.0-flash",
    "gemini-2.0-flash-lite",
];

/// Default wait before the one same-model retry on a quota signal.
pub const QUOTA_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Classify a provider error message as a rate-limit/quota signal.
///
/// The upstream provider does not expose a structured error class, so this
/// is a documented substring heuristic - fragile by nature, and therefore
/// kept in exactly one place. Everything that needs to distinguish "quota"
/// from "other failure" (the retry ladder, the orchestrator's boundary
/// translation) goes through this function.
pub fn is_quota_signal(message: &str) -> bool {
    message.contains("429") || message.contains("RESOURCE_EXHAUSTED") || message.contains("quota")
}

// ============================================================================
// TRAITS
// ============================================================================

/// One generation attempt against one named model.
///
/// Implementations must be thread-safe (Send + Sync). The returned string is
/// the raw model output; it may contain a JSON document wrapped in markdown
/// code fences, which callers strip before parsing.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text from `prompt` using `model`.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError>;
}

/// A complete generation call, with whatever fallback/retry the
/// implementation provides. This is the seam the orchestrator consumes.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generate text from `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

// ============================================================================
// FALLBACK LADDER
// ============================================================================

/// Generation provider that walks an ordered model ladder.
///
/// Per model: up to 2 attempts. A quota signal on the first attempt waits
/// `retry_delay` and retries the same model once; any other failure, or a
/// second failure, advances to the next model without delay. The ladder
/// spends at most one deliberate extra attempt per model, and only on quota
/// errors, so provider quota is consumed sparingly while still riding out
/// availability fluctuations.
pub struct FallbackGenerator<B> {
    backend: B,
    models: Vec<String>,
    retry_delay: Duration,
}

impl<B> FallbackGenerator<B> {
    /// Create a generator over `backend` with the default ladder and delay.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            models: DEFAULT_MODEL_LADDER.iter().map(|m| m.to_string()).collect(),
            retry_delay: QUOTA_RETRY_DELAY,
        }
    }

    /// Replace the model ladder.
    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }

    /// Replace the quota-retry delay.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// The configured ladder, in order.
    pub fn models(&self) -> &[String] {
        &self.models
    }
}

#[async_trait]
impl<B: GenerationBackend> GenerationProvider for FallbackGenerator<B> {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut last_error: Option<GenerationError> = None;

        for model in &self.models {
            for attempt in 0..2 {
                match self.backend.generate(model, prompt).await {
                    Ok(text) => return Ok(text),
                    Err(err) => {
                        let quota = is_quota_signal(err.message());
                        tracing::warn!(model = %model, attempt, quota, error = %err, "generation attempt failed");
                        last_error = Some(err);

                        if quota && attempt == 0 {
                            tokio::time::sleep(self.retry_delay).await;
                            continue;
                        }
                        break;
                    }
                }
            }
        }

        Err(GenerationError::Exhausted {
            last: last_error
                .map(|e| e.message().to_string())
                .unwrap_or_else(|| "no models configured".to_string()),
        })
    }
}
