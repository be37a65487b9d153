//! HARU Content - Daily Content Orchestrator
//!
//! Composes the clock, the generation provider, and the document store into
//! the cache-and-generate pipeline: memory cache, then persistent store,
//! then generation, persisting and caching the result. One document per
//! (collection, content day); generation runs at most once per day per
//! process, and at most once per day globally whenever the store is
//! reachable.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use haru_core::{Clock, GenerationError, StoreError};
use haru_llm::{is_quota_signal, GenerationProvider};
use haru_storage::{CacheStats, DailyCache, DocumentStore};

pub mod fence;
pub mod kinds;

pub use fence::strip_code_fences;

/// Fixed message for requests that need generation while no provider key is
/// configured. Not caller-supplied: the condition is an operator problem,
/// not a content-kind problem.
pub const PROVIDER_KEY_MISSING: &str =
    "Generation provider credentials are not configured.";

// ============================================================================
// OPTIONS AND ERRORS
// ============================================================================

/// Structural check applied to a parsed record before it is accepted.
pub type Validator = fn(&Value) -> bool;

/// Per-kind inputs to [`ContentOrchestrator::resolve`].
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Store collection and cache key for this content kind.
    pub collection: String,
    /// Prompt sent to the generation provider on a full miss.
    pub prompt: String,
    /// Accepts or rejects the parsed record.
    pub validate: Validator,
    /// User-facing message when the provider is rate-limited.
    pub quota_message: String,
    /// User-facing message for any other generation failure.
    pub error_message: String,
}

/// Boundary failure taxonomy of the pipeline.
///
/// `QuotaExceeded` and `GenerationFailed` carry the caller-supplied,
/// per-kind messages; the other variants carry their own.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("{message}")]
    QuotaExceeded { message: String },

    #[error("{message}")]
    GenerationFailed { message: String },

    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("{message}")]
    CredentialsUnconfigured { message: String },
}

// ============================================================================
// ORCHESTRATOR
// ============================================================================

/// Daily content pipeline over injected collaborators.
///
/// Owns the process-wide memory cache. The provider is optional: without
/// one, cached and persisted content still serves and only full misses fail
/// (with `CredentialsUnconfigured`).
pub struct ContentOrchestrator {
    clock: Arc<dyn Clock>,
    store: Arc<dyn DocumentStore>,
    provider: Option<Arc<dyn GenerationProvider>>,
    cache: DailyCache,
}

impl ContentOrchestrator {
    pub fn new(
        clock: Arc<dyn Clock>,
        store: Arc<dyn DocumentStore>,
        provider: Option<Arc<dyn GenerationProvider>>,
    ) -> Self {
        Self {
            clock,
            store,
            provider,
            cache: DailyCache::new(),
        }
    }

    /// Memory-cache statistics, surfaced by the health endpoint.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Resolve today's record for one content kind.
    ///
    /// Strict step order; each tier short-circuits on success:
    /// memory cache, persistent store, generation. A store read failure
    /// aborts the request instead of falling through to generation, so a
    /// persistence outage cannot masquerade as an empty cache and trigger
    /// repeated regeneration. A store *write* failure is logged and
    /// swallowed; the freshly generated record still serves.
    pub async fn resolve(&self, options: &ResolveOptions) -> Result<Value, ResolveError> {
        let day = self.clock.today_key();

        if let Some(record) = self.cache.get(&options.collection, &day) {
            return Ok(record);
        }

        match self.store.get(&options.collection, &day).await {
            Ok(Some(record)) => {
                self.cache.put(&options.collection, &day, record.clone());
                return Ok(record);
            }
            Ok(None) => {}
            Err(err) => {
                tracing::error!(
                    collection = %options.collection,
                    day = %day,
                    error = %err,
                    "store read failed"
                );
                return Err(translate_store_failure(err));
            }
        }

        let provider = self
            .provider
            .as_deref()
            .ok_or_else(|| ResolveError::CredentialsUnconfigured {
                message: PROVIDER_KEY_MISSING.to_string(),
            })?;

        let record = match generate_record(provider, options).await {
            Ok(record) => record,
            Err(err) => {
                tracing::error!(
                    collection = %options.collection,
                    day = %day,
                    error = %err,
                    "generation failed"
                );
                return Err(translate_generation_failure(&err, options));
            }
        };

        if let Err(err) = self.store.put(&options.collection, &day, &record).await {
            tracing::error!(
                collection = %options.collection,
                day = %day,
                error = %err,
                "store write failed; serving unpersisted record"
            );
        }

        self.cache.put(&options.collection, &day, record.clone());
        Ok(record)
    }
}

/// Generate, strip fences, parse, validate. A parse failure and a rejected
/// record are deliberately one failure path.
async fn generate_record(
    provider: &dyn GenerationProvider,
    options: &ResolveOptions,
) -> Result<Value, GenerationError> {
    let raw = provider.generate(&options.prompt).await?;
    let cleaned = strip_code_fences(&raw);

    let record: Value =
        serde_json::from_str(&cleaned).map_err(|e| GenerationError::InvalidOutput {
            reason: format!("model output is not valid JSON: {}", e),
        })?;

    if !(options.validate)(&record) {
        return Err(GenerationError::InvalidOutput {
            reason: "model output failed validation".to_string(),
        });
    }

    Ok(record)
}

fn translate_store_failure(err: StoreError) -> ResolveError {
    match err {
        StoreError::Credentials { message } => ResolveError::CredentialsUnconfigured { message },
        other => ResolveError::StoreUnavailable {
            message: other.to_string(),
        },
    }
}

fn translate_generation_failure(err: &GenerationError, options: &ResolveOptions) -> ResolveError {
    if is_quota_signal(err.message()) {
        ResolveError::QuotaExceeded {
            message: options.quota_message.clone(),
        }
    } else {
        ResolveError::GenerationFailed {
            message: options.error_message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ResolveOptions {
        ResolveOptions {
            collection: "daily-history".to_string(),
            prompt: "p".to_string(),
            validate: |_| true,
            quota_message: "quota msg".to_string(),
            error_message: "generic msg".to_string(),
        }
    }

    #[test]
    fn test_quota_failure_uses_caller_message() {
        let err = GenerationError::Exhausted {
            last: "429 RESOURCE_EXHAUSTED".to_string(),
        };
        assert_eq!(
            translate_generation_failure(&err, &options()),
            ResolveError::QuotaExceeded {
                message: "quota msg".to_string()
            }
        );
    }

    #[test]
    fn test_other_failure_uses_generic_message() {
        let err = GenerationError::InvalidOutput {
            reason: "model output failed validation".to_string(),
        };
        assert_eq!(
            translate_generation_failure(&err, &options()),
            ResolveError::GenerationFailed {
                message: "generic msg".to_string()
            }
        );
    }

    #[test]
    fn test_store_unavailable_carries_underlying_message() {
        let err = StoreError::Unavailable {
            message: "connection refused".to_string(),
        };
        match translate_store_failure(err) {
            ResolveError::StoreUnavailable { message } => {
                assert!(message.contains("connection refused"));
            }
            other => panic!("expected StoreUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_store_credentials_are_not_unavailable() {
        let err = StoreError::Credentials {
            message: "bad key".to_string(),
        };
        assert!(matches!(
            translate_store_failure(err),
            ResolveError::CredentialsUnconfigured { .. }
        ));
    }
}
