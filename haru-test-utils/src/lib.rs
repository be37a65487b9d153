//! HARU Test Utilities
//!
//! Centralized test infrastructure for the haru workspace:
//! - Manual clock for deterministic content days
//! - Scripted generation provider with call accounting
//! - Failure-injecting store wrapper
//!
//! Production fakes with real behavior (the in-memory store) live in their
//! source crates and are re-exported here for convenience.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use haru_core::{Clock, GenerationError, StoreError};
use haru_llm::GenerationProvider;
use haru_storage::DocumentStore;

// Re-export the in-memory store from its source crate
pub use haru_storage::InMemoryStore;

// Re-export core types for convenience
pub use haru_core::{
    HistoryRecord, LiteratureRecord, VocabWord, VocabularyRecord, CREATED_AT_FIELD,
};

// ============================================================================
// MANUAL CLOCK
// ============================================================================

/// Settable [`Clock`] for tests.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Clock pinned to an explicit instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Clock pinned to noon UTC on a calendar date - late enough past the
    /// +09:00 midnight boundary that the content day equals the given date.
    pub fn at_noon_utc(year: i32, month: u32, day: u32) -> Self {
        Self::at(Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap())
    }

    /// Jump to an explicit instant.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    /// Move the clock forward by whole days.
    pub fn advance_days(&self, days: i64) {
        self.advance(Duration::days(days));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// ============================================================================
// SCRIPTED GENERATION PROVIDER
// ============================================================================

/// [`GenerationProvider`] that replays a scripted sequence of results and
/// counts calls. An exhausted script keeps repeating its final result; an
/// empty script always fails.
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<Result<String, GenerationError>>>,
    last: Mutex<Option<Result<String, GenerationError>>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(responses: Vec<Result<String, GenerationError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            last: Mutex::new(None),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Provider that always returns `text`.
    pub fn always(text: impl Into<String>) -> Self {
        Self::new(vec![Ok(text.into())])
    }

    /// Provider whose every call fails with a quota-signaling exhaustion.
    pub fn always_quota_exhausted() -> Self {
        Self::new(vec![Err(GenerationError::Exhausted {
            last: "429 RESOURCE_EXHAUSTED: quota exceeded".to_string(),
        })])
    }

    /// Number of `generate` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationProvider for ScriptedProvider {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut responses = self.responses.lock().unwrap();
        let mut last = self.last.lock().unwrap();
        if let Some(next) = responses.pop_front() {
            *last = Some(next.clone());
            next
        } else if let Some(repeat) = last.clone() {
            repeat
        } else {
            Err(GenerationError::Exhausted {
                last: "scripted provider has no responses".to_string(),
            })
        }
    }
}

// ============================================================================
// FAILURE-INJECTING STORE
// ============================================================================

/// [`DocumentStore`] wrapper around an [`InMemoryStore`] with switchable
/// read/write failure injection.
#[derive(Debug, Default)]
pub struct FailingStore {
    inner: InMemoryStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `get` fail with `StoreError::Unavailable`.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `put` fail with `StoreError::WriteFailed`.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// The wrapped in-memory store, for seeding and assertions.
    pub fn inner(&self) -> &InMemoryStore {
        &self.inner
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn get(
        &self,
        collection: &str,
        day: &str,
    ) -> Result<Option<serde_json::Value>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                message: "simulated store outage".to_string(),
            });
        }
        self.inner.get(collection, day).await
    }

    async fn put(
        &self,
        collection: &str,
        day: &str,
        document: &serde_json::Value,
    ) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailed {
                collection: collection.to_string(),
                day: day.to_string(),
                message: "simulated write failure".to_string(),
            });
        }
        self.inner.put(collection, day, document).await
    }
}
