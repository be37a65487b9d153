//! HARU Storage - Document Store Trait and In-Memory Implementation
//!
//! Defines the per-(collection, day) document persistence abstraction, the
//! volatile daily cache tier, and the Firestore REST adapter used in
//! production. The in-memory store lives here so every crate's tests can
//! use it without a network.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use haru_core::{StoreError, CREATED_AT_FIELD};
use serde_json::Value;

pub mod cache;
pub mod firestore;

pub use cache::{CacheEntry, CacheStats, DailyCache};
pub use firestore::{FirestoreStore, ServiceAccountKey};

// ============================================================================
// DOCUMENT STORE TRAIT
// ============================================================================

/// Keyed document persistence: one JSON document per (collection, day).
///
/// `get` distinguishes "record absent" (`Ok(None)`) from "store unreachable"
/// (`Err(StoreError::Unavailable)`); callers rely on that distinction to
/// avoid masking outages as cache misses. `put` stamps the document with a
/// `createdAt` ISO-8601 timestamp at write time and overwrites any existing
/// document for the same key.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read one document.
    async fn get(&self, collection: &str, day: &str) -> Result<Option<Value>, StoreError>;

    /// Write one document. The document must be a JSON object.
    async fn put(&self, collection: &str, day: &str, document: &Value) -> Result<(), StoreError>;
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// In-memory [`DocumentStore`] for tests and local development.
///
/// Mirrors the adapter contract exactly, including the `createdAt` stamp
/// and the object-only write restriction.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: RwLock<HashMap<(String, String), Value>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a document exists for the key.
    pub fn contains(&self, collection: &str, day: &str) -> bool {
        self.documents
            .read()
            .map(|d| d.contains_key(&(collection.to_string(), day.to_string())))
            .unwrap_or(false)
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn get(&self, collection: &str, day: &str) -> Result<Option<Value>, StoreError> {
        let documents = self.documents.read().map_err(|_| StoreError::Unavailable {
            message: "store lock poisoned".to_string(),
        })?;
        Ok(documents
            .get(&(collection.to_string(), day.to_string()))
            .cloned())
    }

    async fn put(&self, collection: &str, day: &str, document: &Value) -> Result<(), StoreError> {
        let mut stamped = document
            .as_object()
            .cloned()
            .ok_or_else(|| StoreError::WriteFailed {
                collection: collection.to_string(),
                day: day.to_string(),
                message: "document is not a JSON object".to_string(),
            })?;
        stamped.insert(
            CREATED_AT_FIELD.to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );

        let mut documents = self.documents.write().map_err(|_| StoreError::Unavailable {
            message: "store lock poisoned".to_string(),
        })?;
        documents.insert(
            (collection.to_string(), day.to_string()),
            Value::Object(stamped),
        );
        Ok(())
    }
}
