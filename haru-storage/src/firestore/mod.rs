//! Firestore REST adapter
//!
//! Production [`DocumentStore`](crate::DocumentStore) over the Firestore
//! REST API. Authentication uses a service account: an RS256-signed JWT
//! assertion is exchanged for a short-lived bearer token on first use and
//! cached until shortly before expiry.

pub mod credentials;
pub mod token;
pub mod value;

pub use credentials::{ServiceAccountKey, SERVICE_ACCOUNT_ENV};

use async_trait::async_trait;
use chrono::Utc;
use haru_core::{ConfigError, StoreError, CREATED_AT_FIELD};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::DocumentStore;
use token::TokenProvider;

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Firestore-backed document store.
pub struct FirestoreStore {
    client: Client,
    key: ServiceAccountKey,
    tokens: TokenProvider,
    base_url: String,
}

/// Wire shape of a Firestore document.
#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    #[serde(default)]
    fields: Option<serde_json::Map<String, Value>>,
}

impl FirestoreStore {
    /// Create a store from explicit credentials.
    pub fn new(key: ServiceAccountKey) -> Self {
        let client = Client::new();
        Self {
            tokens: TokenProvider::new(client.clone()),
            client,
            key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a store from `FIREBASE_SERVICE_ACCOUNT_BASE64`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ServiceAccountKey::from_env()?))
    }

    /// Override the API base URL (used against local stand-ins).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn document_url(&self, collection: &str, day: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}/{}",
            self.base_url,
            self.key.project_id(),
            collection,
            day
        )
    }

    async fn bearer_token(&self) -> Result<String, StoreError> {
        self.tokens.token(&self.key).await
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn get(&self, collection: &str, day: &str) -> Result<Option<Value>, StoreError> {
        let token = self.bearer_token().await?;
        let url = self.document_url(collection, day);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable {
                message: format!("HTTP request failed: {}", e),
            })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if status.is_success() {
            let document: FirestoreDocument =
                response.json().await.map_err(|e| StoreError::Unavailable {
                    message: format!("Failed to parse document: {}", e),
                })?;
            let fields = document.fields.unwrap_or_default();
            Ok(Some(value::from_firestore_fields(&fields)))
        } else {
            let body = response.text().await.unwrap_or_default();
            let message = format!("{} {}", status.as_u16(), body);
            match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Err(StoreError::Credentials { message })
                }
                _ => Err(StoreError::Unavailable { message }),
            }
        }
    }

    async fn put(&self, collection: &str, day: &str, document: &Value) -> Result<(), StoreError> {
        let write_failed = |message: String| StoreError::WriteFailed {
            collection: collection.to_string(),
            day: day.to_string(),
            message,
        };

        let mut stamped = document
            .as_object()
            .cloned()
            .ok_or_else(|| write_failed("document is not a JSON object".to_string()))?;
        stamped.insert(
            CREATED_AT_FIELD.to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );

        let token = self.bearer_token().await?;
        let url = self.document_url(collection, day);
        let body = serde_json::json!({ "fields": value::to_firestore_fields(&stamped) });

        let response = self
            .client
            .patch(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| write_failed(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(write_failed(format!("{} {}", status.as_u16(), body)))
        }
    }
}

impl std::fmt::Debug for FirestoreStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirestoreStore")
            .field("base_url", &self.base_url)
            .field("project_id", &self.key.project_id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> ServiceAccountKey {
        ServiceAccountKey::for_tests("demo-project", "svc@demo-project.iam.gserviceaccount.com")
    }

    #[test]
    fn test_document_url_layout() {
        let store = FirestoreStore::new(test_key());
        assert_eq!(
            store.document_url("daily-history", "2026-02-15"),
            "https://firestore.googleapis.com/v1/projects/demo-project/databases/(default)/documents/daily-history/2026-02-15"
        );
    }

    #[test]
    fn test_base_url_override() {
        let store = FirestoreStore::new(test_key()).with_base_url("http://localhost:8080/v1");
        assert!(store
            .document_url("daily-history", "2026-02-15")
            .starts_with("http://localhost:8080/v1/projects/demo-project/"));
    }

    #[test]
    fn test_debug_omits_key_material() {
        let store = FirestoreStore::new(test_key());
        let debug = format!("{:?}", store);
        assert!(debug.contains("demo-project"));
        assert!(!debug.contains("PRIVATE KEY"));
    }
}
