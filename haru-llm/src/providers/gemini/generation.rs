//! Gemini generation backend

use super::client::GeminiClient;
use crate::GenerationBackend;
use async_trait::async_trait;
use haru_core::GenerationError;

/// [`GenerationBackend`] over the Gemini REST API.
///
/// Wrap in a [`FallbackGenerator`](crate::FallbackGenerator) to get the
/// model ladder; this type performs exactly one attempt per call.
#[derive(Debug)]
pub struct GeminiBackend {
    client: GeminiClient,
}

impl GeminiBackend {
    /// Create a backend from an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: GeminiClient::new(api_key),
        }
    }

    /// Create a backend from an already-configured client.
    pub fn from_client(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        self.client.generate_content(model, prompt).await
    }
}
