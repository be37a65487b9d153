//! Gemini HTTP client

use super::types::{ApiError, GenerateContentRequest, GenerateContentResponse};
use haru_core::GenerationError;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Thin HTTP client for the Generative Language API.
///
/// One instance is shared across all models; the model name is part of the
/// request path, not the client.
pub struct GeminiClient {
    client: Client,
    api_key: SecretString,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into().into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (used against local stand-ins).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// One `generateContent` call against one named model.
    ///
    /// Non-success responses are folded into `GenerationError::RequestFailed`
    /// whose message embeds the HTTP status code and the provider's canonical
    /// status string - the exact text the quota classifier inspects.
    pub async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            model,
            self.api_key.expose_secret()
        );
        let body = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed {
                model: model.to_string(),
                message: format!("HTTP request failed: {}", e),
            })?;

        let status = response.status();

        if status.is_success() {
            let parsed: GenerateContentResponse =
                response
                    .json()
                    .await
                    .map_err(|e| GenerationError::RequestFailed {
                        model: model.to_string(),
                        message: format!("Failed to parse response: {}", e),
                    })?;

            parsed
                .first_text()
                .ok_or_else(|| GenerationError::RequestFailed {
                    model: model.to_string(),
                    message: "Response contained no candidate text".to_string(),
                })
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            let message = match serde_json::from_str::<ApiError>(&error_text) {
                Ok(api_error) => {
                    let detail = api_error.error;
                    match detail.status {
                        Some(canonical) => {
                            format!("{} {}: {}", status.as_u16(), canonical, detail.message)
                        }
                        None => format!("{} {}", status.as_u16(), detail.message),
                    }
                }
                Err(_) => format!("{} {}", status.as_u16(), error_text),
            };

            Err(GenerationError::RequestFailed {
                model: model.to_string(),
                message,
            })
        }
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
