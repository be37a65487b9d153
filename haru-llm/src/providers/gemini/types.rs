//! Gemini API request and response types

use serde::{Deserialize, Serialize};

// ============================================================================
// GENERATE CONTENT TYPES
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Build a single-turn request from a plain text prompt.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        Some(
            content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join(""),
        )
    }
}

// ============================================================================
// ERROR TYPES
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub code: i32,
    pub message: String,
    /// Canonical status string, e.g. "RESOURCE_EXHAUSTED".
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_prompt_shape() {
        let request = GenerateContentRequest::from_prompt("hello");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_response_first_text() {
        let json = serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "a"}, {"text": "b"}]}}
            ]
        });
        let response: GenerateContentResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.first_text().unwrap(), "ab");
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(response.first_text().is_none());
    }

    #[test]
    fn test_error_detail_parses_status() {
        let json = serde_json::json!({
            "error": {"code": 429, "message": "quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        });
        let err: ApiError = serde_json::from_value(json).unwrap();
        assert_eq!(err.error.code, 429);
        assert_eq!(err.error.status.as_deref(), Some("RESOURCE_EXHAUSTED"));
    }
}
