//! Error types for haru operations

use thiserror::Error;

/// Generation provider errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Request to model {model} failed: {message}")]
    RequestFailed { model: String, message: String },

    #[error("All models in the fallback ladder exhausted: {last}")]
    Exhausted { last: String },

    #[error("Model output could not be used: {reason}")]
    InvalidOutput { reason: String },
}

impl GenerationError {
    /// The underlying provider message, used by the quota classifier.
    pub fn message(&self) -> &str {
        match self {
            GenerationError::RequestFailed { message, .. } => message,
            GenerationError::Exhausted { last } => last,
            GenerationError::InvalidOutput { reason } => reason,
        }
    }
}

/// Document store errors.
///
/// An absent document is not an error (`get` returns `Ok(None)`); these
/// variants all describe a store that could not answer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store unavailable: {message}")]
    Unavailable { message: String },

    #[error("Store credentials rejected or malformed: {message}")]
    Credentials { message: String },

    #[error("Write failed for {collection}/{day}: {message}")]
    WriteFailed {
        collection: String,
        day: String,
        message: String,
    },
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration: {field}")]
    MissingRequired { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Master error type for all haru errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HaruError {
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for haru operations.
pub type HaruResult<T> = Result<T, HaruError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_display() {
        let err = GenerationError::RequestFailed {
            model: "gemini-2.5-flash".to_string(),
            message: "429 Too Many Requests".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("gemini-2.5-flash"));
        assert!(msg.contains("429"));
    }

    #[test]
    fn test_generation_error_message_accessor() {
        let err = GenerationError::Exhausted {
            last: "RESOURCE_EXHAUSTED".to_string(),
        };
        assert_eq!(err.message(), "RESOURCE_EXHAUSTED");
    }

    #[test]
    fn test_store_error_display_carries_underlying() {
        let err = StoreError::Unavailable {
            message: "connection refused".to_string(),
        };
        assert!(format!("{}", err).contains("connection refused"));
    }

    #[test]
    fn test_master_error_from_conversions() {
        let err: HaruError = ConfigError::MissingRequired {
            field: "GEMINI_API_KEY".to_string(),
        }
        .into();
        assert!(matches!(err, HaruError::Config(_)));
        assert!(format!("{}", err).contains("GEMINI_API_KEY"));
    }
}
