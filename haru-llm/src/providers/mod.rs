//! Generation provider implementations
//!
//! Concrete backends for the [`GenerationBackend`](crate::GenerationBackend)
//! trait. The only production backend is Gemini; tests script their own.

pub mod gemini;

pub use gemini::{GeminiBackend, GeminiClient};
