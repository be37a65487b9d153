//! Gemini (Google Generative Language) provider implementation

pub mod client;
pub mod generation;
pub mod types;

pub use client::GeminiClient;
pub use generation::GeminiBackend;
