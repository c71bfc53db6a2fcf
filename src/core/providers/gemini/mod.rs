//! Google Gemini Provider
//!
//! Single-turn text generation against the Google AI Studio API.

pub mod client;
pub mod error;
pub mod models;

// Re-export main types
pub use client::GeminiClient;
pub use error::GeminiErrorMapper;
pub use models::{GenerateContentRequest, GenerateContentResponse};
