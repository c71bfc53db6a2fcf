//! Upstream generative providers
//!
//! The gateway talks to a provider through [`GenerativeBackend`]. Gemini is
//! the only implementation; tests substitute a mock.

pub mod gemini;

pub use gemini::GeminiClient;
pub use gemini::models::GenerateContentResponse;

use async_trait::async_trait;
use thiserror::Error;

/// Failure talking to an upstream provider
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Provider answered with a non-success status
    #[error("{provider} responded with status {status}")]
    Status {
        provider: &'static str,
        status: u16,
        /// Raw body, kept for logs only
        body: String,
    },

    /// Request never completed
    #[error("{provider} network error: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    /// Response body could not be decoded
    #[error("{provider} returned an unreadable response: {message}")]
    Decode {
        provider: &'static str,
        message: String,
    },
}

impl UpstreamError {
    pub fn provider(&self) -> &'static str {
        match self {
            UpstreamError::Status { provider, .. }
            | UpstreamError::Network { provider, .. }
            | UpstreamError::Decode { provider, .. } => provider,
        }
    }

    /// Upstream HTTP status, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Caller-facing message; never includes the upstream body
    pub fn user_message(&self) -> &'static str {
        match self.status() {
            Some(400) => "The AI service rejected the request",
            Some(401) => "AI service authentication failed",
            Some(403) => "Access denied by the AI service",
            Some(429) => "AI service quota exceeded, please try again later",
            Some(_) => "AI service error",
            None => "Internal error",
        }
    }
}

/// A provider that turns one prompt into generated content
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Model identifier reported in response metadata
    fn model(&self) -> String;

    /// Issue exactly one generation request
    async fn generate(&self, prompt: &str) -> Result<GenerateContentResponse, UpstreamError>;
}
