//! Gemini error mapping

use crate::core::providers::UpstreamError;
use crate::utils::truncate_chars;

const PROVIDER: &str = "gemini";

/// Longest upstream body kept for logging
const MAX_LOGGED_BODY_CHARS: usize = 2_000;

/// Maps Gemini HTTP failures onto [`UpstreamError`]
pub struct GeminiErrorMapper;

impl GeminiErrorMapper {
    pub fn from_http_status(status: u16, body: &str) -> UpstreamError {
        UpstreamError::Status {
            provider: PROVIDER,
            status,
            body: truncate_chars(body, MAX_LOGGED_BODY_CHARS).to_string(),
        }
    }

    /// `error.message` from a Google API error body, if present
    pub fn extract_message(body: &str) -> Option<String> {
        let json: serde_json::Value = serde_json::from_str(body).ok()?;
        json.get("error")?
            .get("message")?
            .as_str()
            .map(str::to_string)
    }
}

pub fn gemini_network_error(msg: impl Into<String>) -> UpstreamError {
    UpstreamError::Network {
        provider: PROVIDER,
        message: msg.into(),
    }
}

pub fn gemini_parse_error(msg: impl Into<String>) -> UpstreamError {
    UpstreamError::Decode {
        provider: PROVIDER,
        message: msg.into(),
    }
}
