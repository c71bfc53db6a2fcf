//! Utility modules for the TubeSage gateway
//!
//! - **error**: the gateway error type and its HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging & monitoring

pub use error::{GatewayError, Result};

use once_cell::sync::Lazy;
use regex::Regex;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Get current timestamp in milliseconds
pub fn current_timestamp_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

static QUERY_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([?&]key=)[^&\s"']+"#).expect("Invalid query key regex"));
static API_KEY_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)api[_-]?key["']?\s*[:=]\s*["']?([a-zA-Z0-9\-_]{20,})"#)
        .expect("Invalid api key regex")
});

/// Sanitize string for logging (remove sensitive information)
pub fn sanitize_for_logging(input: &str) -> String {
    let result = QUERY_KEY.replace_all(input, "${1}[REDACTED]");
    API_KEY_FIELD
        .replace_all(&result, "api_key: [REDACTED]")
        .into_owned()
}

/// Take at most `max_chars` characters, never splitting a code point
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
