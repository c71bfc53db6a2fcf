//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod gemini;
pub mod limits;
pub mod logging;
pub mod rate_limit;
pub mod server;
pub mod youtube;

// Re-export all configuration types
pub use gemini::*;
pub use limits::*;
pub use logging::*;
pub use rate_limit::*;
pub use server::*;
pub use youtube::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    256 * 1024 // 256KB
}

pub fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

pub fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

pub fn default_gemini_api_version() -> String {
    "v1beta".to_string()
}

pub fn default_youtube_base_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

/// Default upstream deadline in milliseconds
pub fn default_request_timeout_ms() -> u64 {
    30_000
}

pub fn default_connect_timeout_ms() -> u64 {
    10_000
}

pub fn default_temperature() -> f32 {
    0.7
}

pub fn default_top_k() -> u32 {
    40
}

pub fn default_top_p() -> f32 {
    0.95
}

pub fn default_max_output_tokens() -> u32 {
    500
}

/// Default sliding window in milliseconds
pub fn default_window_ms() -> u64 {
    60_000
}

pub fn default_max_requests() -> u32 {
    10
}

pub fn default_key_prefix() -> String {
    "tubesage:ratelimit".to_string()
}

pub fn default_max_input_chars() -> usize {
    10_000
}
