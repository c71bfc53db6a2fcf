//! Rate limiting configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateLimitConfig {
    /// Sliding window length in milliseconds
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
    /// Requests accepted per client within one window
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    /// Where request timestamps are kept
    #[serde(default)]
    pub backend: RateLimitBackend,
    /// Redis connection URL, required for the redis backend
    #[serde(default)]
    pub redis_url: Option<String>,
    /// Prefix for redis keys
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_ms: default_window_ms(),
            max_requests: default_max_requests(),
            backend: RateLimitBackend::default(),
            redis_url: None,
            key_prefix: default_key_prefix(),
        }
    }
}

impl RateLimitConfig {
    /// Window length rounded up to whole seconds, used for `Retry-After`
    pub fn window_secs(&self) -> u64 {
        self.window_ms.div_ceil(1000)
    }

    /// Validate rate limit configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.window_ms == 0 {
            return Err("Rate limit window cannot be 0".to_string());
        }

        if self.max_requests == 0 {
            return Err("Rate limit max_requests cannot be 0".to_string());
        }

        if self.backend == RateLimitBackend::Redis
            && self.redis_url.as_deref().is_none_or(|url| url.trim().is_empty())
        {
            return Err("Redis rate limit backend requires redis_url".to_string());
        }

        Ok(())
    }
}

/// Rate limit storage backend
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RateLimitBackend {
    /// Process-local map
    #[default]
    Memory,
    /// Shared redis sorted sets
    Redis,
}
