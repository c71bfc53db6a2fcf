//! YouTube Data API configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// YouTube Data API configuration
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct YouTubeConfig {
    /// API key; metadata routes answer 500 while unset
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Data API base URL
    #[serde(default = "default_youtube_base_url")]
    pub base_url: String,
    /// Deadline for one metadata call
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl std::fmt::Debug for YouTubeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .finish()
    }
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_youtube_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl YouTubeConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "YouTube base_url must be an http(s) URL: {}",
                self.base_url
            ));
        }

        if self.request_timeout_ms == 0 {
            return Err("YouTube request timeout cannot be 0".to_string());
        }

        Ok(())
    }
}
