//! Gemini upstream configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini provider configuration
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct GeminiConfig {
    /// API key; AI requests fail with a configuration error while unset
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Model identifier without the `models/` prefix
    #[serde(default = "default_gemini_model")]
    pub model: String,
    /// API base URL
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    /// API version path segment
    #[serde(default = "default_gemini_api_version")]
    pub api_version: String,
    /// Overall deadline for one generate call
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// TCP connect timeout
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Sampling parameters sent with every request
    #[serde(default)]
    pub generation: GenerationSettings,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("generation", &self.generation)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
            api_version: default_gemini_api_version(),
            request_timeout_ms: default_request_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            generation: GenerationSettings::default(),
        }
    }
}

impl GeminiConfig {
    /// Whether a non-blank API key is present
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Set the model, tolerating a leading `models/`
    pub fn set_model(&mut self, model: &str) {
        let model = model.trim();
        self.model = model.strip_prefix("models/").unwrap_or(model).to_string();
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Validate Gemini configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("Gemini model cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "Gemini base_url must be an http(s) URL: {}",
                self.base_url
            ));
        }

        if self.request_timeout_ms == 0 {
            return Err("Gemini request timeout cannot be 0".to_string());
        }

        if self.connect_timeout_ms == 0 {
            return Err("Gemini connect timeout cannot be 0".to_string());
        }

        self.generation.validate()
    }
}

/// Sampling parameters for `generationConfig`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationSettings {
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    /// Output cap, kept between 300 and 500 tokens
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_k: default_top_k(),
            top_p: default_top_p(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

impl GenerationSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature must be between 0 and 2, got {}",
                self.temperature
            ));
        }

        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(format!("top_p must be between 0 and 1, got {}", self.top_p));
        }

        if self.top_k == 0 {
            return Err("top_k cannot be 0".to_string());
        }

        if !(300..=500).contains(&self.max_output_tokens) {
            return Err(format!(
                "max_output_tokens must be between 300 and 500, got {}",
                self.max_output_tokens
            ));
        }

        Ok(())
    }
}
