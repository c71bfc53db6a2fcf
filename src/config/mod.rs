//! Configuration management for the Gateway
//!
//! Configuration is layered: defaults, then an optional YAML file, then
//! environment variables. The CLI applies host and port overrides last.

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// Main configuration struct for the Gateway
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub youtube: YouTubeConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);
        Self::read_file(path).await
    }

    async fn read_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml_str(&content)
    }

    /// Parse configuration from YAML text without validating it
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document is a valid all-defaults configuration
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Build the runtime configuration: optional file, then process environment, then validation
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path.filter(|path| !path.exists()) {
            warn!(
                "Config file {:?} not found, using defaults and environment",
                path
            );
        }

        let config = Self::resolve(path).await?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Merge the optional file with the process environment without validating
    ///
    /// Logs nothing, so callers can install tracing from the result before
    /// `validate` emits its warnings.
    pub async fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => Self::read_file(path).await?,
            _ => Self::default(),
        };

        config.apply_env_from(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env_from(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides using the given lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(key) = get("GEMINI_API_KEY") {
            self.gemini.api_key = Some(key.trim().to_string());
        }
        if let Some(model) = get("GEMINI_MODEL") {
            self.gemini.set_model(&model);
        }
        if let Some(key) = get("YOUTUBE_API_KEY") {
            self.youtube.api_key = Some(key.trim().to_string());
        }
        if let Some(host) = get("HOST") {
            self.server.host = host.trim().to_string();
        }
        if let Some(port) = get("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid PORT '{}': {}", port, e)))?;
        }
        if let Some(url) = get("REDIS_URL") {
            self.rate_limit.redis_url = Some(url.trim().to_string());
            self.rate_limit.backend = RateLimitBackend::Redis;
        }

        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.gemini
            .validate()
            .map_err(|e| GatewayError::Config(format!("Gemini config error: {}", e)))?;

        self.youtube
            .validate()
            .map_err(|e| GatewayError::Config(format!("YouTube config error: {}", e)))?;

        self.rate_limit
            .validate()
            .map_err(|e| GatewayError::Config(format!("Rate limit config error: {}", e)))?;

        self.limits
            .validate()
            .map_err(|e| GatewayError::Config(format!("Limits config error: {}", e)))?;

        if !self.gemini.has_api_key() {
            warn!("GEMINI_API_KEY is not set; /api/ai will answer with a configuration error");
        }
        if !self.youtube.has_api_key() {
            warn!("YOUTUBE_API_KEY is not set; video metadata routes are unavailable");
        }

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string (API keys are never written)
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
