//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::gateway::AiGateway;
use crate::core::rate_limiter::RateLimiter;
use crate::utils::error::Result;
use crate::youtube::YouTubeClient;
use std::sync::Arc;
use tracing::{info, warn};

/// HTTP server state shared across handlers
///
/// Cloned into every worker; the rate-limiter store inside the gateway is
/// the only shared mutable part.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// `/api/ai` pipeline
    pub gateway: AiGateway,
    /// `None` when no YouTube API key is configured
    pub youtube: Option<YouTubeClient>,
}

impl AppState {
    pub fn new(config: Config, gateway: AiGateway, youtube: Option<YouTubeClient>) -> Self {
        Self {
            config: Arc::new(config),
            gateway,
            youtube,
        }
    }

    /// Build the rate limiter, the gateway and the YouTube client from config
    pub async fn from_config(config: Config) -> Result<Self> {
        let limiter = RateLimiter::from_config(config.rate_limit.clone()).await?;
        info!(
            backend = limiter.backend_name(),
            limit = limiter.limit(),
            window_secs = limiter.window_secs(),
            "Rate limiter ready"
        );

        let gateway = AiGateway::from_config(&config, limiter)?;
        if !gateway.has_backend() {
            warn!("GEMINI_API_KEY is not set, /api/ai will answer with a configuration error");
        }

        let youtube = if config.youtube.has_api_key() {
            Some(YouTubeClient::new(&config.youtube)?)
        } else {
            warn!("YOUTUBE_API_KEY is not set, video metadata routes are disabled");
            None
        };

        Ok(Self::new(config, gateway, youtube))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
