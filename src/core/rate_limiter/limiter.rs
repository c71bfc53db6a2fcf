//! Core rate limiter implementation

use super::store::{InMemoryWindowStore, WindowStore};
use super::types::RateLimitResult;
use crate::config::models::rate_limit::{RateLimitBackend, RateLimitConfig};
use crate::utils::current_timestamp_millis;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Sliding window rate limiter
#[derive(Clone)]
pub struct RateLimiter {
    /// Rate limit configuration
    pub(super) config: RateLimitConfig,
    /// Timestamp storage
    pub(super) store: Arc<dyn WindowStore>,
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("config", &self.config)
            .field("store", &self.store.name())
            .finish()
    }
}

impl RateLimiter {
    /// Create a new rate limiter with a process-local store
    pub fn new(config: RateLimitConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryWindowStore::new()))
    }

    /// Create a rate limiter over an existing store
    pub fn with_store(config: RateLimitConfig, store: Arc<dyn WindowStore>) -> Self {
        Self { config, store }
    }

    /// Create the rate limiter selected by `config.backend`
    pub async fn from_config(config: RateLimitConfig) -> Result<Self> {
        match config.backend {
            RateLimitBackend::Memory => {
                info!("Rate limiter using in-memory store");
                Ok(Self::new(config))
            }
            #[cfg(feature = "redis")]
            RateLimitBackend::Redis => {
                let url = config.redis_url.clone().ok_or_else(|| {
                    GatewayError::Config("Redis rate limit backend requires redis_url".into())
                })?;
                let store =
                    super::redis_store::RedisWindowStore::connect(&url, &config.key_prefix).await?;
                info!("Rate limiter using redis store");
                Ok(Self::with_store(config, Arc::new(store)))
            }
            #[cfg(not(feature = "redis"))]
            RateLimitBackend::Redis => Err(GatewayError::Config(
                "Redis rate limit backend requested but the redis feature is disabled".into(),
            )),
        }
    }

    /// Atomically check and record a request for `key` at the current time
    pub async fn check_and_record(&self, key: &str) -> RateLimitResult {
        self.check_and_record_at(key, current_timestamp_millis()).await
    }

    /// Atomically check and record a request for `key` at `now_ms`
    ///
    /// A store failure lets the request through.
    pub async fn check_and_record_at(&self, key: &str, now_ms: i64) -> RateLimitResult {
        let limit = self.config.max_requests;
        let window_ms = self.config.window_ms;

        let outcome = match self
            .store
            .check_and_record(key, now_ms, window_ms, limit)
            .await
        {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(
                    store = self.store.name(),
                    error = %e,
                    "Rate limit store unavailable, allowing request"
                );
                return RateLimitResult::fail_open(limit);
            }
        };

        // Time until the oldest request expires
        let reset_after_ms = match outcome.oldest_ms {
            Some(oldest) => (oldest + window_ms as i64 - now_ms).max(0) as u64,
            None => window_ms,
        };

        if !outcome.allowed {
            debug!(
                "Rate limit exceeded for {}: {}/{} requests",
                key, outcome.count, limit
            );
        }

        RateLimitResult {
            allowed: outcome.allowed,
            current_count: outcome.count,
            limit,
            remaining: limit.saturating_sub(outcome.count),
            reset_after_secs: reset_after_ms.div_ceil(1000),
            retry_after_secs: (!outcome.allowed).then(|| self.config.window_secs()),
        }
    }

    /// Get the configured limit
    pub fn limit(&self) -> u32 {
        self.config.max_requests
    }

    /// Window length in seconds, as advertised in `Retry-After`
    pub fn window_secs(&self) -> u64 {
        self.config.window_secs()
    }

    /// Name of the backing store
    pub fn backend_name(&self) -> &'static str {
        self.store.name()
    }
}
