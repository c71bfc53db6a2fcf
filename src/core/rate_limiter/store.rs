//! Timestamp stores backing the sliding window

use super::types::WindowOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Storage for per-client request timestamps
///
/// `check_and_record` must purge, count and (when under `limit`) append in
/// one atomic step so concurrent requests for the same client cannot both
/// take the last slot.
#[async_trait]
pub trait WindowStore: Send + Sync {
    async fn check_and_record(
        &self,
        key: &str,
        now_ms: i64,
        window_ms: u64,
        limit: u32,
    ) -> Result<WindowOutcome>;

    /// Short backend name for logs and health output
    fn name(&self) -> &'static str;
}

/// Process-local store; one write lock per call
#[derive(Debug, Clone, Default)]
pub struct InMemoryWindowStore {
    entries: Arc<RwLock<HashMap<String, Vec<i64>>>>,
}

impl InMemoryWindowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of clients with at least one timestamp in the window
    pub async fn tracked_clients(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Timestamps currently held for a client
    pub async fn timestamps(&self, key: &str) -> Vec<i64> {
        self.entries
            .read()
            .await
            .get(key)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl WindowStore for InMemoryWindowStore {
    async fn check_and_record(
        &self,
        key: &str,
        now_ms: i64,
        window_ms: u64,
        limit: u32,
    ) -> Result<WindowOutcome> {
        let window_start = now_ms.saturating_sub(window_ms as i64);

        let mut entries = self.entries.write().await;

        // Sweep every client so idle keys do not accumulate
        entries.retain(|_, timestamps| {
            timestamps.retain(|&t| t > window_start);
            !timestamps.is_empty()
        });

        let current = entries.get(key).map_or(0, |timestamps| timestamps.len()) as u32;
        if current >= limit {
            return Ok(WindowOutcome {
                allowed: false,
                count: current,
                oldest_ms: entries.get(key).and_then(|t| t.first().copied()),
            });
        }

        // Avoid String allocation if key already exists
        let timestamps = if let Some(t) = entries.get_mut(key) {
            t
        } else {
            entries.entry(key.to_string()).or_default()
        };
        timestamps.push(now_ms);

        Ok(WindowOutcome {
            allowed: true,
            count: timestamps.len() as u32,
            oldest_ms: timestamps.first().copied(),
        })
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
