//! Redis-backed window store for multi-instance deployments
//!
//! Each client is a sorted set scored by request time. Purge, count and
//! insert run inside one Lua script, and the key expires after one window
//! of inactivity.

use super::store::WindowStore;
use super::types::WindowOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;
use redis::{Client, Script, aio::MultiplexedConnection};
use tracing::{debug, info};

const SLIDING_WINDOW_SCRIPT: &str = r#"
local key = KEYS[1]
local now = tonumber(ARGV[1])
local window = tonumber(ARGV[2])
local limit = tonumber(ARGV[3])

redis.call('ZREMRANGEBYSCORE', key, '-inf', now - window)
local count = redis.call('ZCARD', key)
local oldest = redis.call('ZRANGE', key, 0, 0, 'WITHSCORES')
local oldest_score = -1
if oldest[2] then
  oldest_score = tonumber(oldest[2])
end

if count >= limit then
  return {0, count, oldest_score}
end

redis.call('ZADD', key, now, ARGV[4])
redis.call('PEXPIRE', key, window)
if oldest_score < 0 then
  oldest_score = now
end
return {1, count + 1, oldest_score}
"#;

/// Sorted-set store shared by every gateway instance
#[derive(Clone)]
pub struct RedisWindowStore {
    conn: MultiplexedConnection,
    script: Script,
    key_prefix: String,
}

impl RedisWindowStore {
    /// Connect to redis
    pub async fn connect(url: &str, key_prefix: &str) -> Result<Self> {
        info!("Connecting rate limit store to redis");
        debug!("Redis URL: {}", sanitize_url(url));

        let client = Client::open(url)?;
        let conn = client.get_multiplexed_async_connection().await?;

        Ok(Self {
            conn,
            script: Script::new(SLIDING_WINDOW_SCRIPT),
            key_prefix: key_prefix.to_string(),
        })
    }

    fn key(&self, client_id: &str) -> String {
        format!("{}:{}", self.key_prefix, client_id)
    }
}

#[async_trait]
impl WindowStore for RedisWindowStore {
    async fn check_and_record(
        &self,
        key: &str,
        now_ms: i64,
        window_ms: u64,
        limit: u32,
    ) -> Result<WindowOutcome> {
        let mut conn = self.conn.clone();
        // Unique member so requests in the same millisecond are all counted
        let member = format!("{}-{}", now_ms, uuid::Uuid::new_v4());

        let (allowed, count, oldest): (i64, i64, i64) = self
            .script
            .key(self.key(key))
            .arg(now_ms)
            .arg(window_ms)
            .arg(limit)
            .arg(member)
            .invoke_async(&mut conn)
            .await?;

        Ok(WindowOutcome {
            allowed: allowed == 1,
            count: count.max(0) as u32,
            oldest_ms: (oldest >= 0).then_some(oldest),
        })
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

/// Hide credentials embedded in a redis URL
fn sanitize_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}
