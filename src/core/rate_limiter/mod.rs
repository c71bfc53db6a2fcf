//! Rate Limiting Implementation
//!
//! Per-client sliding window over request timestamps. The limiter owns a
//! [`WindowStore`]; the in-memory store is the default and a redis store is
//! available for deployments with more than one instance.

mod limiter;
#[cfg(feature = "redis")]
mod redis_store;
mod store;
mod types;


// Re-export public types
pub use limiter::RateLimiter;
#[cfg(feature = "redis")]
pub use redis_store::RedisWindowStore;
pub use store::{InMemoryWindowStore, WindowStore};
pub use types::{RateLimitResult, WindowOutcome};
