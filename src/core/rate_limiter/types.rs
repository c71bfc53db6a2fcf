//! Rate limiter types and data structures

/// Rate limit result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    /// Whether the request is allowed
    pub allowed: bool,
    /// Requests counted in the window, including this one when allowed
    pub current_count: u32,
    /// Maximum requests allowed
    pub limit: u32,
    /// Remaining requests in the window
    pub remaining: u32,
    /// Time until the oldest counted request leaves the window (in seconds)
    pub reset_after_secs: u64,
    /// Retry after (in seconds, only set when not allowed)
    pub retry_after_secs: Option<u64>,
}

impl RateLimitResult {
    /// Result used when the store is unavailable and the request is let through
    pub(super) fn fail_open(limit: u32) -> Self {
        Self {
            allowed: true,
            current_count: 0,
            limit,
            remaining: limit,
            reset_after_secs: 0,
            retry_after_secs: None,
        }
    }
}

/// What a store observed for one key in one atomic step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOutcome {
    /// Whether `now` was recorded
    pub allowed: bool,
    /// Timestamps in the window after the step
    pub count: u32,
    /// Oldest timestamp still in the window
    pub oldest_ms: Option<i64>,
}
