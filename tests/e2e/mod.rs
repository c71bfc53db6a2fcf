//! End-to-end tests for tubesage
//!
//! These tests call live services and are ignored by default.
//! Run with: cargo test -- --ignored
//!
//! Required environment variables:
//! - GEMINI_API_KEY for the Gemini tests
//! - REDIS_URL for the redis rate limit store tests

pub mod gemini_live;
#[cfg(feature = "redis")]
pub mod redis_window;
