//! Integration tests for tubesage
//!
//! These tests drive the public API and the HTTP surface against mock
//! upstream servers.

pub mod gateway_http_tests;
pub mod gemini_client_tests;
