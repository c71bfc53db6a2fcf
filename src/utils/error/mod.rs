//! Error Handling utilities
//!
//! This module provides the gateway error type and its mapping onto HTTP responses.

pub mod error;

pub use error::*;
