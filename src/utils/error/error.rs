//! Error handling for the Gateway
//!
//! This module defines all error types used throughout the gateway, and the
//! single place where each error class is turned into a status code and a
//! JSON body. Messages for upstream and internal failures stay generic; the
//! caller only gets specifics for problems it can fix itself.

#![allow(missing_docs)]

use crate::core::providers::UpstreamError;
use actix_web::http::StatusCode;
use actix_web::http::header::RETRY_AFTER;
use actix_web::{HttpResponse, ResponseError};
use serde_json::{Value, json};
use thiserror::Error;

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the Gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors (missing API key, invalid config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Per-client rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Unsupported HTTP method
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Upstream provider errors
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Upstream call exceeded its deadline
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Upstream answered but produced no usable text
    #[error("Empty AI response: {0}")]
    EmptyResponse(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// YouTube rejected the key or the quota is exhausted
    #[error("YouTube quota exceeded or invalid key: {0}")]
    YouTubeQuota(String),

    /// Any other YouTube Data API failure
    #[error("YouTube error: {0}")]
    YouTube(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Redis errors from the shared rate limit store
    #[cfg(feature = "redis")]
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Server startup errors
    #[error("Server error: {0}")]
    Server(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// JSON payload returned to the caller for this error
    pub fn body(&self) -> Value {
        match self {
            GatewayError::Config(details) => json!({
                "error": "Server configuration error",
                "details": details,
            }),
            GatewayError::Validation(message) | GatewayError::BadRequest(message) => {
                json!({ "error": message })
            }
            GatewayError::RateLimited { retry_after_secs } => json!({
                "error": "Rate limit exceeded",
                "retryAfter": retry_after_secs,
            }),
            GatewayError::MethodNotAllowed(_) => json!({
                "error": "Method Not Allowed - use POST",
            }),
            GatewayError::Upstream(upstream) => match upstream.status() {
                Some(status) => json!({
                    "error": upstream.user_message(),
                    "details": format!("AI service responded with status {}", status),
                }),
                None => json!({ "error": "Internal error" }),
            },
            GatewayError::Timeout(details) => json!({
                "error": "AI request timed out",
                "details": details,
            }),
            GatewayError::EmptyResponse(_) => json!({ "error": "AI response error" }),
            GatewayError::NotFound(message) => json!({ "error": message }),
            GatewayError::YouTubeQuota(_) => json!({
                "error": "API quota exceeded or invalid key",
            }),
            GatewayError::YouTube(_) => json!({ "error": "Failed to fetch video data" }),
            _ => json!({ "error": "Internal error" }),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) | GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::YouTubeQuota(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let GatewayError::RateLimited { retry_after_secs } = self {
            response.insert_header((RETRY_AFTER, retry_after_secs.to_string()));
        }
        response.json(self.body())
    }
}

/// Helper functions for creating specific errors
impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    /// Whether the failure originated outside the gateway (upstream or deadline)
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            GatewayError::Upstream(_)
                | GatewayError::Timeout(_)
                | GatewayError::EmptyResponse(_)
                | GatewayError::YouTube(_)
                | GatewayError::YouTubeQuota(_)
        )
    }
}
