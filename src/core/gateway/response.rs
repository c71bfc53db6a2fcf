//! Gateway responses and their JSON bodies

use crate::core::prompt::RequestKind;
use crate::utils::error::GatewayError;
use actix_web::ResponseError;
use actix_web::http::StatusCode;
use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};

/// Headers carried by every `/api/ai` response
pub const CORS_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type, Authorization"),
    ("Access-Control-Max-Age", "86400"),
];

/// Framework-independent response
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse {
    pub status: StatusCode,
    /// `None` for an empty body
    pub body: Option<Value>,
    /// Seconds for the `Retry-After` header
    pub retry_after: Option<u64>,
}

impl GatewayResponse {
    /// Preflight answer: 200 with no body
    pub fn preflight() -> Self {
        Self {
            status: StatusCode::OK,
            body: None,
            retry_after: None,
        }
    }

    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: Some(body),
            retry_after: None,
        }
    }

    pub fn from_error(error: &GatewayError) -> Self {
        let retry_after = match error {
            GatewayError::RateLimited { retry_after_secs } => Some(*retry_after_secs),
            _ => None,
        };

        Self {
            status: error.status_code(),
            body: Some(error.body()),
            retry_after,
        }
    }

    /// All headers to set: CORS plus `Retry-After` when present
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers: Vec<(&'static str, String)> = CORS_HEADERS
            .iter()
            .map(|(name, value)| (*name, value.to_string()))
            .collect();
        if let Some(secs) = self.retry_after {
            headers.push(("Retry-After", secs.to_string()));
        }
        headers
    }
}

/// Current time as an ISO-8601 UTC timestamp with milliseconds
pub fn timestamp_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Success payload: `response`, the kind-specific field and metadata
pub fn success_body(kind: RequestKind, text: &str, model: &str, input_length: usize) -> Value {
    let mut body = json!({
        "response": text,
        "metadata": {
            "model": model,
            "timestamp": timestamp_iso(),
            "requestType": kind.as_str(),
            "inputLength": input_length,
            "outputLength": text.chars().count(),
        }
    });

    if let (Some(field), Some(map)) = (kind.response_field(), body.as_object_mut()) {
        map.insert(field.to_string(), Value::String(text.to_string()));
    }

    body
}
