//! The `/api/ai` request state machine

use super::response::{GatewayResponse, success_body};
use crate::config::Config;
use crate::core::prompt::build_prompt;
use crate::core::providers::{GeminiClient, GenerativeBackend};
use crate::core::rate_limiter::RateLimiter;
use crate::core::request::shape_request;
use crate::core::validation::{InputValidator, ValidationFailure};
use crate::utils::error::{GatewayError, Result};
use actix_web::http::Method;
use actix_web::web::Bytes;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Client identifier used when no address is known
pub const UNKNOWN_CLIENT: &str = "unknown";

/// One inbound call, detached from the HTTP framework
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    pub method: Method,
    /// Raw `X-Forwarded-For` header value
    pub forwarded_for: Option<String>,
    /// Peer IP address
    pub peer_addr: Option<String>,
    /// Raw body, or why it could not be read
    pub body: std::result::Result<Bytes, BodyError>,
}

/// Why the request body never reached the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyError {
    /// Larger than the server payload limit
    TooLarge,
    /// The payload stream failed while reading
    Unreadable,
}

/// Tunables for the handler
#[derive(Debug, Clone, Copy)]
pub struct GatewaySettings {
    pub request_timeout: Duration,
    pub validator: InputValidator,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_millis(crate::config::default_request_timeout_ms()),
            validator: InputValidator::default(),
        }
    }
}

impl GatewaySettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            request_timeout: config.gemini.request_timeout(),
            validator: InputValidator::new(config.limits.max_input_chars),
        }
    }
}

/// Rate-limited, validated, deadline-bounded proxy to the generative backend
#[derive(Clone)]
pub struct AiGateway {
    limiter: RateLimiter,
    backend: Option<Arc<dyn GenerativeBackend>>,
    settings: GatewaySettings,
}

impl AiGateway {
    /// `backend` is `None` when no upstream API key is configured
    pub fn new(
        limiter: RateLimiter,
        backend: Option<Arc<dyn GenerativeBackend>>,
        settings: GatewaySettings,
    ) -> Self {
        Self {
            limiter,
            backend,
            settings,
        }
    }

    /// Build the gateway with a Gemini backend when a key is configured
    pub fn from_config(config: &Config, limiter: RateLimiter) -> Result<Self> {
        let backend: Option<Arc<dyn GenerativeBackend>> = if config.gemini.has_api_key() {
            Some(Arc::new(GeminiClient::new(&config.gemini)?))
        } else {
            None
        };

        Ok(Self::new(
            limiter,
            backend,
            GatewaySettings::from_config(config),
        ))
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Handle one request. Every failure becomes a response.
    pub async fn handle(&self, request: GatewayRequest) -> GatewayResponse {
        match self.process(request).await {
            Ok(response) => response,
            Err(e) => {
                if e.is_upstream() || matches!(e, GatewayError::Config(_) | GatewayError::Internal(_))
                {
                    error!(error = %e, "AI request failed");
                } else {
                    debug!(error = %e, "AI request rejected");
                }
                GatewayResponse::from_error(&e)
            }
        }
    }

    async fn process(&self, request: GatewayRequest) -> Result<GatewayResponse> {
        if request.method == Method::OPTIONS {
            return Ok(GatewayResponse::preflight());
        }
        if request.method != Method::POST {
            return Err(GatewayError::MethodNotAllowed(request.method.to_string()));
        }

        let client = client_id(
            request.forwarded_for.as_deref(),
            request.peer_addr.as_deref(),
        );
        let rate = self.limiter.check_and_record(&client).await;
        if !rate.allowed {
            warn!(client = %client, count = rate.current_count, "Rate limit exceeded");
            return Err(GatewayError::RateLimited {
                retry_after_secs: rate
                    .retry_after_secs
                    .unwrap_or_else(|| self.limiter.window_secs()),
            });
        }

        let backend = self
            .backend
            .as_ref()
            .ok_or_else(|| GatewayError::config("GEMINI_API_KEY is not configured"))?;

        let body = match &request.body {
            Ok(bytes) => parse_body(bytes)?,
            Err(BodyError::TooLarge) => {
                return Err(GatewayError::validation(
                    ValidationFailure::TooLong {
                        max: self.settings.validator.max_chars(),
                    }
                    .to_string(),
                ));
            }
            Err(BodyError::Unreadable) => {
                return Err(GatewayError::bad_request("Request body could not be read"));
            }
        };
        let shaped = shape_request(&body, &self.settings.validator)
            .map_err(|reason| GatewayError::validation(reason.to_string()))?;

        let prompt = build_prompt(shaped.kind, &shaped.data);
        debug!(
            client = %client,
            kind = %shaped.kind,
            input_length = shaped.input_length(),
            "Forwarding AI request"
        );

        // Dropping the future on expiry cancels the in-flight request
        let generated = tokio::time::timeout(self.settings.request_timeout, backend.generate(&prompt))
            .await
            .map_err(|_| {
                GatewayError::timeout(format!(
                    "No response within {} ms",
                    self.settings.request_timeout.as_millis()
                ))
            })??;

        let text = generated.first_text().ok_or_else(|| {
            GatewayError::EmptyResponse(
                generated
                    .finish_reason()
                    .unwrap_or("no candidates")
                    .to_string(),
            )
        })?;

        let model = backend.model();
        info!(
            client = %client,
            kind = %shaped.kind,
            model = %model,
            output_length = text.chars().count(),
            "AI request completed"
        );

        Ok(GatewayResponse::ok(success_body(
            shaped.kind,
            &text,
            &model,
            shaped.input_length(),
        )))
    }
}

/// First `X-Forwarded-For` entry, else the peer address, else `"unknown"`
pub fn client_id(forwarded_for: Option<&str>, peer_addr: Option<&str>) -> String {
    forwarded_for
        .and_then(|header| header.split(',').next())
        .map(str::trim)
        .filter(|first| !first.is_empty())
        .or_else(|| peer_addr.map(str::trim).filter(|addr| !addr.is_empty()))
        .unwrap_or(UNKNOWN_CLIENT)
        .to_string()
}

/// Parse the body as a JSON object; an empty body reads as `{}`
pub fn parse_body(body: &[u8]) -> Result<Map<String, Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(GatewayError::bad_request("Request body must be a JSON object")),
        Err(_) => Err(GatewayError::bad_request("Invalid JSON body")),
    }
}
