//! Gemini Client
//!
//! Google AI Studio `generateContent` over HTTPS with the API key passed as
//! the `key` query parameter.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, Response};
use tracing::{debug, warn};

use crate::config::{GeminiConfig, GenerationSettings};
use crate::core::providers::{GenerativeBackend, UpstreamError};
use crate::utils::error::{GatewayError, Result};
use crate::utils::sanitize_for_logging;

use super::error::{GeminiErrorMapper, gemini_network_error, gemini_parse_error};
use super::models::{GenerateContentRequest, GenerateContentResponse};

/// Gemini API client
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    api_version: String,
    model: String,
    generation: GenerationSettings,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client; fails when no API key is configured
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| GatewayError::config("GEMINI_API_KEY is not configured"))?
            .to_string();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // The overall deadline is enforced by the gateway so that dropping
        // the future cancels the request.
        let http_client = ClientBuilder::new()
            .connect_timeout(config.connect_timeout())
            .default_headers(headers)
            .user_agent(concat!("tubesage/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            model: config.model.clone(),
            generation: config.generation.clone(),
        })
    }

    /// `generateContent` URL without the key
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url, self.api_version, self.model
        )
    }

    /// Send one prompt
    pub async fn generate_content(
        &self,
        prompt: &str,
    ) -> std::result::Result<GenerateContentResponse, UpstreamError> {
        let url = self.endpoint();
        let body = GenerateContentRequest::from_prompt(prompt, &self.generation);

        debug!(
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "Gemini request URL: {}",
            url
        );

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| gemini_network_error(format!("Network error: {}", e.without_url())))?;

        self.handle_response(response).await
    }

    async fn handle_response(
        &self,
        response: Response,
    ) -> std::result::Result<GenerateContentResponse, UpstreamError> {
        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| gemini_network_error(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let message = GeminiErrorMapper::extract_message(&response_text);
            warn!(
                status = status.as_u16(),
                message = message.as_deref(),
                body = %sanitize_for_logging(&response_text),
                "Gemini API error"
            );
            return Err(GeminiErrorMapper::from_http_status(
                status.as_u16(),
                &response_text,
            ));
        }

        debug!("Gemini response status: {}", status);

        serde_json::from_str(&response_text)
            .map_err(|e| gemini_parse_error(format!("Failed to parse response JSON: {}", e)))
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    fn model(&self) -> String {
        self.model.clone()
    }

    async fn generate(
        &self,
        prompt: &str,
    ) -> std::result::Result<GenerateContentResponse, UpstreamError> {
        self.generate_content(prompt).await
    }
}
