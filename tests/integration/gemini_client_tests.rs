//! Gemini client against a mock server

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{GEMINI_TEST_KEY, google_error};
    use crate::common::upstream::GEMINI_PATH;
    use crate::common::{ConfigFactory, MockUpstreams};
    use serde_json::json;
    use tubesage::core::providers::{GeminiClient, GenerativeBackend, UpstreamError};
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    async fn client(upstreams: &MockUpstreams) -> GeminiClient {
        let config = ConfigFactory::with_upstreams(&upstreams.gemini_url(), &upstreams.youtube_url());
        GeminiClient::new(&config.gemini).unwrap()
    }

    #[tokio::test]
    async fn test_request_shape() {
        let upstreams = MockUpstreams::start().await;
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .and(query_param("key", GEMINI_TEST_KEY))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({
                "contents": [{ "parts": [{ "text": "Say hi" }] }],
                "generationConfig": {
                    "temperature": 0.7,
                    "topK": 40,
                    "topP": 0.95,
                    "maxOutputTokens": 500
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "Hi" }, { "text": " there " }] } }]
            })))
            .expect(1)
            .mount(&upstreams.server)
            .await;

        let response = client(&upstreams).await.generate("Say hi").await.unwrap();
        assert_eq!(response.first_text().as_deref(), Some("Hi there"));
    }

    #[tokio::test]
    async fn test_status_errors_keep_body_for_logs_only() {
        let upstreams = MockUpstreams::start().await;
        upstreams
            .gemini_fails(400, google_error(400, "API key not valid"))
            .await;

        let err = client(&upstreams).await.generate("x").await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.user_message(), "The AI service rejected the request");
        assert!(!err.to_string().contains("API key not valid"));
        match err {
            UpstreamError::Status { body, .. } => assert!(body.contains("API key not valid")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let upstreams = MockUpstreams::start().await;
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&upstreams.server)
            .await;

        let err = client(&upstreams).await.generate("x").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Decode { .. }));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_blocked_prompt_has_no_text() {
        let upstreams = MockUpstreams::start().await;
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "finishReason": "SAFETY" }],
                "promptFeedback": { "blockReason": "SAFETY" }
            })))
            .mount(&upstreams.server)
            .await;

        let response = client(&upstreams).await.generate("x").await.unwrap();
        assert_eq!(response.first_text(), None);
        assert_eq!(response.finish_reason(), Some("SAFETY"));
    }

    #[tokio::test]
    async fn test_network_error_hides_key() {
        let mut config = ConfigFactory::with_upstreams("http://127.0.0.1:1", "http://127.0.0.1:1");
        config.gemini.connect_timeout_ms = 500;
        let client = GeminiClient::new(&config.gemini).unwrap();

        let err = client.generate("x").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Network { .. }));
        assert!(!format!("{:?}", err).contains(GEMINI_TEST_KEY));
        assert!(!err.to_string().contains(GEMINI_TEST_KEY));
    }
}
