//! `/api/ai` over HTTP with a mock Gemini upstream

#[cfg(test)]
mod tests {
    use crate::common::fixtures::google_error;
    use crate::common::{ConfigFactory, MockUpstreams};
    use actix_web::http::{Method, StatusCode};
    use actix_web::{test, web};
    use serde_json::{Value, json};
    use std::time::Duration;
    use tubesage::server::{AppState, HttpServer};

    async fn state_for(upstreams: &MockUpstreams, max_requests: u32) -> web::Data<AppState> {
        let config = ConfigFactory::with_limit(
            ConfigFactory::with_upstreams(&upstreams.gemini_url(), &upstreams.youtube_url()),
            max_requests,
        );
        web::Data::new(AppState::from_config(config).await.unwrap())
    }

    fn ai_post(body: Value, client: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/ai")
            .insert_header(("x-forwarded-for", client))
            .set_json(body)
    }

    #[actix_web::test]
    async fn test_summary_round_trip() {
        let upstreams = MockUpstreams::start().await;
        upstreams.gemini_replies("Hello", 1).await;
        let app = test::init_service(HttpServer::create_app(state_for(&upstreams, 10).await)).await;

        let resp = test::call_service(
            &app,
            ai_post(json!({ "description": "A talk about async Rust." }), "198.51.100.1")
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["response"], "Hello");
        assert_eq!(body["summary"], "Hello");
        assert_eq!(body["metadata"]["model"], "gemini-2.5-flash");
        assert_eq!(body["metadata"]["inputLength"], 24);
        assert_eq!(body["metadata"]["outputLength"], 5);

        let sent = upstreams.server.received_requests().await.unwrap();
        let sent: Value = serde_json::from_slice(&sent[0].body).unwrap();
        let prompt = sent["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("under 200 words"));
        assert!(prompt.contains("A talk about async Rust."));
        assert_eq!(sent["generationConfig"]["maxOutputTokens"], 500);
        assert_eq!(sent["generationConfig"]["topK"], 40);
    }

    #[actix_web::test]
    async fn test_question_round_trip() {
        let upstreams = MockUpstreams::start().await;
        upstreams.gemini_replies("Short Answer: yes", 1).await;
        let app = test::init_service(HttpServer::create_app(state_for(&upstreams, 10).await)).await;

        let body: Value = test::call_and_read_body_json(
            &app,
            ai_post(
                json!({
                    "title": "Borrow checker explained",
                    "description": "Ownership and borrowing.",
                    "customPrompt": "Is borrowing covered?",
                    "analysisType": "chat"
                }),
                "198.51.100.2",
            )
            .to_request(),
        )
        .await;

        assert_eq!(body["analysis"], "Short Answer: yes");
        assert_eq!(body["metadata"]["requestType"], "question");

        let sent = upstreams.server.received_requests().await.unwrap();
        let sent: Value = serde_json::from_slice(&sent[0].body).unwrap();
        let prompt = sent["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("VIDEO TITLE: Borrow checker explained"));
        assert!(prompt.contains("USER QUESTION: Is borrowing covered?"));
    }

    #[actix_web::test]
    async fn test_eleventh_request_is_rate_limited() {
        let upstreams = MockUpstreams::start().await;
        upstreams.gemini_replies("ok", 10).await;
        let app = test::init_service(HttpServer::create_app(state_for(&upstreams, 10).await)).await;

        for _ in 0..10 {
            let resp = test::call_service(
                &app,
                ai_post(json!({ "description": "text" }), "203.0.113.9").to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let resp = test::call_service(
            &app,
            ai_post(json!({ "description": "text" }), "203.0.113.9, 10.0.0.1").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(resp.headers().get("retry-after").unwrap(), "60");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Rate limit exceeded", "retryAfter": 60 }));

        // Another client is unaffected
        upstreams.server.reset().await;
        upstreams.gemini_replies("ok", 1).await;
        let resp = test::call_service(
            &app,
            ai_post(json!({ "description": "text" }), "203.0.113.10").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_preflight_ignores_exhausted_limit() {
        let upstreams = MockUpstreams::start().await;
        upstreams.gemini_replies("ok", 1).await;
        let app = test::init_service(HttpServer::create_app(state_for(&upstreams, 1).await)).await;

        test::call_service(
            &app,
            ai_post(json!({ "description": "text" }), "192.0.2.1").to_request(),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/ai")
            .insert_header(("x-forwarded-for", "192.0.2.1"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("access-control-allow-headers").unwrap(),
            "Content-Type, Authorization"
        );
        assert!(test::read_body(resp).await.is_empty());
    }

    #[actix_web::test]
    async fn test_too_long_input_never_reaches_upstream() {
        let upstreams = MockUpstreams::start().await;
        upstreams.gemini_replies("unused", 0).await;
        let app = test::init_service(HttpServer::create_app(state_for(&upstreams, 10).await)).await;

        let resp = test::call_service(
            &app,
            ai_post(json!({ "description": "x".repeat(10_001) }), "192.0.2.2").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Too long. Max 10000 characters allowed.");
    }

    #[actix_web::test]
    async fn test_body_over_payload_limit_is_too_long_with_cors() {
        let upstreams = MockUpstreams::start().await;
        upstreams.gemini_replies("unused", 0).await;
        let app = test::init_service(HttpServer::create_app(state_for(&upstreams, 2).await)).await;
        let oversized = json!({ "description": "a".repeat(300_000) });

        for _ in 0..2 {
            let resp = test::call_service(
                &app,
                ai_post(oversized.clone(), "192.0.2.20").to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                resp.headers().get("access-control-allow-origin").unwrap(),
                "*"
            );
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Too long. Max 10000 characters allowed.");
        }

        for _ in 0..2 {
            let resp = test::call_service(
                &app,
                ai_post(oversized.clone(), "192.0.2.20").to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
            assert_eq!(resp.headers().get("retry-after").unwrap(), "60");
            assert_eq!(
                resp.headers().get("access-control-allow-origin").unwrap(),
                "*"
            );
        }
    }

    #[actix_web::test]
    async fn test_upstream_403_body_is_not_forwarded() {
        let upstreams = MockUpstreams::start().await;
        upstreams
            .gemini_fails(403, google_error(403, "Project 4242 has been suspended"))
            .await;
        let app = test::init_service(HttpServer::create_app(state_for(&upstreams, 10).await)).await;

        let resp = test::call_service(
            &app,
            ai_post(json!({ "description": "text" }), "192.0.2.3").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Access denied by the AI service");
        assert_eq!(body["details"], "AI service responded with status 403");
        assert!(!body.to_string().contains("suspended"));
    }

    #[actix_web::test]
    async fn test_upstream_429_message() {
        let upstreams = MockUpstreams::start().await;
        upstreams
            .gemini_fails(429, google_error(429, "Resource exhausted"))
            .await;
        let app = test::init_service(HttpServer::create_app(state_for(&upstreams, 10).await)).await;

        let body: Value = test::call_and_read_body_json(
            &app,
            ai_post(json!({ "description": "text" }), "192.0.2.4").to_request(),
        )
        .await;
        assert_eq!(
            body["error"],
            "AI service quota exceeded, please try again later"
        );
    }

    #[actix_web::test]
    async fn test_upstream_timeout_returns_promptly() {
        let upstreams = MockUpstreams::start().await;
        upstreams.gemini_stalls(Duration::from_secs(10)).await;

        let mut config = ConfigFactory::with_upstreams(&upstreams.gemini_url(), &upstreams.youtube_url());
        config.gemini.request_timeout_ms = 200;
        let state = web::Data::new(AppState::from_config(config).await.unwrap());
        let app = test::init_service(HttpServer::create_app(state)).await;

        let started = std::time::Instant::now();
        let resp = test::call_service(
            &app,
            ai_post(json!({ "description": "text" }), "192.0.2.5").to_request(),
        )
        .await;

        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "AI request timed out");
    }

    #[actix_web::test]
    async fn test_missing_key_is_configuration_error() {
        let state = web::Data::new(
            AppState::from_config(ConfigFactory::without_keys())
                .await
                .unwrap(),
        );
        let app = test::init_service(HttpServer::create_app(state)).await;

        let resp = test::call_service(
            &app,
            ai_post(json!({ "description": "text" }), "192.0.2.6").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "error": "Server configuration error",
                "details": "GEMINI_API_KEY is not configured"
            })
        );
    }
}
