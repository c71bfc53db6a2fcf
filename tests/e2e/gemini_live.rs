//! Summary request against the live Gemini API

#[cfg(test)]
mod tests {
    use crate::skip_without_env;
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use serde_json::{Value, json};
    use tubesage::config::Config;
    use tubesage::server::{AppState, HttpServer};

    #[actix_web::test]
    #[ignore]
    async fn test_live_summary() {
        skip_without_env!("GEMINI_API_KEY");

        let mut config = Config::default();
        config.gemini.api_key = std::env::var("GEMINI_API_KEY").ok();
        let state = web::Data::new(AppState::from_config(config).await.unwrap());
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/ai")
            .set_json(json!({
                "description": "Rust is a systems programming language focused on safety, \
                                speed and concurrency. It achieves memory safety without a \
                                garbage collector through ownership and borrowing."
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let summary = body["summary"].as_str().unwrap();
        assert!(!summary.is_empty());
        assert_eq!(body["response"], summary);
        assert_eq!(body["metadata"]["requestType"], "summary");
    }
}
