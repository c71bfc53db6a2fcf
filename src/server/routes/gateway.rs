//! `/api/ai` endpoint
//!
//! Every method reaches the gateway so that preflight, 405 and error
//! responses all carry the same CORS headers.

use crate::core::gateway::{BodyError, GatewayRequest, GatewayResponse};
use crate::server::state::AppState;
use actix_web::error::PayloadError;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::debug;

pub const AI_PATH: &str = "/api/ai";

/// Configure the AI route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(AI_PATH).route(web::route().to(ai_request)));
}

/// Adapt the actix request to the gateway and back
///
/// Body extraction failures are passed on so that oversized payloads are
/// rate limited and answered like any other invalid input.
pub async fn ai_request(
    req: HttpRequest,
    body: Result<web::Bytes, actix_web::Error>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let request = GatewayRequest {
        method: req.method().clone(),
        forwarded_for: req
            .headers()
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        peer_addr: req.peer_addr().map(|addr| addr.ip().to_string()),
        body: body.map_err(|e| body_error(&e)),
    };

    into_http_response(state.gateway.handle(request).await)
}

fn body_error(error: &actix_web::Error) -> BodyError {
    debug!(error = %error, "Failed to read /api/ai body");
    match error.as_error::<PayloadError>() {
        Some(PayloadError::Overflow) => BodyError::TooLarge,
        _ => BodyError::Unreadable,
    }
}

fn into_http_response(response: GatewayResponse) -> HttpResponse {
    let mut builder = HttpResponse::build(response.status);
    for (name, value) in response.headers() {
        builder.insert_header((name, value));
    }

    match response.body {
        Some(body) => builder.json(body),
        None => builder.finish(),
    }
}
