//! Health check endpoint

use crate::core::gateway::timestamp_iso;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Configure health check routes (inside the `/api` scope)
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Service status and which upstream keys are configured
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub youtube_api: bool,
    pub gemini_api: bool,
    pub rate_limit_backend: &'static str,
    pub version: Cow<'static, str>,
    pub timestamp: String,
}

pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    HttpResponse::Ok().json(HealthStatus {
        status: Cow::Borrowed("ok"),
        youtube_api: state.youtube.is_some(),
        gemini_api: state.gateway.has_backend(),
        rate_limit_backend: state.gateway.limiter().backend_name(),
        version: Cow::Borrowed(crate::VERSION),
        timestamp: timestamp_iso(),
    })
}
