//! HTTP route modules

pub mod gateway;
pub mod health;
pub mod video;

use actix_cors::Cors;
use actix_web::web;

/// Configure all routes
///
/// `/api/ai` is registered ahead of the `/api` scope: it sets its own CORS
/// headers, while the rest of the API gets a permissive CORS layer.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(gateway::configure_routes).service(
        web::scope("/api")
            .wrap(Cors::permissive())
            .configure(health::configure_routes)
            .configure(video::configure_routes),
    );
}
