//! Bounded AI request gateway
//!
//! `AiGateway::handle` runs the full `/api/ai` flow: preflight, method gate,
//! per-client rate limit, configuration check, request shaping and
//! validation, then one deadline-bounded upstream call.

mod handler;
mod response;


pub use handler::{
    AiGateway, BodyError, GatewayRequest, GatewaySettings, UNKNOWN_CLIENT, client_id, parse_body,
};
pub use response::{CORS_HEADERS, GatewayResponse, success_body, timestamp_iso};
