//! HTTP middleware
//!
//! Request tracing spans come from `tracing-actix-web`; this module adds
//! request ID propagation.

mod request_id;

pub use request_id::{REQUEST_ID_HEADER, RequestIdMiddleware, RequestIdMiddlewareService};
