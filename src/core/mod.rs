//! Core functionality for the Gateway
//!
//! This module contains the request pipeline behind `/api/ai`:
//! rate limiting, validation, prompt construction, the upstream provider and
//! the handler that ties them together.

pub mod gateway;
pub mod prompt;
pub mod providers;
pub mod rate_limiter; // Rate limiting system
pub mod request;
pub mod validation;

pub use gateway::{AiGateway, BodyError, GatewayRequest, GatewayResponse, GatewaySettings};
pub use prompt::{PromptData, RequestKind, build_prompt};
pub use rate_limiter::{RateLimitResult, RateLimiter};
pub use validation::{InputText, InputValidator, ValidationFailure, ValidationResult};
