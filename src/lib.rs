//! # TubeSage
//!
//! A bounded AI request gateway for YouTube videos.
//!
//! `POST /api/ai` takes a video description (and optionally a question),
//! applies a per-client sliding-window rate limit and input validation,
//! builds a summary or question prompt and forwards it to Gemini under a
//! fixed deadline. Companion routes serve YouTube metadata with derived
//! insights.
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use tubesage::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Some("config/gateway.yaml".as_ref())).await?;
//!     let gateway = Gateway::new(config).await?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Embedding the pipeline
//!
//! ```rust,no_run
//! use tubesage::config::RateLimitConfig;
//! use tubesage::core::{AiGateway, GatewayRequest, GatewaySettings, RateLimiter};
//!
//! # async fn demo() {
//! let limiter = RateLimiter::new(RateLimitConfig::default());
//! let gateway = AiGateway::new(limiter, None, GatewaySettings::default());
//! let response = gateway
//!     .handle(GatewayRequest {
//!         method: actix_web::http::Method::OPTIONS,
//!         forwarded_for: None,
//!         peer_addr: None,
//!         body: Ok(Default::default()),
//!     })
//!     .await;
//! assert!(response.body.is_none());
//! # }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod session;
pub mod utils;
pub mod youtube;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

pub use core::gateway::{AiGateway, GatewayRequest, GatewayResponse};
pub use core::rate_limiter::{RateLimitResult, RateLimiter};
pub use core::validation::{InputValidator, ValidationResult};

use tracing::info;

/// The HTTP gateway
pub struct Gateway {
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");
        let server = server::HttpServer::new(&config).await?;
        Ok(Self { server })
    }

    /// Run the gateway server until shutdown
    pub async fn run(self) -> Result<()> {
        info!("Starting TubeSage gateway");
        self.server.start().await
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Seconds since the epoch at build time
    pub build_time: &'static str,
    /// Short git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
        }
    }
}

/// Build information stamped by the build script
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
