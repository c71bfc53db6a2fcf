//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

/// Build and run the server with an already loaded configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting TubeSage gateway v{}", crate::VERSION);

    let server = ServerBuilder::new().with_config(config).build().await?;
    let address = server.config().address();
    info!("Server starting at: http://{}", address);
    info!("API endpoints:");
    info!("   POST /api/ai - Summaries and questions");
    info!("   GET  /api/health - Health check");
    info!("   GET  /api/video/{{videoId}} - Video metadata and insights");
    info!("   POST /api/youtube - Video lookup by URL or ID");
    info!("   GET  /api/transcript/{{videoId}} - Transcript (placeholder)");

    server.start().await
}
