//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::GatewayError;
use tracing::warn;

/// Process signal that ends the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// Ctrl+C
    Interrupt,
    /// SIGTERM from a supervisor
    Terminate,
}

impl ShutdownSignal {
    /// Conventional signal name for logs
    pub fn name(self) -> &'static str {
        match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        }
    }
}

/// Pends forever when the handler cannot be installed, leaving the other signal in charge
async fn interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Ctrl+C handler unavailable");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            // None means the stream closed, which is no request to stop
            if stream.recv().await.is_none() {
                std::future::pending::<()>().await;
            }
        }
        Err(e) => {
            warn!(error = %e, "SIGTERM handler unavailable");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

impl HttpServer {
    /// Wait for the first shutdown signal
    pub async fn shutdown_signal() -> ShutdownSignal {
        tokio::select! {
            () = interrupt() => ShutdownSignal::Interrupt,
            () = terminate() => ShutdownSignal::Terminate,
        }
    }

    /// Readable message for port binding failures
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> GatewayError {
        let error_str = error.to_string();

        if error.kind() == std::io::ErrorKind::AddrInUse
            || error_str.contains("os error 48")
            || error_str.contains("os error 98")
        {
            GatewayError::server(format!(
                "Port {} is already in use. Stop the other process (lsof -i:{}) or start \
                 with --port {} / PORT={}",
                port,
                port,
                port.saturating_add(1),
                port.saturating_add(1)
            ))
        } else if error.kind() == std::io::ErrorKind::PermissionDenied
            || error_str.contains("os error 13")
        {
            GatewayError::server(format!(
                "Permission denied for port {}. Use a port >= 1024, e.g. --port 3000",
                port
            ))
        } else {
            GatewayError::server(format!("Failed to bind to {}: {}", bind_addr, error))
        }
    }
}
