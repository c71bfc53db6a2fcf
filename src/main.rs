//! TubeSage gateway binary

#![allow(missing_docs)]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tubesage::config::Config;
use tubesage::utils::logging::init_tracing;
use tubesage::{build_info, server};

#[derive(Debug, Parser)]
#[command(name = "gateway", version, about = "Bounded AI request gateway for YouTube videos")]
struct Cli {
    /// YAML configuration file; defaults apply when it does not exist
    #[arg(short, long, env = "TUBESAGE_CONFIG", default_value = "config/gateway.yaml")]
    config: PathBuf,

    /// Bind address, overrides the file and HOST
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overrides the file and PORT
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = match Config::resolve(Some(cli.config.as_path())).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    // Installed before validation so its warnings reach the configured output
    init_tracing(&config.logging);
    if cli.config.exists() {
        info!("Loaded configuration from {:?}", cli.config);
    } else {
        warn!(
            "Config file {:?} not found, using defaults and environment",
            cli.config
        );
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let build = build_info();
    info!(version = build.version, git = build.git_hash, "TubeSage gateway");

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps multi-line messages readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
