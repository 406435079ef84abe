//! Greeter backend entry point.
//!
//! Initializes tracing, loads configuration, builds the router with the
//! configured CORS policy and serves it until a shutdown signal.

use std::path::PathBuf;

use clap::Parser;

use greeter::{backend, config::AppConfig, logging, server};

/// Greeter backend: fixed JSON greetings and a health route
#[derive(Parser, Debug)]
#[command(name = "greeter-backend", version, about)]
struct Args {
    /// Path to configuration file (optional; environment overrides apply)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "greeter=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref())?;

    let filter = logging::resolve_filter(args.log_level, std::env::var("RUST_LOG").ok());
    logging::init(&filter, &config.logging);

    tracing::info!(
        host = %config.backend.host,
        port = config.backend.port,
        "Loaded configuration"
    );

    let app = backend::router_from_config(&config.backend)?;

    server::start_server(app, "backend", &config.backend.host, config.backend.port).await?;

    Ok(())
}
