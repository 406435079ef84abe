//! Greeter frontend entry point.

use std::path::PathBuf;

use clap::Parser;

use greeter::config::AppConfig;
use greeter::frontend::{self, templates::init_templates, FrontendState, MessageClient};
use greeter::{logging, server};

/// Greeter frontend: a page that fetches the backend greeting on click
#[derive(Parser, Debug)]
#[command(name = "greeter-frontend", version, about)]
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

    let client = MessageClient::new(&config.frontend)?;
    tracing::info!(
        api_url = %client.api_url(),
        timeout_secs = config.frontend.request_timeout_seconds,
        "Backend client configured"
    );

    let tera = init_templates()?;
    let app = frontend::create_router(FrontendState::new(client, tera));

    server::start_server(app, "frontend", &config.frontend.host, config.frontend.port).await?;

    Ok(())
}
