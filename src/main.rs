use clap::Parser;
use tracing_subscriber::EnvFilter;

use covid19_portal_api::cli::{self, Cli};
use covid19_portal_api::config;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = config::config().clone();
    tracing::info!("Starting COVID-19 portal API in {:?} mode", config.environment);

    if let Err(e) = cli::run(cli, config).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
