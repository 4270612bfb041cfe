use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tvshell::{config::Config, playlist::PlaylistFetcher, store::JsonFileStore, web::WebServer};

#[derive(Parser)]
#[command(name = "tvshell")]
#[command(version = "0.1.0")]
#[command(about = "A small self-hosted IPTV web app with playlist parsing and local profiles")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// State file path (overrides config file)
    #[arg(short = 'd', long, value_name = "PATH")]
    data_path: Option<PathBuf>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("tvshell={},tower_http=trace", cli.log_level)
    } else {
        format!("tvshell={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting tvshell v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from specified file
    std::env::set_var("CONFIG_FILE", &cli.config);
    let mut config = Config::load()?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(data_path) = cli.data_path {
        config.storage.data_path = data_path;
    }

    let sources = config.playlist_urls()?;
    info!("Serving {} configured playlist(s)", sources.len());

    let store = Arc::new(JsonFileStore::open(&config.storage.data_path)?);
    info!(
        "Profile state store opened at {}",
        config.storage.data_path.display()
    );

    let fetcher = PlaylistFetcher::new(sources, &config.upstream);

    let web_server = WebServer::new(&config, fetcher, store)?;
    info!(
        "Starting web server on {}:{}",
        web_server.host(),
        web_server.port()
    );
    web_server.serve().await?;

    Ok(())
}
