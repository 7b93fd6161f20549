use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use m3u_scanner::{config::Config, scanner::Scanner};

#[derive(Parser)]
#[command(name = "m3u-scanner")]
#[command(version = "0.1.0")]
#[command(about = "Scans candidate stream endpoints and emits an M3U playlist of confirmed live streams")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Playlist output path (overrides config file)
    #[arg(long, value_name = "FILE")]
    playlist: Option<PathBuf>,

    /// Error log output path (overrides config file)
    #[arg(long, value_name = "FILE")]
    error_log: Option<PathBuf>,

    /// Upper bound of the per-source index range
    #[arg(short = 'n', long, value_name = "N")]
    max_index: Option<u32>,

    /// Number of candidates probed at a time
    #[arg(short = 'j', long, value_name = "N")]
    concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(short, long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = format!("m3u_scanner={}", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting M3U Scanner v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(playlist) = cli.playlist {
        config.output.playlist_path = playlist;
    }
    if let Some(error_log) = cli.error_log {
        config.output.error_log_path = error_log;
    }
    if let Some(max_index) = cli.max_index {
        config.scan.max_index = max_index;
    }
    if let Some(concurrency) = cli.concurrency {
        config.scan.concurrency = concurrency;
    }
    if let Some(timeout) = cli.timeout {
        config.probe.timeout_secs = timeout;
    }

    config.validate()?;

    let scanner = Scanner::new(config);
    let summary = scanner.run().await?;

    info!(
        "Found {} valid endpoints in {}s",
        summary.valid_count,
        (summary.finished_at - summary.started_at).num_seconds()
    );

    Ok(())
}
