//! Weather Exporter binary.
//!
//! Serves the station upload endpoint and the Prometheus scrape endpoint on
//! `0.0.0.0:8080`.

use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use weather_exporter::{start_web_server, WeatherMetrics, WebConfig};

/// Only `--help` and `--version`; the listening address and log output are fixed.
#[derive(Parser)]
#[command(name = "weather_exporter")]
#[command(about = "Personal weather station to Prometheus exporter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = "Accepts Weather Underground style station uploads on 0.0.0.0:8080 and exposes the latest readings in metric units for Prometheus")]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    init_logging()?;

    let metrics = Arc::new(WeatherMetrics::new()?);

    info!("Starting weather exporter v{}", env!("CARGO_PKG_VERSION"));
    if let Err(e) = start_web_server(WebConfig::default(), metrics).await {
        error!("Failed to start server: {}", e);
        return Err(e.into());
    }

    Ok(())
}

fn init_logging() -> anyhow::Result<()> {
    // Fixed at INFO so every update line is written
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
