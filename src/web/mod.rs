//! HTTP surface of the exporter.
//!
//! Stations upload readings to the Weather Underground compatible update
//! path and Prometheus scrapes `/metrics`. Both share one [`WeatherMetrics`]
//! injected as router state.

pub mod config;
pub mod handlers;
pub mod router;

// Re-export commonly used items
pub use config::WebConfig;
pub use router::create_app;

use crate::error::{ExporterError, Result};
use crate::metrics::WeatherMetrics;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Start the web server with the provided configuration and metric store.
pub async fn start_web_server(config: WebConfig, metrics: Arc<WeatherMetrics>) -> Result<()> {
    let app = create_app(metrics);

    let addr = config
        .bind_address()
        .parse::<SocketAddr>()
        .map_err(|e| ExporterError::config_error(format!("Invalid bind address: {}", e)))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server listening on {}", addr);
    info!("Update endpoint: http://{}{}", addr, router::UPDATE_PATH);
    info!("Metrics endpoint: http://{}{}", addr, router::METRICS_PATH);

    axum::serve(listener, app)
        .await
        .map_err(|e| ExporterError::web_server_error(format!("Server error: {}", e)))?;

    Ok(())
}
