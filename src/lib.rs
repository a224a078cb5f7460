//! # Weather Exporter - Personal Weather Station Metrics
//!
//! Receives readings from a personal weather station speaking the Weather
//! Underground upload protocol, converts them to metric units and exposes the
//! latest values per station for Prometheus to scrape.
//!
//! ## Endpoints
//!
//! - `GET /weatherstation/updateweatherstation.php?ID=...&tempf=...` - station upload,
//!   always answered with `success`
//! - `GET /metrics` - Prometheus text exposition
//! - `GET /api/health` - liveness probe
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use weather_exporter::{start_web_server, WeatherMetrics, WebConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let metrics = Arc::new(WeatherMetrics::new()?);
//!
//!     // Listen on 0.0.0.0:8080
//!     start_web_server(WebConfig::default(), metrics).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod metrics;
pub mod web;

// Re-export public API
pub use error::{ExporterError, Result};
pub use metrics::{
    data::{parse_reading, Field, RawReadings, ReadingSet},
    registry::WeatherMetrics,
};

pub use web::{create_app, start_web_server, WebConfig};

/// The default web server bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// The default web server port
pub const DEFAULT_WEB_PORT: u16 = 8080;
