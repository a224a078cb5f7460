//! Station readings, unit conversion and the metric store.
//!
//! This module turns the raw query parameters of a station upload into
//! metric-unit readings and keeps the latest set per station identifier
//! for export to Prometheus.

pub mod data;
pub mod registry;
pub mod units;

// Re-export commonly used items
pub use data::{parse_reading, Field, RawReadings, ReadingSet};
pub use registry::WeatherMetrics;
