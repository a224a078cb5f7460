//! HTTP handlers for the upload and scrape endpoints.

use crate::metrics::{RawReadings, ReadingSet, WeatherMetrics};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use prometheus::{Encoder, TextEncoder};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

/// Body returned to the station for every upload.
pub const UPDATE_ACK: &str = "success";

/// Payload of the health check endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// RFC 3339 time the probe was answered
    pub timestamp: String,
    /// Distinct station identifiers seen since start
    pub stations: usize,
    pub updates_total: u64,
}

/// Accept a station upload.
///
/// Always acknowledges. Missing or malformed readings are stored as zeros.
pub async fn update_weather_station(
    State(metrics): State<Arc<WeatherMetrics>>,
    Query(params): Query<Vec<(String, String)>>,
) -> &'static str {
    let raw = RawReadings::from_pairs(params);
    let readings = ReadingSet::from_raw(&raw);

    metrics.record(raw.station_id(), &readings);
    info!(station = raw.station_id(), "Metrics updated successfully");

    UPDATE_ACK
}

/// Serve the current metric snapshot.
pub async fn metrics(State(metrics): State<Arc<WeatherMetrics>>) -> Response {
    match metrics.render() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, TextEncoder::new().format_type().to_string())],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to render metrics: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Health check endpoint.
pub async fn health_check(State(metrics): State<Arc<WeatherMetrics>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        stations: metrics.station_count(),
        updates_total: metrics.updates_total(),
    })
}
