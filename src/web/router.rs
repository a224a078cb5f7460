//! Web application router and middleware setup.

use crate::metrics::WeatherMetrics;
use crate::web::handlers;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Path stations upload to, fixed by the Weather Underground protocol.
pub const UPDATE_PATH: &str = "/weatherstation/updateweatherstation.php";

/// Path scraped by Prometheus.
pub const METRICS_PATH: &str = "/metrics";

/// Path of the liveness probe.
pub const HEALTH_PATH: &str = "/api/health";

/// Create the axum application with all routes and middleware.
pub fn create_app(metrics: Arc<WeatherMetrics>) -> Router {
    Router::new()
        .route(UPDATE_PATH, get(handlers::update_weather_station))
        .route(METRICS_PATH, get(handlers::metrics))
        .route(HEALTH_PATH, get(handlers::health_check))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(metrics)
}
