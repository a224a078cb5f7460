//! Station metric store and Prometheus exposition.

use crate::error::Result;
use crate::metrics::data::{Field, ReadingSet};
use prometheus::{Encoder, GaugeVec, IntCounter, Opts, Registry, TextEncoder};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Name of the process-wide update counter.
pub const UPDATES_TOTAL: &str = "weatherstation_updates_total";

/// Label attached to every station gauge.
pub const STATION_LABEL: &str = "id";

/// Latest readings per station, exported as `id`-labelled gauges.
///
/// A single lock covers both writers and scrapes, so a `ReadingSet` becomes
/// visible to the exporter all at once.
pub struct WeatherMetrics {
    registry: Registry,
    store: Mutex<StationStore>,
}

struct StationStore {
    updates: IntCounter,
    gauges: Vec<(Field, GaugeVec)>,
    stations: HashSet<String>,
}

impl WeatherMetrics {
    /// Create a store with the counter and all station gauges registered.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let updates = IntCounter::new(UPDATES_TOTAL, "Total number of weather station updates")?;
        registry.register(Box::new(updates.clone()))?;

        let mut gauges = Vec::with_capacity(Field::ALL.len());
        for field in Field::ALL {
            let gauge = GaugeVec::new(Opts::new(field.metric_name(), field.help()), &[STATION_LABEL])?;
            registry.register(Box::new(gauge.clone()))?;
            gauges.push((field, gauge));
        }
        debug!("Registered {} station gauges", gauges.len());

        Ok(Self {
            registry,
            store: Mutex::new(StationStore {
                updates,
                gauges,
                stations: HashSet::new(),
            }),
        })
    }

    /// Count one update and replace every reading for `station`.
    pub fn record(&self, station: &str, readings: &ReadingSet) {
        let mut store = self.lock();
        store.updates.inc();
        for (field, gauge) in &store.gauges {
            gauge.with_label_values(&[station]).set(readings.get(*field));
        }
        if !store.stations.contains(station) {
            store.stations.insert(station.to_string());
        }
    }

    /// Render the current state in the Prometheus text format.
    pub fn render(&self) -> Result<String> {
        let families = {
            let _store = self.lock();
            self.registry.gather()
        };

        let mut buffer = Vec::new();
        TextEncoder::new().encode(&families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Total updates received since start.
    pub fn updates_total(&self) -> u64 {
        self.lock().updates.get()
    }

    /// Latest readings for `station` as currently exported, if it has ever reported.
    pub fn station_readings(&self, station: &str) -> Option<ReadingSet> {
        let store = self.lock();
        // Looking up an unknown label would create an empty series
        if !store.stations.contains(station) {
            return None;
        }

        let mut readings = ReadingSet::default();
        for (field, gauge) in &store.gauges {
            let value = gauge.get_metric_with_label_values(&[station]).ok()?.get();
            readings.set(*field, value);
        }
        Some(readings)
    }

    /// Number of distinct stations seen.
    pub fn station_count(&self) -> usize {
        self.lock().stations.len()
    }

    // A panic while holding the lock leaves the store consistent enough to keep serving.
    fn lock(&self) -> MutexGuard<'_, StationStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings_with(field: Field, value: f64) -> ReadingSet {
        let mut readings = ReadingSet::default();
        readings.set(field, value);
        readings
    }

    #[test]
    fn test_new_store_is_empty() {
        let metrics = WeatherMetrics::new().unwrap();
        assert_eq!(metrics.updates_total(), 0);
        assert_eq!(metrics.station_count(), 0);
        assert!(metrics.station_readings("station1").is_none());
    }

    #[test]
    fn test_record_counts_and_stores() {
        let metrics = WeatherMetrics::new().unwrap();
        metrics.record("station1", &readings_with(Field::Temperature, 21.0));

        assert_eq!(metrics.updates_total(), 1);
        assert_eq!(metrics.station_count(), 1);
        assert_eq!(metrics.station_readings("station1").unwrap().temperature, 21.0);
    }

    #[test]
    fn test_record_overwrites() {
        let metrics = WeatherMetrics::new().unwrap();
        metrics.record("station1", &readings_with(Field::Temperature, 10.0));
        metrics.record("station1", &readings_with(Field::Temperature, 21.0));

        assert_eq!(metrics.updates_total(), 2);
        assert_eq!(metrics.station_count(), 1);
        assert_eq!(metrics.station_readings("station1").unwrap().temperature, 21.0);
    }

    #[test]
    fn test_station_readings_read_exported_gauges() {
        let metrics = WeatherMetrics::new().unwrap();
        let mut readings = ReadingSet::default();
        for (i, field) in Field::ALL.into_iter().enumerate() {
            readings.set(field, i as f64 + 0.5);
        }
        metrics.record("station1", &readings);

        assert_eq!(metrics.station_readings("station1"), Some(readings));

        let body = metrics.render().unwrap();
        for field in Field::ALL {
            let line = format!("{}{{id=\"station1\"}} {}", field.metric_name(), readings.get(field));
            assert!(body.contains(&line), "missing {}", line);
        }
    }

    #[test]
    fn test_unknown_station_does_not_create_series() {
        let metrics = WeatherMetrics::new().unwrap();
        assert!(metrics.station_readings("ghost").is_none());

        let body = metrics.render().unwrap();
        assert!(!body.contains("ghost"));
    }

    #[test]
    fn test_render_empty_store() {
        let metrics = WeatherMetrics::new().unwrap();
        let body = metrics.render().unwrap();

        assert!(body.contains("# TYPE weatherstation_updates_total counter"));
        assert!(body.contains("weatherstation_updates_total 0"));
        // Gauge vectors with no series yet are omitted from the output
        assert!(!body.contains("weatherstation_temperature{"));
    }

    #[test]
    fn test_render_labels_each_station() {
        let metrics = WeatherMetrics::new().unwrap();
        metrics.record("north", &readings_with(Field::WindDirection, 90.0));
        metrics.record("south", &readings_with(Field::WindDirection, 270.0));

        let body = metrics.render().unwrap();
        assert!(body.contains("# HELP weatherstation_wind_direction Wind direction in degrees"));
        assert!(body.contains("# TYPE weatherstation_wind_direction gauge"));
        assert!(body.contains("weatherstation_wind_direction{id=\"north\"} 90"));
        assert!(body.contains("weatherstation_wind_direction{id=\"south\"} 270"));
        assert!(body.contains("weatherstation_updates_total 2"));

        for field in Field::ALL {
            assert!(
                body.contains(&format!("{}{{id=\"north\"}}", field.metric_name())),
                "missing {}",
                field.metric_name()
            );
        }
    }

    #[test]
    fn test_empty_station_id_is_a_series() {
        let metrics = WeatherMetrics::new().unwrap();
        metrics.record("", &ReadingSet::default());

        let body = metrics.render().unwrap();
        assert!(body.contains("weatherstation_humidity{id=\"\"} 0"));
    }
}
