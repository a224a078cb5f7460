//! Data structures for station readings.

use super::units;
use tracing::warn;

/// Query parameter carrying the station identifier.
pub const STATION_ID_KEY: &str = "ID";

/// Number of readings a station can report in one update.
pub const FIELD_COUNT: usize = 11;

/// One of the named readings in an update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    BarometricPressure,
    Temperature,
    DewPoint,
    Humidity,
    WindSpeed,
    WindGust,
    WindDirection,
    Rainfall,
    DailyRainfall,
    IndoorTemperature,
    IndoorHumidity,
}

impl Field {
    /// Every field, in exposition order.
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::BarometricPressure,
        Field::Temperature,
        Field::DewPoint,
        Field::Humidity,
        Field::WindSpeed,
        Field::WindGust,
        Field::WindDirection,
        Field::Rainfall,
        Field::DailyRainfall,
        Field::IndoorTemperature,
        Field::IndoorHumidity,
    ];

    /// Query parameter name used by the upload protocol.
    pub fn query_key(self) -> &'static str {
        match self {
            Field::BarometricPressure => "baromin",
            Field::Temperature => "tempf",
            Field::DewPoint => "dewptf",
            Field::Humidity => "humidity",
            Field::WindSpeed => "windspeedmph",
            Field::WindGust => "windgustmph",
            Field::WindDirection => "winddir",
            Field::Rainfall => "rainin",
            Field::DailyRainfall => "dailyrainin",
            Field::IndoorTemperature => "indoortempf",
            Field::IndoorHumidity => "indoorhumidity",
        }
    }

    /// Exported gauge name.
    pub fn metric_name(self) -> &'static str {
        match self {
            Field::BarometricPressure => "weatherstation_barometric_pressure",
            Field::Temperature => "weatherstation_temperature",
            Field::DewPoint => "weatherstation_dew_point",
            Field::Humidity => "weatherstation_humidity",
            Field::WindSpeed => "weatherstation_wind_speed",
            Field::WindGust => "weatherstation_wind_gust",
            Field::WindDirection => "weatherstation_wind_direction",
            Field::Rainfall => "weatherstation_rainfall",
            Field::DailyRainfall => "weatherstation_daily_rainfall",
            Field::IndoorTemperature => "weatherstation_indoor_temperature",
            Field::IndoorHumidity => "weatherstation_indoor_humidity",
        }
    }

    /// Help text for the exported gauge.
    pub fn help(self) -> &'static str {
        match self {
            Field::BarometricPressure => "Barometric pressure in millibar",
            Field::Temperature => "Temperature in Celsius",
            Field::DewPoint => "Dew point temperature in Celsius",
            Field::Humidity => "Humidity percentage",
            Field::WindSpeed => "Wind speed in meters per second",
            Field::WindGust => "Wind gust speed in meters per second",
            Field::WindDirection => "Wind direction in degrees",
            Field::Rainfall => "Rainfall in millimeters",
            Field::DailyRainfall => "Daily rainfall in millimeters",
            Field::IndoorTemperature => "Indoor temperature in Celsius",
            Field::IndoorHumidity => "Indoor humidity percentage",
        }
    }

    /// Convert a value in the reported imperial unit to the exported metric unit.
    pub fn convert(self, value: f64) -> f64 {
        match self {
            Field::BarometricPressure => units::inches_of_mercury_to_millibar(value),
            Field::Temperature | Field::DewPoint | Field::IndoorTemperature => {
                units::fahrenheit_to_celsius(value)
            }
            Field::WindSpeed | Field::WindGust => units::mph_to_mps(value),
            Field::Rainfall | Field::DailyRainfall => units::inches_to_millimeters(value),
            // Percentages and degrees pass through
            Field::Humidity | Field::IndoorHumidity | Field::WindDirection => value,
        }
    }

    fn from_query_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.query_key() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Parse a reported value, never failing.
///
/// Surrounding whitespace is ignored. An empty string is `0.0`; anything
/// that does not parse as a float is logged and also becomes `0.0`, as does
/// a finite number too large for `f64`.
pub fn parse_reading(value: &str) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(parsed) if parsed.is_infinite() && !is_infinity_literal(trimmed) => {
            warn!("Failed to parse float {:?}: value out of range", trimmed);
            0.0
        }
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Failed to parse float {:?}: {}", trimmed, e);
            0.0
        }
    }
}

fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Unparsed fields of one update request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawReadings {
    station_id: Option<String>,
    values: [Option<String>; FIELD_COUNT],
}

impl RawReadings {
    /// Collect the recognised parameters from decoded query pairs.
    ///
    /// The first occurrence of a repeated key wins and unknown keys are
    /// ignored, since stations also send credentials, timestamps and
    /// software identifiers alongside the readings.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = RawReadings::default();
        for (key, value) in pairs {
            let key = key.as_ref();
            if key == STATION_ID_KEY {
                if raw.station_id.is_none() {
                    raw.station_id = Some(value.into());
                }
            } else if let Some(field) = Field::from_query_key(key) {
                let slot = &mut raw.values[field.index()];
                if slot.is_none() {
                    *slot = Some(value.into());
                }
            }
        }
        raw
    }

    /// Station identifier, empty when the request carried none.
    pub fn station_id(&self) -> &str {
        self.station_id.as_deref().unwrap_or("")
    }

    /// Raw string reported for `field`, empty when absent.
    pub fn value(&self, field: Field) -> &str {
        self.values[field.index()].as_deref().unwrap_or("")
    }
}

/// Converted readings from one update, in metric units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReadingSet {
    /// Barometric pressure in millibar
    pub barometric_pressure: f64,
    /// Outdoor temperature in Celsius
    pub temperature: f64,
    /// Dew point in Celsius
    pub dew_point: f64,
    /// Outdoor relative humidity in percent
    pub humidity: f64,
    /// Wind speed in meters per second
    pub wind_speed: f64,
    /// Wind gust speed in meters per second
    pub wind_gust: f64,
    /// Wind direction in degrees
    pub wind_direction: f64,
    /// Rain rate in millimeters
    pub rainfall: f64,
    /// Rain accumulated today in millimeters
    pub daily_rainfall: f64,
    /// Indoor temperature in Celsius
    pub indoor_temperature: f64,
    /// Indoor relative humidity in percent
    pub indoor_humidity: f64,
}

impl ReadingSet {
    /// Parse and convert every field of a request.
    pub fn from_raw(raw: &RawReadings) -> Self {
        let mut readings = ReadingSet::default();
        for field in Field::ALL {
            readings.set(field, field.convert(parse_reading(raw.value(field))));
        }
        readings
    }

    /// Value of a single field.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::BarometricPressure => self.barometric_pressure,
            Field::Temperature => self.temperature,
            Field::DewPoint => self.dew_point,
            Field::Humidity => self.humidity,
            Field::WindSpeed => self.wind_speed,
            Field::WindGust => self.wind_gust,
            Field::WindDirection => self.wind_direction,
            Field::Rainfall => self.rainfall,
            Field::DailyRainfall => self.daily_rainfall,
            Field::IndoorTemperature => self.indoor_temperature,
            Field::IndoorHumidity => self.indoor_humidity,
        }
    }

    /// Overwrite a single field.
    pub fn set(&mut self, field: Field, value: f64) {
        let slot = match field {
            Field::BarometricPressure => &mut self.barometric_pressure,
            Field::Temperature => &mut self.temperature,
            Field::DewPoint => &mut self.dew_point,
            Field::Humidity => &mut self.humidity,
            Field::WindSpeed => &mut self.wind_speed,
            Field::WindGust => &mut self.wind_gust,
            Field::WindDirection => &mut self.wind_direction,
            Field::Rainfall => &mut self.rainfall,
            Field::DailyRainfall => &mut self.daily_rainfall,
            Field::IndoorTemperature => &mut self.indoor_temperature,
            Field::IndoorHumidity => &mut self.indoor_humidity,
        };
        *slot = value;
    }
}
