//! Imperial to metric unit conversions.
//!
//! Stations speaking the Weather Underground upload protocol report in
//! imperial units. Everything exported is metric.

/// Millibar per inch of mercury.
pub const MILLIBAR_PER_INHG: f64 = 33.8639;

/// Meters per second per mile per hour.
pub const MPS_PER_MPH: f64 = 0.44704;

/// Millimeters per inch.
pub const MILLIMETERS_PER_INCH: f64 = 25.4;

/// Convert degrees Fahrenheit to degrees Celsius.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Convert miles per hour to meters per second.
pub fn mph_to_mps(mph: f64) -> f64 {
    mph * MPS_PER_MPH
}

/// Convert inches to millimeters.
pub fn inches_to_millimeters(inches: f64) -> f64 {
    inches * MILLIMETERS_PER_INCH
}

/// Convert inches of mercury to millibar.
pub fn inches_of_mercury_to_millibar(inches: f64) -> f64 {
    inches * MILLIBAR_PER_INHG
}
