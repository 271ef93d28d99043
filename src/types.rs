//! Core data types for the plot preparation engine
//!
//! This module contains the small value types shared across the crate:
//!
//! - [`SeriesKey`] - Stable identity distinguishing one telemetry series
//!   from another across update ticks
//! - [`Sample`] - A single (domain, range) telemetry sample
//! - [`Bounds`] - The bounding box (origin + dimensions) computed over all
//!   retained series data
//!
//! # Series identity
//!
//! Hosts identify series by opaque string keys. The engine compares keys by
//! value, never by object identity: the ordered key sequence returned by the
//! telemetry source defines the per-index correspondence between the host's
//! series list and the engine's exposed buffer array.

use serde::{Deserialize, Serialize};

/// Stable identity for a telemetry series.
///
/// Keys are host-assigned and must stay stable across update ticks for as
/// long as the series is live. Two keys name the same series exactly when
/// their string values are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesKey(String);

impl SeriesKey {
    /// Create a key from any string-like value
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// View the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SeriesKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for SeriesKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// A single telemetry sample: a domain value (typically a timestamp) paired
/// with a range value (the measured quantity).
///
/// Domain values are usually non-decreasing but the engine accepts
/// out-of-order samples and stores them in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Domain (x-axis) value, in host units
    pub domain: f64,
    /// Range (y-axis) value
    pub range: f64,
}

impl Sample {
    /// Create a new sample
    pub fn new(domain: f64, range: f64) -> Self {
        Self { domain, range }
    }
}

/// Bounding box over all retained series data, as last computed by the
/// engine: an origin (domain min, range min) and dimensions (domain span,
/// range span).
///
/// Domain values are in raw host units, not adjusted by the domain offset.
/// The range axis includes the legibility padding applied by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower-left corner as `[domain, range]`
    pub origin: [f64; 2],
    /// Extent as `[domain span, range span]`
    pub dimensions: [f64; 2],
}

impl Bounds {
    /// Upper-right corner as `[domain, range]`
    pub fn top_right(&self) -> [f64; 2] {
        [
            self.origin[0] + self.dimensions[0],
            self.origin[1] + self.dimensions[1],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_key_equality() {
        let a = SeriesKey::new("sensor.temperature");
        let b = SeriesKey::from("sensor.temperature");
        let c = SeriesKey::new("sensor.pressure");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_series_key_display() {
        let key = SeriesKey::new("bus.voltage");
        assert_eq!(key.to_string(), "bus.voltage");
        assert_eq!(key.as_str(), "bus.voltage");
    }

    #[test]
    fn test_bounds_top_right() {
        let bounds = Bounds {
            origin: [10.0, -2.0],
            dimensions: [30.0, 6.0],
        };
        assert_eq!(bounds.top_right(), [40.0, 4.0]);
    }
}
