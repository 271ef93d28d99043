//! Mock telemetry source for testing and demos
//!
//! This module provides a [`TelemetrySource`] implementation that generates
//! synthetic telemetry without a real acquisition layer. Each series is
//! driven by a configurable signal pattern and the host advances simulated
//! time explicitly between ticks.
//!
//! # Signal patterns
//!
//! - [`MockSignal::Constant`] - fixed value (useful for static displays)
//! - [`MockSignal::Sine`] - sinusoidal wave with configurable frequency and
//!   amplitude
//! - [`MockSignal::Ramp`] - linear ramp
//! - [`MockSignal::Square`] - square wave alternating between two values
//!
//! # Example
//!
//! ```ignore
//! use plotprep::source::mock::{MockSignal, MockTelemetryBackend};
//!
//! let mut source = MockTelemetryBackend::new(1.0)
//!     .with_series("imu.temp", MockSignal::Sine {
//!         frequency: 0.1,
//!         amplitude: 5.0,
//!         offset: 20.0,
//!     })
//!     .with_series("bus.voltage", MockSignal::Constant(28.0));
//!
//! // One tick per render frame:
//! engine.update(&source);
//! source.advance();
//! ```
//!
//! # Enabling
//!
//! Only available when the `mock-source` feature is enabled:
//!
//! ```bash
//! cargo test --features mock-source
//! ```

use super::TelemetrySource;
use crate::types::SeriesKey;

/// Pattern for generating mock range values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockSignal {
    /// Constant value
    Constant(f64),
    /// Sine wave: `offset + amplitude * sin(2π * frequency * t)`
    Sine {
        /// Cycles per domain unit
        frequency: f64,
        /// Peak deviation from `offset`
        amplitude: f64,
        /// Vertical offset
        offset: f64,
    },
    /// Linear ramp: `start + slope * t`
    Ramp {
        /// Value change per domain unit
        slope: f64,
        /// Value at `t = 0`
        start: f64,
    },
    /// Square wave alternating between `low` and `high` every half period
    Square {
        /// Full cycle length in domain units
        period: f64,
        /// Value in the first half of each period
        low: f64,
        /// Value in the second half of each period
        high: f64,
    },
}

impl MockSignal {
    /// Sample the signal at simulated time `t`
    pub fn sample(&self, t: f64) -> f64 {
        match *self {
            MockSignal::Constant(value) => value,
            MockSignal::Sine {
                frequency,
                amplitude,
                offset,
            } => offset + amplitude * (std::f64::consts::TAU * frequency * t).sin(),
            MockSignal::Ramp { slope, start } => start + slope * t,
            MockSignal::Square { period, low, high } => {
                if (t / period).rem_euclid(1.0) < 0.5 {
                    low
                } else {
                    high
                }
            }
        }
    }
}

/// Telemetry source generating synthetic samples from signal patterns.
///
/// Simulated time starts at zero and advances by a fixed step each time
/// [`advance`](MockTelemetryBackend::advance) is called. The domain value of
/// every series is the current simulated time; range values come from each
/// series' configured signal.
#[derive(Debug, Clone)]
pub struct MockTelemetryBackend {
    series: Vec<(SeriesKey, MockSignal)>,
    time: f64,
    step: f64,
}

impl MockTelemetryBackend {
    /// Create a source with no series, advancing `step` domain units per tick
    pub fn new(step: f64) -> Self {
        Self {
            series: Vec::new(),
            time: 0.0,
            step,
        }
    }

    /// Add a series driven by `signal`
    pub fn with_series(mut self, key: impl Into<SeriesKey>, signal: MockSignal) -> Self {
        self.series.push((key.into(), signal));
        self
    }

    /// Remove a series, simulating a host dropping it from the live set
    pub fn remove_series(&mut self, key: &SeriesKey) {
        self.series.retain(|(k, _)| k != key);
    }

    /// Advance simulated time by one step
    pub fn advance(&mut self) {
        self.time += self.step;
    }

    /// Current simulated time
    pub fn time(&self) -> f64 {
        self.time
    }
}

impl TelemetrySource for MockTelemetryBackend {
    fn telemetry_objects(&self) -> Vec<SeriesKey> {
        self.series.iter().map(|(key, _)| key.clone()).collect()
    }

    fn domain_value(&self, key: &SeriesKey, _field: &str) -> Option<f64> {
        self.series
            .iter()
            .any(|(k, _)| k == key)
            .then_some(self.time)
    }

    fn range_value(&self, key: &SeriesKey, _field: &str) -> Option<f64> {
        self.series
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, signal)| signal.sample(self.time))
    }
}
