//! Engine configuration
//!
//! Configuration is fixed for the lifetime of a [`crate::PlotEngine`]: the
//! retention cap and the optional fixed-duration display window are supplied
//! at construction and validated once. The struct is serde-derived so hosts
//! can persist it alongside their own project configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PlotPrepError, Result};

/// Default retention cap per series (one point per second for a day)
pub const DEFAULT_MAX_POINTS: usize = 86_400;

/// Retention and windowing configuration for a plot engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of points retained per series. Once a series buffer
    /// is full, each new point evicts the oldest retained point.
    pub max_points: usize,

    /// Optional fixed display window, in domain units. When set, the
    /// visible domain axis is anchored to the most recent `fixed_duration`
    /// of data and older points are trimmed from the buffers. When unset,
    /// retention is bounded only by `max_points`.
    pub fixed_duration: Option<f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
            fixed_duration: None,
        }
    }
}

impl EngineConfig {
    /// Set the per-series retention cap
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Set the fixed display window, in domain units
    pub fn with_fixed_duration(mut self, duration: f64) -> Self {
        self.fixed_duration = Some(duration);
        self
    }

    /// Validate the configuration
    ///
    /// Rejects a zero retention cap and non-finite or non-positive window
    /// durations.
    pub fn validate(&self) -> Result<()> {
        if self.max_points == 0 {
            return Err(PlotPrepError::Config(
                "max_points must be at least 1".to_string(),
            ));
        }
        if let Some(duration) = self.fixed_duration {
            if !duration.is_finite() || duration <= 0.0 {
                return Err(PlotPrepError::Config(format!(
                    "fixed_duration must be finite and positive, got {}",
                    duration
                )));
            }
        }
        Ok(())
    }
}
