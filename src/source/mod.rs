//! Telemetry source traits
//!
//! The engine never acquires telemetry itself; it reads everything through
//! the two traits in this module, so hosts can plug in their own telemetry
//! layer and tests can substitute scripted implementations.
//!
//! [`TelemetrySource`] is the live side: the current ordered series list
//! plus the latest sample per series, queried once per update tick.
//! [`HistoricalSeries`] is a finite recorded series, bulk-imported into a
//! line via [`crate::PlotEngine::add_historical`].

#[cfg(feature = "mock-source")]
pub mod mock;

#[cfg(feature = "mock-source")]
pub use mock::{MockSignal, MockTelemetryBackend};

use crate::types::SeriesKey;

/// Live telemetry access, queried by the engine once per update tick.
///
/// Implementations must return series in a stable order across calls while
/// membership is unchanged: the engine's exposed buffer array is
/// index-aligned with this order.
#[cfg_attr(test, mockall::automock)]
pub trait TelemetrySource {
    /// The ordered list of currently-live series identities
    fn telemetry_objects(&self) -> Vec<SeriesKey>;

    /// Latest domain value for a series, looked up by field key.
    /// `None` when the series has no domain value this tick.
    fn domain_value(&self, key: &SeriesKey, field: &str) -> Option<f64>;

    /// Latest range value for a series, looked up by field key.
    /// `None` when the series has no range value this tick.
    fn range_value(&self, key: &SeriesKey, field: &str) -> Option<f64>;
}

/// A finite, indexable recorded series, ordered by ascending domain value.
pub trait HistoricalSeries {
    /// Number of samples in the series
    fn point_count(&self) -> usize;

    /// Domain value of the sample at `index`, looked up by field key
    fn domain_value(&self, index: usize, field: &str) -> Option<f64>;

    /// Range value of the sample at `index`, looked up by field key
    fn range_value(&self, index: usize, field: &str) -> Option<f64>;
}
