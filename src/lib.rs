//! # plotprep: streaming telemetry plot preparation
//!
//! A data-preparation engine for live telemetry plots: it ingests
//! time-ordered (domain, range) samples for multiple concurrently-displayed
//! series and maintains bounded, render-ready numeric buffers, running
//! extrema for auto-scaling, and retention policies (point-count cap and
//! fixed time-duration window). It produces flat 32-bit buffers plus
//! bounding metadata; issuing the actual draw calls is the host's job.
//!
//! ## Architecture
//!
//! - **Source traits**: hosts supply telemetry through [`TelemetrySource`]
//!   (live snapshots) and [`HistoricalSeries`] (recorded data); the engine
//!   never acquires data itself
//! - **SeriesBuffer**: per-series flat interleaved `(domain - offset,
//!   range)` storage, narrowed to `f32` at write time for GPU consumption,
//!   with FIFO eviction at capacity and exact cached extrema
//! - **PlotEngine**: per-tick orchestrator - series-set reconciliation,
//!   shared precision-preserving domain offset, global bounds with range
//!   padding, fixed-duration window trimming
//!
//! The engine is single-threaded and tick-driven: the host calls
//! [`PlotEngine::update`] once per render cycle and reads the prepared
//! buffers and bounds between ticks.
//!
//! ## Example
//!
//! ```no_run
//! use plotprep::{EngineConfig, PlotEngine, SeriesKey, TelemetrySource};
//!
//! fn render_loop(source: &dyn TelemetrySource) -> plotprep::Result<()> {
//!     let config = EngineConfig::default().with_fixed_duration(300.0);
//!     let mut engine = PlotEngine::new("utc", "value", config)?;
//!
//!     loop {
//!         engine.update(source);
//!
//!         let origin = engine.origin();
//!         let dimensions = engine.dimensions();
//!         for buffer in engine.line_buffers() {
//!             // Upload buffer.values() and draw with origin/dimensions.
//!             let _ = (buffer.values(), origin, dimensions);
//!         }
//!     }
//! }
//! ```

pub mod buffer;
pub mod config;
pub mod engine;
pub mod error;
pub mod line;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use buffer::SeriesBuffer;
pub use config::{EngineConfig, DEFAULT_MAX_POINTS};
pub use engine::PlotEngine;
pub use error::{PlotPrepError, Result};
pub use line::SeriesLine;
pub use source::{HistoricalSeries, TelemetrySource};
pub use types::{Bounds, Sample, SeriesKey};

#[cfg(feature = "mock-source")]
pub use source::mock::{MockSignal, MockTelemetryBackend};
