//! Error handling for the plot preparation engine
//!
//! This module defines the crate error type and a Result alias.
//!
//! Per-tick operations never return errors: missing samples are skipped
//! silently and capacity overflow is handled by eviction. The only fallible
//! surface is engine construction, which rejects invalid configuration.
//! Contract violations inside the update loop (out-of-range trim indices,
//! key/line bookkeeping mismatches) are debug assertions, clamped to a
//! defined behavior in release builds so the render loop keeps running.

use thiserror::Error;

/// Main error type for plot preparation operations
#[derive(Error, Debug)]
pub enum PlotPrepError {
    /// Errors related to engine configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for plot preparation operations
pub type Result<T> = std::result::Result<T, PlotPrepError>;
