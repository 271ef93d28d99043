//! Per-series insertion handle
//!
//! A [`SeriesLine`] binds one [`SeriesBuffer`] to the two ways points enter
//! it: single live samples each tick, and bulk historical imports. It owns
//! no data of its own beyond the buffer.

use crate::buffer::SeriesBuffer;
use crate::source::HistoricalSeries;

/// Insertion handle for one series' buffer
#[derive(Debug)]
pub struct SeriesLine {
    buffer: SeriesBuffer,
}

impl SeriesLine {
    pub(crate) fn new(buffer: SeriesBuffer) -> Self {
        Self { buffer }
    }

    /// Append one live sample
    pub fn add_point(&mut self, domain: f64, range: f64) {
        self.buffer.append(domain, range);
    }

    /// Bulk-import a recorded series, in its stored (ascending-domain)
    /// order. Samples with a missing domain or range value are skipped.
    ///
    /// Offset subtraction and capacity eviction behave exactly as repeated
    /// [`add_point`](Self::add_point) calls; extrema are recomputed once
    /// after the import instead of per point.
    pub fn add_series(&mut self, series: &dyn HistoricalSeries, domain_key: &str, range_key: &str) {
        let count = series.point_count();
        let samples = (0..count).filter_map(|index| {
            match (
                series.domain_value(index, domain_key),
                series.range_value(index, range_key),
            ) {
                (Some(domain), Some(range)) => Some((domain, range)),
                _ => None,
            }
        });
        self.buffer.append_batch(samples);
    }

    /// The underlying renderable buffer
    pub fn buffer(&self) -> &SeriesBuffer {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut SeriesBuffer {
        &mut self.buffer
    }
}
