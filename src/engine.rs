//! Multi-series plot preparation engine
//!
//! [`PlotEngine`] is the per-tick orchestrator: it diffs the host's live
//! series set against its own, maintains one [`SeriesLine`] per live series,
//! appends the latest samples, recomputes the global bounding box, and
//! enforces the optional fixed-duration retention window. Every operation
//! is synchronous and completes within the tick; the read accessors return
//! last-computed state without recomputation, so a renderer can consume
//! them at any point between ticks.
//!
//! # Domain offset
//!
//! All buffers share one domain offset, initialized from the arithmetic
//! mean of the first numeric domain values the engine observes. The offset
//! stays fixed while any series is retained - newly appearing series reuse
//! it - and is cleared only when the last series retires, to be redefined
//! from the next series' first samples. Buffers can only be created while
//! the offset is defined, so a tick with no domain values defers series
//! allocation entirely.

use std::collections::HashMap;

use crate::buffer::SeriesBuffer;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::line::SeriesLine;
use crate::source::{HistoricalSeries, TelemetrySource};
use crate::types::{Bounds, SeriesKey};

/// Padding ratio applied to the range axis so near-boundary points stay
/// legible. The domain axis is never padded; it typically represents time.
const PADDING_RATIO: f64 = 0.10;

/// Streaming plot data-preparation engine for N concurrently-displayed
/// series.
///
/// Construct with the domain/range field keys used to look up values from
/// the telemetry source, drive with [`update`](Self::update) once per
/// render cycle, and read the prepared buffers and bounds between ticks.
#[derive(Debug)]
pub struct PlotEngine {
    domain_key: String,
    range_key: String,
    max_points: usize,
    fixed_duration: Option<f64>,

    /// Active series identities, in source order. Defines the index
    /// alignment of [`line_buffers`](Self::line_buffers).
    keys: Vec<SeriesKey>,
    lines: HashMap<SeriesKey, SeriesLine>,
    domain_offset: Option<f64>,

    /// Raw data extrema from the last bounds pass, before padding or
    /// window override
    domain_extrema: Option<(f64, f64)>,
    range_extrema: Option<(f64, f64)>,
    origin: [f64; 2],
    dimensions: [f64; 2],
}

impl PlotEngine {
    /// Create an engine looking up domain and range values by the given
    /// field keys.
    ///
    /// Fails only on invalid configuration.
    pub fn new(
        domain_key: impl Into<String>,
        range_key: impl Into<String>,
        config: EngineConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            domain_key: domain_key.into(),
            range_key: range_key.into(),
            max_points: config.max_points,
            fixed_duration: config.fixed_duration,
            keys: Vec::new(),
            lines: HashMap::new(),
            domain_offset: None,
            domain_extrema: None,
            range_extrema: None,
            origin: [0.0, 0.0],
            dimensions: [0.0, 0.0],
        })
    }

    /// Ingest the current live snapshot: reconcile the series set, append
    /// the latest sample per series, recompute bounds, and enforce the
    /// fixed-duration window if one is configured.
    pub fn update(&mut self, source: &dyn TelemetrySource) {
        let objects = source.telemetry_objects();

        if self.domain_offset.is_none() {
            let values: Vec<f64> = objects
                .iter()
                .filter_map(|key| source.domain_value(key, &self.domain_key))
                .filter(|value| value.is_finite())
                .collect();
            self.initialize_domain_offset(&values);
        }

        self.prepare_lines(&objects);
        self.append_latest(source);
        self.update_bounds();
        if self.fixed_duration.is_some() {
            self.enforce_duration();
        }
    }

    /// Bulk-import a recorded series for one live series identity.
    ///
    /// Ignored silently when the series is empty or its identity is not in
    /// the live set. Initializes the domain offset from the first and last
    /// imported samples if no offset exists yet.
    pub fn add_historical(
        &mut self,
        source: &dyn TelemetrySource,
        key: &SeriesKey,
        series: &dyn HistoricalSeries,
    ) {
        let count = series.point_count();
        if count == 0 {
            return;
        }

        if self.domain_offset.is_none() {
            let values: Vec<f64> = [
                series.domain_value(0, &self.domain_key),
                series.domain_value(count - 1, &self.domain_key),
            ]
            .into_iter()
            .flatten()
            .filter(|value| value.is_finite())
            .collect();
            self.initialize_domain_offset(&values);
        }

        self.prepare_lines(&source.telemetry_objects());

        match self.lines.get_mut(key) {
            Some(line) => line.add_series(series, &self.domain_key, &self.range_key),
            None => {
                tracing::debug!("dropping historical data for unknown series {}", key);
                return;
            }
        }

        self.update_bounds();
    }

    /// Extent of the prepared bounding box as `[domain span, range span]`
    pub fn dimensions(&self) -> [f64; 2] {
        self.dimensions
    }

    /// Lower-left corner of the prepared bounding box as `[domain, range]`.
    /// Domain values are raw, not adjusted by the domain offset.
    pub fn origin(&self) -> [f64; 2] {
        self.origin
    }

    /// The prepared bounding box
    pub fn bounds(&self) -> Bounds {
        Bounds {
            origin: self.origin,
            dimensions: self.dimensions,
        }
    }

    /// The shared domain offset subtracted from all buffered domain
    /// values, or `None` while it has not been defined yet
    pub fn domain_offset(&self) -> Option<f64> {
        self.domain_offset
    }

    /// The renderable buffers, index-aligned with the series order of the
    /// last ingested snapshot
    pub fn line_buffers(&self) -> Vec<&SeriesBuffer> {
        self.keys
            .iter()
            .filter_map(|key| self.lines.get(key))
            .map(SeriesLine::buffer)
            .collect()
    }

    /// Active series identities, in buffer order
    pub fn series_keys(&self) -> &[SeriesKey] {
        &self.keys
    }

    /// Insertion handle for one series, if live
    pub fn line(&self, key: &SeriesKey) -> Option<&SeriesLine> {
        self.lines.get(key)
    }

    /// Define the domain offset from observed values, once
    fn initialize_domain_offset(&mut self, values: &[f64]) {
        if self.domain_offset.is_none() && !values.is_empty() {
            let offset = values.iter().sum::<f64>() / values.len() as f64;
            tracing::debug!("domain offset initialized to {}", offset);
            self.domain_offset = Some(offset);
        }
    }

    /// Reconcile the engine's series set against the snapshot's.
    ///
    /// Skipped entirely when the ordered key sequence is unchanged. Lines
    /// can only be allocated while a domain offset is defined; if no
    /// series remain afterwards, the offset is cleared.
    fn prepare_lines(&mut self, objects: &[SeriesKey]) {
        if self.keys_match(objects) {
            return;
        }

        if let Some(offset) = self.domain_offset {
            let mut next = HashMap::with_capacity(objects.len());
            let mut created = 0usize;
            for key in objects {
                let line = self.lines.remove(key).unwrap_or_else(|| {
                    created += 1;
                    SeriesLine::new(SeriesBuffer::new(offset, self.max_points))
                });
                next.insert(key.clone(), line);
            }
            if created > 0 || !self.lines.is_empty() {
                tracing::debug!(
                    "prepared lines: {} created, {} retired, {} total",
                    created,
                    self.lines.len(),
                    next.len()
                );
            }
            self.keys = objects.to_vec();
            self.lines = next;
        }

        if self.lines.is_empty() && self.domain_offset.take().is_some() {
            self.keys.clear();
            tracing::debug!("last series retired, domain offset cleared");
        }

        debug_assert_eq!(self.keys.len(), self.lines.len());
    }

    /// Order-sensitive comparison against the current key sequence
    fn keys_match(&self, objects: &[SeriesKey]) -> bool {
        self.keys.len() == objects.len() && self.keys.iter().zip(objects).all(|(a, b)| a == b)
    }

    /// Append the latest sample for every retained series. A series with a
    /// missing domain or range value this tick is skipped silently.
    fn append_latest(&mut self, source: &dyn TelemetrySource) {
        for i in 0..self.keys.len() {
            let key = &self.keys[i];
            let domain = source.domain_value(key, &self.domain_key);
            let range = source.range_value(key, &self.range_key);
            match (domain, range) {
                (Some(domain), Some(range)) => {
                    if let Some(line) = self.lines.get_mut(key) {
                        line.add_point(domain, range);
                    }
                }
                _ => tracing::trace!("no sample for series {} this tick", key),
            }
        }
    }

    /// Recompute origin and dimensions from all buffers' extrema.
    ///
    /// Leaves prior bounds untouched while no buffer holds points. The
    /// range axis is padded for legibility; when a fixed duration is
    /// configured, the domain axis is anchored to the most recent window
    /// regardless of the actual data span.
    fn update_bounds(&mut self) {
        let mut domain: Option<(f64, f64)> = None;
        let mut range: Option<(f64, f64)> = None;
        for key in &self.keys {
            let Some(line) = self.lines.get(key) else {
                continue;
            };
            if let Some((min, max)) = line.buffer().domain_extrema() {
                domain = Some(domain.map_or((min, max), |(a, b)| (a.min(min), b.max(max))));
            }
            if let Some((min, max)) = line.buffer().range_extrema() {
                range = Some(range.map_or((min, max), |(a, b)| (a.min(min), b.max(max))));
            }
        }

        let (Some(domain), Some(range)) = (domain, range) else {
            return;
        };
        self.domain_extrema = Some(domain);
        self.range_extrema = Some(range);

        self.origin = [domain.0, range.0];
        self.dimensions = [domain.1 - domain.0, range.1 - range.0];
        self.expand_range();

        if let Some(duration) = self.fixed_duration {
            self.origin[0] = self.origin[0] + self.dimensions[0] - duration;
            self.dimensions[0] = duration;
        }
    }

    /// Expand the range axis so points near the boundary stay visible
    fn expand_range(&mut self) {
        let padding = (PADDING_RATIO * self.dimensions[1]).max(1.0);
        let top = (self.origin[1] + self.dimensions[1] + padding / 2.0).ceil();
        self.origin[1] = (self.origin[1] - padding / 2.0).floor();
        self.dimensions[1] = top - self.origin[1];
    }

    /// Trim every buffer to the fixed-duration window, keeping one point
    /// before the cutoff so lines still reach the left edge of the
    /// visible area, then recompute bounds from the trimmed data.
    fn enforce_duration(&mut self) {
        let Some(duration) = self.fixed_duration else {
            return;
        };
        let Some((min, max)) = self.domain_extrema else {
            return;
        };
        if max - min <= duration {
            return;
        }

        let cutoff = max - duration;
        tracing::debug!("enforcing {} duration window, cutoff {}", duration, cutoff);
        for line in self.lines.values_mut() {
            let buffer = line.buffer_mut();
            let index = buffer.find_insertion_index(cutoff);
            if index > 0 {
                buffer.trim(index - 1);
            }
        }

        // Extrema may have changed now
        self.update_bounds();
    }
}
