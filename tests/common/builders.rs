//! Test data builders: scripted telemetry sources and recorded series

use std::collections::HashMap;

use plotprep::{HistoricalSeries, Sample, SeriesKey, TelemetrySource};

/// Scripted live source: a mutable snapshot the test rewrites between
/// engine ticks.
pub struct ScriptedSource {
    keys: Vec<SeriesKey>,
    samples: HashMap<SeriesKey, (Option<f64>, Option<f64>)>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            samples: HashMap::new(),
        }
    }

    /// Add a series with its current latest sample
    pub fn with_series(mut self, key: &str, domain: f64, range: f64) -> Self {
        let key = SeriesKey::new(key);
        self.keys.push(key.clone());
        self.samples.insert(key, (Some(domain), Some(range)));
        self
    }

    /// Replace the latest sample for a series
    pub fn set_sample(&mut self, key: &str, domain: impl Into<Option<f64>>, range: impl Into<Option<f64>>) {
        self.samples
            .insert(SeriesKey::new(key), (domain.into(), range.into()));
    }

    /// Replace the latest sample for every series, as one synchronized tick
    pub fn tick_all(&mut self, domain: f64, range: f64) {
        for key in &self.keys {
            self.samples
                .insert(key.clone(), (Some(domain), Some(range)));
        }
    }

    /// Drop a series from the live set
    pub fn remove_series(&mut self, key: &str) {
        let key = SeriesKey::new(key);
        self.keys.retain(|k| *k != key);
        self.samples.remove(&key);
    }

    /// Add a series mid-run
    pub fn add_series(&mut self, key: &str, domain: f64, range: f64) {
        let key = SeriesKey::new(key);
        self.keys.push(key.clone());
        self.samples.insert(key, (Some(domain), Some(range)));
    }

    /// Reorder the live set without changing membership
    pub fn set_order(&mut self, order: &[&str]) {
        assert_eq!(order.len(), self.keys.len(), "order must cover all series");
        self.keys = order.iter().map(|k| SeriesKey::new(*k)).collect();
    }
}

impl TelemetrySource for ScriptedSource {
    fn telemetry_objects(&self) -> Vec<SeriesKey> {
        self.keys.clone()
    }

    fn domain_value(&self, key: &SeriesKey, _field: &str) -> Option<f64> {
        self.samples.get(key).and_then(|(domain, _)| *domain)
    }

    fn range_value(&self, key: &SeriesKey, _field: &str) -> Option<f64> {
        self.samples.get(key).and_then(|(_, range)| *range)
    }
}

/// Recorded series backed by a sample vector, for historical imports
pub struct RecordedSeries {
    samples: Vec<Sample>,
}

impl RecordedSeries {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Evenly spaced samples: domains `start, start+step, ...`, ranges from
    /// a callback over the domain
    pub fn generate(start: f64, step: f64, count: usize, range_fn: impl Fn(f64) -> f64) -> Self {
        let samples = (0..count)
            .map(|i| {
                let domain = start + step * i as f64;
                Sample::new(domain, range_fn(domain))
            })
            .collect();
        Self { samples }
    }
}

impl HistoricalSeries for RecordedSeries {
    fn point_count(&self) -> usize {
        self.samples.len()
    }

    fn domain_value(&self, index: usize, _field: &str) -> Option<f64> {
        self.samples.get(index).map(|s| s.domain)
    }

    fn range_value(&self, index: usize, _field: &str) -> Option<f64> {
        self.samples.get(index).map(|s| s.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_roundtrip() {
        let mut source = ScriptedSource::new().with_series("a", 1.0, 2.0);
        let key = SeriesKey::new("a");
        assert_eq!(source.domain_value(&key, "timestamp"), Some(1.0));

        source.set_sample("a", 3.0, None);
        assert_eq!(source.domain_value(&key, "timestamp"), Some(3.0));
        assert_eq!(source.range_value(&key, "value"), None);
    }

    #[test]
    fn test_recorded_series_generate() {
        let series = RecordedSeries::generate(10.0, 2.0, 3, |d| d * 10.0);
        assert_eq!(series.point_count(), 3);
        assert_eq!(series.domain_value(2, "timestamp"), Some(14.0));
        assert_eq!(series.range_value(2, "value"), Some(140.0));
    }
}
