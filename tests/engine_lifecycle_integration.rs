//! Integration tests for the engine's series lifecycle
//!
//! These tests drive a PlotEngine through multi-tick scenarios: series
//! appearing and retiring, domain offset initialization and reset, index
//! alignment of exposed buffers, and historical backfill combined with
//! live updates.

mod common;

use common::builders::{RecordedSeries, ScriptedSource};
use plotprep::{EngineConfig, PlotEngine, SeriesKey};

fn engine() -> PlotEngine {
    PlotEngine::new("timestamp", "value", EngineConfig::default()).unwrap()
}

#[test]
fn test_series_lifecycle_end_to_end() {
    let mut engine = engine();

    // Ticks with no series at all: nothing is prepared.
    let mut source = ScriptedSource::new();
    engine.update(&source);
    engine.update(&source);
    assert!(engine.domain_offset().is_none());
    assert!(engine.line_buffers().is_empty());

    // Two series appear; the offset is the mean of their first domains.
    source.add_series("gyro.x", 100.0, 0.5);
    source.add_series("gyro.y", 200.0, -0.5);
    engine.update(&source);
    assert_eq!(engine.domain_offset(), Some(150.0));
    assert_eq!(engine.line_buffers().len(), 2);

    // A third series appears later and reuses the shared offset.
    source.add_series("gyro.z", 9000.0, 0.0);
    engine.update(&source);
    assert_eq!(engine.domain_offset(), Some(150.0));
    assert_eq!(engine.line_buffers().len(), 3);

    // Two retire; the survivor keeps its accumulated points.
    source.remove_series("gyro.x");
    source.remove_series("gyro.z");
    engine.update(&source);
    assert_eq!(engine.series_keys(), &[SeriesKey::new("gyro.y")]);
    assert_eq!(engine.line_buffers()[0].len(), 3);

    // The last series retires: offset clears and state empties.
    source.remove_series("gyro.y");
    engine.update(&source);
    assert!(engine.domain_offset().is_none());
    assert!(engine.line_buffers().is_empty());

    // A fresh series redefines the offset from its own samples.
    source.add_series("mag.x", 42.0, 1.0);
    engine.update(&source);
    assert_eq!(engine.domain_offset(), Some(42.0));
}

#[test]
fn test_buffers_follow_snapshot_order() {
    let mut engine = engine();
    let mut source = ScriptedSource::new()
        .with_series("a", 0.0, 1.0)
        .with_series("b", 0.0, 2.0);
    engine.update(&source);

    let ranges: Vec<f32> = engine
        .line_buffers()
        .iter()
        .map(|buffer| buffer.values()[1])
        .collect();
    assert_eq!(ranges, vec![1.0, 2.0]);

    // Same membership, new order: buffers realign without losing data.
    source.set_order(&["b", "a"]);
    source.tick_all(1.0, 3.0);
    engine.update(&source);

    assert_eq!(
        engine.series_keys(),
        &[SeriesKey::new("b"), SeriesKey::new("a")]
    );
    let buffers = engine.line_buffers();
    assert_eq!(buffers.len(), 2);
    // Index 0 is now "b": its first point still has range 2.0.
    assert_eq!(buffers[0].values()[1], 2.0);
    assert_eq!(buffers[0].len(), 2);
}

#[test]
fn test_historical_backfill_then_live_updates() {
    let mut engine = engine();
    let source = ScriptedSource::new().with_series("power.bus", 1000.0, 5.0);

    // Backfill arrives first and defines the offset from its endpoints.
    let recorded = RecordedSeries::generate(900.0, 1.0, 100, |d| (d - 900.0) / 10.0);
    engine.add_historical(&source, &SeriesKey::new("power.bus"), &recorded);
    assert_eq!(engine.domain_offset(), Some((900.0 + 999.0) / 2.0));

    let buffers = engine.line_buffers();
    assert_eq!(buffers.len(), 1);
    assert_eq!(buffers[0].len(), 100);
    let (domain_min, domain_max) = buffers[0].domain_extrema().unwrap();
    common::assert_float_eq(domain_min, 900.0, 1e-6);
    common::assert_float_eq(domain_max, 999.0, 1e-6);

    // Live samples keep appending to the same buffer with the same offset.
    engine.update(&source);
    assert_eq!(engine.domain_offset(), Some((900.0 + 999.0) / 2.0));
    assert_eq!(engine.line_buffers()[0].len(), 101);
    let (_, domain_max) = engine.line_buffers()[0].domain_extrema().unwrap();
    common::assert_float_eq(domain_max, 1000.0, 1e-6);
}

#[test]
fn test_missing_samples_skip_without_disturbing_others() {
    let mut engine = engine();
    let mut source = ScriptedSource::new()
        .with_series("a", 0.0, 1.0)
        .with_series("b", 0.0, 1.0);
    engine.update(&source);

    // "b" goes quiet for two ticks.
    source.set_sample("a", 1.0, 1.5);
    source.set_sample("b", None, None);
    engine.update(&source);
    source.set_sample("a", 2.0, 2.5);
    engine.update(&source);

    let buffers = engine.line_buffers();
    assert_eq!(buffers[0].len(), 3);
    assert_eq!(buffers[1].len(), 1);

    // "b" resumes.
    source.set_sample("b", 3.0, 9.0);
    source.set_sample("a", 3.0, 3.5);
    engine.update(&source);
    assert_eq!(engine.line_buffers()[1].len(), 2);
}

#[test]
fn test_large_timestamp_precision_preserved() {
    let mut engine = engine();
    // Millisecond epoch timestamps: raw values far exceed f32 integer
    // precision, offset-relative values do not.
    let epoch = 1.7e12;
    let mut source = ScriptedSource::new().with_series("clock", epoch, 0.0);
    engine.update(&source);

    for tick in 1..=10 {
        source.set_sample("clock", epoch + tick as f64 * 0.5, 0.0);
        engine.update(&source);
    }

    let offset = engine.domain_offset().unwrap();
    assert_eq!(offset, epoch);
    let buffers = engine.line_buffers();
    let stored: Vec<f32> = buffers[0].points().map(|(d, _)| d).collect();
    // Successive samples stay distinguishable after narrowing.
    for window in stored.windows(2) {
        assert!(window[1] > window[0]);
    }
    let (_, domain_max) = buffers[0].domain_extrema().unwrap();
    common::assert_float_eq(domain_max, epoch + 5.0, 1e-3);
}
