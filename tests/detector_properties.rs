//! Property tests for the detectors and the merge step through the public API.

use proptest::prelude::*;
use wavescan::analysis::{
    detect_clicks, detect_loud, detect_silence, merge, project, AnalysisHandle, RegionSet,
    RegionSets,
};
use wavescan::prelude::*;

const SR: f64 = 1000.0;

proptest! {
    /// A quiet constant signal is one silence region covering everything.
    #[test]
    fn quiet_signal_is_one_silence_region(
        level in -0.0099f32..0.0099,
        len in 1200usize..5000,
    ) {
        let samples = vec![level; len];
        let regions = detect_silence(&samples, SR, 0.01, 1.2).unwrap();
        prop_assert_eq!(regions.len(), 1);
        prop_assert_eq!(regions[0].start_time, 0.0);
        prop_assert!((regions[0].end_time - len as f64 / SR).abs() < 1e-9);
    }

    /// Silence regions never overlap and all meet the minimum duration.
    #[test]
    fn silence_regions_are_disjoint_and_long_enough(
        samples in prop::collection::vec(prop_oneof![Just(0.0f32), -1.0f32..1.0], 0..4000),
        min_secs in 0.0f64..0.5,
    ) {
        let regions = detect_silence(&samples, SR, 0.01, min_secs).unwrap();
        for r in &regions {
            prop_assert!(r.duration() + 1e-9 >= min_secs);
            prop_assert!(r.end_time <= samples.len() as f64 / SR + 1e-9);
        }
        for pair in regions.windows(2) {
            prop_assert!(pair[0].end_time < pair[1].start_time);
        }
    }

    /// Loudness detection never reports a region on a signal whose peak is
    /// below the threshold.
    #[test]
    fn quiet_signal_is_never_loud(
        samples in prop::collection::vec(-0.59f32..0.59, 0..3000),
    ) {
        let regions = detect_loud(&samples, SR, 0.6, 0.0).unwrap();
        prop_assert!(regions.is_empty());
    }

    /// Smooth, unclipped signals produce no clicks.
    #[test]
    fn smooth_signal_has_no_clicks(
        freq in 1.0f64..20.0,
        amp in 0.0f64..0.9,
    ) {
        let samples: Vec<f32> = (0..2000)
            .map(|i| {
                let t = i as f64 / SR;
                (amp * (2.0 * std::f64::consts::PI * freq * t).sin()) as f32
            })
            .collect();
        let regions = detect_clicks(&samples, SR, 0.98, 0.75, 0.0).unwrap();
        prop_assert!(regions.is_empty());
    }

    /// Merged regions are sorted, of one kind, and separated by at least the gap.
    #[test]
    fn merged_regions_respect_gap(
        spans in prop::collection::vec((0.0f64..100.0, 0.0f64..5.0), 0..30),
        gap in 0.0f64..2.0,
    ) {
        let raw: Vec<Region> = spans
            .iter()
            .map(|&(start, len)| silence_region(start, start + len))
            .collect();
        let merged = merge(&raw, gap);
        for pair in merged.windows(2) {
            prop_assert!(pair[1].start_time - pair[0].end_time >= gap);
            prop_assert!(pair[0].start_time <= pair[1].start_time);
        }
        prop_assert!(merged.iter().all(|r| r.kind == RegionKind::Silence));
    }
}

fn silence_region(start: f64, end: f64) -> Region {
    Region {
        kind: RegionKind::Silence,
        start_time: start,
        end_time: end,
        metric: 0.0,
    }
}

#[test]
fn test_log_is_sentinel_for_empty_sets() {
    let log = project(&RegionSets::default());
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].to_string(), "No warnings detected");
}

#[test]
fn test_log_orders_kinds_then_start() {
    let handle = AnalysisHandle::default();
    let mut samples = vec![0.0f32; 2000]; // 2s silence at SR
    samples.extend(vec![0.9f32; 1000]); // 1s loud
    samples.extend(vec![0.0f32; 1500]); // 1.5s silence
    let buffer = SampleBuffer::new(samples, SR);

    let report = handle.analyze(&buffer);
    let reasons: Vec<&str> = report.log.iter().map(|e| e.reason).collect();
    assert_eq!(reasons, ["Silence", "Silence", "Too Loud"]);
    assert!(report.log[0].start_time < report.log[1].start_time);
}

#[test]
fn test_region_set_keeps_kind() {
    let raw = detect_silence(&[0.0; 3000], SR, 0.01, 1.2).unwrap();
    let set = RegionSet::from_raw(RegionKind::Silence, &raw, 0.2);
    assert_eq!(set.kind(), RegionKind::Silence);
    assert_eq!(set.len(), 1);
}
