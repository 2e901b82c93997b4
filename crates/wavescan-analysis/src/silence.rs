//! Silence detection.
//!
//! A single left-to-right scan: runs of samples whose magnitude stays below an
//! amplitude threshold become silence regions when they last long enough.

use crate::error::{check_param, check_sample_rate, Result};
use crate::region::{Region, RegionKind};

pub use wavescan_core::config::{
    DEFAULT_SILENCE_MIN_SECS as DEFAULT_MIN_DURATION_SECS,
    DEFAULT_SILENCE_THRESHOLD as DEFAULT_AMPLITUDE_THRESHOLD,
};

/// Find runs where `|sample| < amplitude_threshold` for at least
/// `min_duration_secs`.
///
/// A run opens at the first quiet sample and closes at the first loud one (or
/// the end of the buffer); the region spans `[open, close)`. The metric is the
/// RMS of the run.
pub fn detect_silence(
    samples: &[f32],
    sample_rate: f64,
    amplitude_threshold: f32,
    min_duration_secs: f64,
) -> Result<Vec<Region>> {
    check_sample_rate(sample_rate)?;
    check_param("amplitude_threshold", amplitude_threshold as f64)?;
    check_param("min_duration_secs", min_duration_secs)?;

    let min_samples = min_duration_secs * sample_rate;
    let mut regions = Vec::new();
    // (start index, sum of squares)
    let mut run: Option<(usize, f64)> = None;

    for (i, &sample) in samples.iter().enumerate() {
        if sample.abs() < amplitude_threshold {
            let entry = run.get_or_insert((i, 0.0));
            entry.1 += (sample as f64) * (sample as f64);
        } else if let Some((start, sum_sq)) = run.take() {
            close_run(&mut regions, start, i, sum_sq, min_samples, sample_rate);
        }
    }

    if let Some((start, sum_sq)) = run {
        close_run(
            &mut regions,
            start,
            samples.len(),
            sum_sq,
            min_samples,
            sample_rate,
        );
    }

    Ok(regions)
}

fn close_run(
    regions: &mut Vec<Region>,
    start: usize,
    end: usize,
    sum_sq: f64,
    min_samples: f64,
    sample_rate: f64,
) {
    let count = end - start;
    if count == 0 || (count as f64) < min_samples {
        return;
    }
    let rms = (sum_sq / count as f64).sqrt() as f32;
    regions.push(Region::from_sample_span(
        RegionKind::Silence,
        start,
        end,
        sample_rate,
        rms,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: f64 = 1000.0;

    fn detect(samples: &[f32]) -> Vec<Region> {
        detect_silence(
            samples,
            SR,
            DEFAULT_AMPLITUDE_THRESHOLD,
            DEFAULT_MIN_DURATION_SECS,
        )
        .unwrap()
    }

    #[test]
    fn test_all_zero_is_one_region() {
        let regions = detect(&vec![0.0; 3000]);

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].kind, RegionKind::Silence);
        assert_eq!(regions[0].start_time, 0.0);
        assert_eq!(regions[0].end_time, 3.0);
        assert_eq!(regions[0].metric, 0.0);
    }

    #[test]
    fn test_short_gap_is_ignored() {
        let mut samples = vec![0.5; 3000];
        samples[1000..2000].fill(0.0);
        assert!(detect(&samples).is_empty());
    }

    #[test]
    fn test_exact_min_duration_is_kept() {
        let mut samples = vec![0.5; 3000];
        samples[1000..2200].fill(0.001);

        let regions = detect(&samples);

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].start_time, 1.0);
        assert_eq!(regions[0].end_time, 2.2);
        assert!((regions[0].metric - 0.001).abs() < 1e-6);
    }

    #[test]
    fn test_multiple_runs_ordered() {
        let mut samples = vec![0.3; 6000];
        samples[0..1500].fill(0.0);
        samples[4000..6000].fill(-0.005);

        let regions = detect(&samples);

        assert_eq!(regions.len(), 2);
        assert!(regions[0].end_time <= regions[1].start_time);
        assert_eq!(regions[1].end_time, 6.0);
    }

    #[test]
    fn test_empty_buffer() {
        assert!(detect(&[]).is_empty());
    }

    #[test]
    fn test_invalid_sample_rate() {
        let result = detect_silence(&[0.0; 10], 0.0, 0.01, 1.2);
        assert!(result.is_err());
    }
}
