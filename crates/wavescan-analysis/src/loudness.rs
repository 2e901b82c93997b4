//! Loudness detection.
//!
//! Windowed RMS scan with 50% overlap. Consecutive windows at or above the
//! threshold form a loud region. A region's end is the end of its last
//! qualifying window, so it may run up to one window past the last loud
//! sample.

use crate::error::{check_param, check_sample_rate, Result};
use crate::region::{Region, RegionKind};

/// Analysis window length.
pub const WINDOW_SECS: f64 = 0.05;

pub use wavescan_core::config::{
    DEFAULT_LOUD_MIN_SECS as DEFAULT_MIN_DURATION_SECS,
    DEFAULT_LOUD_RMS_THRESHOLD as DEFAULT_RMS_THRESHOLD,
};

/// Window length in samples at `sample_rate` (at least 1).
pub fn window_len(sample_rate: f64) -> usize {
    ((WINDOW_SECS * sample_rate).round() as usize).max(1)
}

struct LoudRun {
    start: usize,
    end: usize,
    windows: usize,
    rms_sum: f64,
}

/// Find spans where windowed RMS stays at or above `rms_threshold`.
///
/// Windows start every `hop = window / 2` samples and are only evaluated where
/// a full window fits. A run is kept when `windows * hop` covers at least
/// `min_duration_secs`; its metric is the mean RMS of its windows.
pub fn detect_loud(
    samples: &[f32],
    sample_rate: f64,
    rms_threshold: f32,
    min_duration_secs: f64,
) -> Result<Vec<Region>> {
    check_sample_rate(sample_rate)?;
    check_param("rms_threshold", rms_threshold as f64)?;
    check_param("min_duration_secs", min_duration_secs)?;

    let window = window_len(sample_rate);
    let hop = (window / 2).max(1);
    let min_samples = min_duration_secs * sample_rate;
    let threshold = rms_threshold as f64;

    let mut regions = Vec::new();
    let mut open: Option<LoudRun> = None;
    let mut start = 0;

    while start + window <= samples.len() {
        let rms = window_rms(&samples[start..start + window]);

        if rms >= threshold {
            match open.as_mut() {
                Some(run) => {
                    run.end = start + window;
                    run.windows += 1;
                    run.rms_sum += rms;
                }
                None => {
                    open = Some(LoudRun {
                        start,
                        end: start + window,
                        windows: 1,
                        rms_sum: rms,
                    });
                }
            }
        } else if let Some(run) = open.take() {
            close_run(&mut regions, run, hop, min_samples, sample_rate);
        }

        start += hop;
    }

    if let Some(run) = open {
        close_run(&mut regions, run, hop, min_samples, sample_rate);
    }

    Ok(regions)
}

fn window_rms(window: &[f32]) -> f64 {
    let sum_sq: f64 = window.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (sum_sq / window.len() as f64).sqrt()
}

fn close_run(
    regions: &mut Vec<Region>,
    run: LoudRun,
    hop: usize,
    min_samples: f64,
    sample_rate: f64,
) {
    if ((run.windows * hop) as f64) < min_samples {
        return;
    }
    let metric = (run.rms_sum / run.windows as f64) as f32;
    regions.push(Region::from_sample_span(
        RegionKind::Loud,
        run.start,
        run.end,
        sample_rate,
        metric,
    ));
}
