//! Click and distortion detection.
//!
//! Flags hard clipping and abrupt sample-to-sample jumps. Triggers that occur
//! within [`MAX_GAP_SECS`] of each other are grouped into one region so a burst
//! of crackle reads as a single event.

use crate::error::{check_param, check_sample_rate, Result};
use crate::region::{Region, RegionKind};

/// Longest pause between triggers that still continues a region.
pub const MAX_GAP_SECS: f64 = 0.02;

pub use wavescan_core::config::{
    DEFAULT_CLICK_MIN_SECS as DEFAULT_MIN_DURATION_SECS, DEFAULT_CLIP_THRESHOLD,
    DEFAULT_DELTA_THRESHOLD,
};

/// Find clipped or discontinuous spans.
///
/// Index `i >= 1` triggers when `|s[i]| >= clip_threshold` or
/// `|s[i] - s[i-1]| >= delta_threshold`. The first trigger opens a region at
/// `i - 1`; the region closes at its last trigger once no trigger follows
/// within the gap bound, and is kept when `last - start` spans at least
/// `min_duration_secs`.
pub fn detect_clicks(
    samples: &[f32],
    sample_rate: f64,
    clip_threshold: f32,
    delta_threshold: f32,
    min_duration_secs: f64,
) -> Result<Vec<Region>> {
    check_sample_rate(sample_rate)?;
    check_param("clip_threshold", clip_threshold as f64)?;
    check_param("delta_threshold", delta_threshold as f64)?;
    check_param("min_duration_secs", min_duration_secs)?;

    let max_gap = (MAX_GAP_SECS * sample_rate).round() as usize;
    let min_samples = min_duration_secs * sample_rate;

    let mut regions = Vec::new();
    // (region start, last trigger)
    let mut open: Option<(usize, usize)> = None;

    for i in 1..samples.len() {
        if let Some((start, last)) = open {
            if i - last > max_gap {
                close_region(&mut regions, start, last, min_samples, sample_rate);
                open = None;
            }
        }

        let sample = samples[i];
        let jump = (sample - samples[i - 1]).abs();
        if sample.abs() >= clip_threshold || jump >= delta_threshold {
            match open.as_mut() {
                Some((_, last)) => *last = i,
                None => open = Some((i - 1, i)),
            }
        }
    }

    if let Some((start, last)) = open {
        close_region(&mut regions, start, last, min_samples, sample_rate);
    }

    Ok(regions)
}

fn close_region(
    regions: &mut Vec<Region>,
    start: usize,
    last: usize,
    min_samples: f64,
    sample_rate: f64,
) {
    if ((last - start) as f64) < min_samples {
        return;
    }
    regions.push(Region::from_sample_span(
        RegionKind::Click,
        start,
        last,
        sample_rate,
        0.0,
    ));
}
