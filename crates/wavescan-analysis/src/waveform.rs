//! Waveform Decimation
//!
//! Reduce a sample sequence to one min/max envelope pair per display column.
//!
//! ## Cost
//!
//! Every sample is visited once regardless of the target width, and the
//! target width itself is bounded by [`target_width`], so rendering cost never
//! grows with recording length.

/// Min/max envelope of one display column
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct EnvelopeColumn {
    /// Minimum sample value in this column
    pub min: f32,
    /// Maximum sample value in this column
    pub max: f32,
}

/// Decimated waveform, one column per display pixel
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct WaveformGeometry {
    /// Envelope columns, left to right
    pub columns: Vec<EnvelopeColumn>,
    /// Samples scanned per column
    pub samples_per_column: usize,
    /// Total number of samples summarized
    pub total_samples: usize,
}

impl WaveformGeometry {
    /// Number of columns (the display width it was built for)
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnvelopeColumn> {
        self.columns.iter()
    }

    /// Get the overall peak level
    pub fn peak(&self) -> f32 {
        self.columns
            .iter()
            .map(|c| c.min.abs().max(c.max.abs()))
            .fold(0.0f32, |a, b| a.max(b))
    }
}

/// Decimate `samples` to exactly `target_width` columns.
///
/// Column `i` covers `[i * step, (i + 1) * step)` with
/// `step = ceil(len / target_width)`. Columns past the end of the data (only
/// possible when there are fewer samples than columns) repeat the previous
/// column, or are flat at the start. A width of 0 is treated as 1.
pub fn decimate(samples: &[f32], target_width: usize) -> WaveformGeometry {
    let width = target_width.max(1);
    let total = samples.len();
    let step = total.div_ceil(width).max(1);

    let mut columns = Vec::with_capacity(width);
    let mut previous = EnvelopeColumn::default();

    for i in 0..width {
        let start = (i * step).min(total);
        let end = ((i + 1) * step).min(total);
        let slice = &samples[start..end];

        let column = if slice.is_empty() {
            previous
        } else {
            let mut min = f32::MAX;
            let mut max = f32::MIN;
            for &sample in slice {
                min = min.min(sample);
                max = max.max(sample);
            }
            EnvelopeColumn { min, max }
        };

        columns.push(column);
        previous = column;
    }

    WaveformGeometry {
        columns,
        samples_per_column: step,
        total_samples: total,
    }
}

/// Display width for a recording: `clamp(ceil(duration * pps), min, max)`.
pub fn target_width(
    duration_secs: f64,
    pixels_per_second: f64,
    min_width: usize,
    max_width: usize,
) -> usize {
    let max_width = max_width.max(min_width);
    let natural = (duration_secs * pixels_per_second).ceil();
    if !natural.is_finite() || natural <= min_width as f64 {
        return min_width;
    }
    (natural as usize).clamp(min_width, max_width)
}
