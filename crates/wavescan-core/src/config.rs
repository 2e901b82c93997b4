//! Analysis configuration.

use crate::{Error, Result};

/// Samples with `|s|` below this are silent.
pub const DEFAULT_SILENCE_THRESHOLD: f32 = 0.01;
/// Shortest silence worth reporting.
pub const DEFAULT_SILENCE_MIN_SECS: f64 = 1.2;

pub const DEFAULT_LOUD_RMS_THRESHOLD: f32 = 0.6;
pub const DEFAULT_LOUD_MIN_SECS: f64 = 0.5;

pub const DEFAULT_CLIP_THRESHOLD: f32 = 0.98;
pub const DEFAULT_DELTA_THRESHOLD: f32 = 0.75;
pub const DEFAULT_CLICK_MIN_SECS: f64 = 0.01;

/// Default gap below which same-kind regions merge.
pub const DEFAULT_MERGE_GAP_SECS: f64 = 0.2;

/// Silence detector thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SilenceParams {
    /// Samples with `|s|` below this are silent
    pub amplitude_threshold: f32,
    /// Shortest run reported, in seconds
    pub min_duration_secs: f64,
}

impl Default for SilenceParams {
    fn default() -> Self {
        Self {
            amplitude_threshold: DEFAULT_SILENCE_THRESHOLD,
            min_duration_secs: DEFAULT_SILENCE_MIN_SECS,
        }
    }
}

/// Loudness detector thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct LoudnessParams {
    /// Windows with RMS at or above this are loud
    pub rms_threshold: f32,
    pub min_duration_secs: f64,
}

impl Default for LoudnessParams {
    fn default() -> Self {
        Self {
            rms_threshold: DEFAULT_LOUD_RMS_THRESHOLD,
            min_duration_secs: DEFAULT_LOUD_MIN_SECS,
        }
    }
}

/// Click/distortion detector thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ClickParams {
    /// Hard clipping level
    pub clip_threshold: f32,
    /// Sample-to-sample jump that counts as a click
    pub delta_threshold: f32,
    pub min_duration_secs: f64,
}

impl Default for ClickParams {
    fn default() -> Self {
        Self {
            clip_threshold: DEFAULT_CLIP_THRESHOLD,
            delta_threshold: DEFAULT_DELTA_THRESHOLD,
            min_duration_secs: DEFAULT_CLICK_MIN_SECS,
        }
    }
}

/// Rendering surface sizing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DisplayParams {
    pub pixels_per_second: f64,
    pub min_width: usize,
    pub max_width: usize,
    pub height: f32,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            pixels_per_second: 200.0,
            min_width: 1200,
            max_width: 2400,
            height: 300.0,
        }
    }
}

/// Configuration for one analysis session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct AnalysisConfig {
    pub silence: SilenceParams,
    pub loudness: LoudnessParams,
    pub click: ClickParams,
    /// Same-kind regions closer than this are coalesced
    pub merge_gap_secs: f64,
    pub display: DisplayParams,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            silence: SilenceParams::default(),
            loudness: LoudnessParams::default(),
            click: ClickParams::default(),
            merge_gap_secs: DEFAULT_MERGE_GAP_SECS,
            display: DisplayParams::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        let s = &self.silence;
        check_non_negative("silence.amplitude_threshold", s.amplitude_threshold.into())?;
        check_non_negative("silence.min_duration_secs", s.min_duration_secs)?;

        let l = &self.loudness;
        check_non_negative("loudness.rms_threshold", l.rms_threshold.into())?;
        check_non_negative("loudness.min_duration_secs", l.min_duration_secs)?;

        let c = &self.click;
        check_non_negative("click.clip_threshold", c.clip_threshold.into())?;
        check_non_negative("click.delta_threshold", c.delta_threshold.into())?;
        check_non_negative("click.min_duration_secs", c.min_duration_secs)?;

        check_non_negative("merge_gap_secs", self.merge_gap_secs)?;

        let display = &self.display;
        if !(display.pixels_per_second.is_finite() && display.pixels_per_second > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "display.pixels_per_second {} must be positive",
                display.pixels_per_second
            )));
        }
        if display.min_width == 0 || display.min_width > display.max_width {
            return Err(Error::InvalidConfig(format!(
                "display width range {}..={} is empty",
                display.min_width, display.max_width
            )));
        }
        if !(display.height.is_finite() && display.height > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "display.height {} must be positive",
                display.height
            )));
        }
        Ok(())
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!(
            "{name} {value} must be a finite, non-negative number"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.silence.amplitude_threshold, 0.01);
        assert_eq!(config.loudness.rms_threshold, 0.6);
        assert_eq!(config.click.clip_threshold, 0.98);
        assert_eq!(config.merge_gap_secs, 0.2);
        assert_eq!(config.display.min_width, 1200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let mut config = AnalysisConfig::default();
        config.loudness.rms_threshold = -0.1;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_inverted_width_range() {
        let mut config = AnalysisConfig::default();
        config.display.min_width = 3000;
        assert!(config.validate().is_err());
    }
}
