//! Analysis handle for running the whole pipeline on one buffer

use crate::error::Result;
use crate::log::{project, LogEntry};
use crate::region::{Region, RegionKind, RegionSet, RegionSets};
use crate::waveform::{decimate, target_width, WaveformGeometry};
use crate::{detect_clicks, detect_loud, detect_silence};
use wavescan_core::{AnalysisConfig, SampleBuffer};

/// A detector that failed and was replaced by an empty region set.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorWarning {
    pub kind: RegionKind,
    pub message: String,
}

/// Everything one analysis pass produces.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub geometry: WaveformGeometry,
    pub regions: RegionSets,
    pub log: Vec<LogEntry>,
    pub warnings: Vec<DetectorWarning>,
}

/// Handle for audio analysis
///
/// Runs decimation and the three detectors with the thresholds from an
/// [`AnalysisConfig`]. Detectors are independent: a failing detector yields an
/// empty set for its kind and a [`DetectorWarning`], never an error for the
/// whole pass.
#[derive(Debug, Clone, Default)]
pub struct AnalysisHandle {
    config: AnalysisConfig,
}

impl AnalysisHandle {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Display width for `buffer` under the configured sizing.
    pub fn display_width(&self, buffer: &SampleBuffer) -> usize {
        let display = &self.config.display;
        target_width(
            buffer.duration(),
            display.pixels_per_second,
            display.min_width,
            display.max_width,
        )
    }

    /// Decimate `buffer` to its display width.
    pub fn geometry(&self, buffer: &SampleBuffer) -> WaveformGeometry {
        decimate(buffer.samples(), self.display_width(buffer))
    }

    /// Run a single detector and return its raw, unmerged regions.
    pub fn detect(&self, kind: RegionKind, buffer: &SampleBuffer) -> Result<Vec<Region>> {
        let samples = buffer.samples();
        let sample_rate = buffer.sample_rate();
        match kind {
            RegionKind::Silence => {
                let p = &self.config.silence;
                detect_silence(
                    samples,
                    sample_rate,
                    p.amplitude_threshold,
                    p.min_duration_secs,
                )
            }
            RegionKind::Loud => {
                let p = &self.config.loudness;
                detect_loud(
                    samples,
                    sample_rate,
                    p.rms_threshold,
                    p.min_duration_secs,
                )
            }
            RegionKind::Click => {
                let p = &self.config.click;
                detect_clicks(
                    samples,
                    sample_rate,
                    p.clip_threshold,
                    p.delta_threshold,
                    p.min_duration_secs,
                )
            }
        }
    }

    /// Run every detector, merge each result and isolate failures.
    pub fn detect_all(&self, buffer: &SampleBuffer) -> (RegionSets, Vec<DetectorWarning>) {
        let mut sets = RegionSets::default();
        let mut warnings = Vec::new();

        for kind in RegionKind::ALL {
            match self.detect(kind, buffer) {
                Ok(raw) => {
                    let set = RegionSet::from_raw(kind, &raw, self.config.merge_gap_secs);
                    tracing::debug!(
                        %kind,
                        raw = raw.len(),
                        merged = set.len(),
                        "detector finished"
                    );
                    sets.set(set);
                }
                Err(e) => {
                    tracing::warn!(%kind, error = %e, "detector failed, reporting no regions");
                    warnings.push(DetectorWarning {
                        kind,
                        message: e.to_string(),
                    });
                }
            }
        }

        (sets, warnings)
    }

    /// Full pass: geometry, merged regions and the event log.
    pub fn analyze(&self, buffer: &SampleBuffer) -> AnalysisReport {
        let geometry = self.geometry(buffer);
        let (regions, warnings) = self.detect_all(buffer);
        let log = project(&regions);

        AnalysisReport {
            geometry,
            regions,
            log,
            warnings,
        }
    }
}
