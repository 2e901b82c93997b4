//! Detector errors.

use thiserror::Error;

/// A detector refused its input.
///
/// These are recoverable: [`crate::AnalysisHandle::analyze`] turns them into
/// an empty region set for that kind plus a warning.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid sample rate: {0}. Must be finite and positive")]
    InvalidSampleRate(f64),

    #[error("Invalid parameter '{name}': {value}. Must be finite and non-negative")]
    InvalidParameter { name: &'static str, value: f64 },
}

pub type Result<T> = core::result::Result<T, AnalysisError>;

pub(crate) fn check_sample_rate(sample_rate: f64) -> Result<()> {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidSampleRate(sample_rate))
    }
}

pub(crate) fn check_param(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidParameter { name, value })
    }
}
