//! Builder for configuring and constructing a `WaveScan`.

use crate::analysis::AnalysisHandle;
use crate::core::{AnalysisConfig, Decoder};
#[cfg(not(feature = "wav"))]
use crate::core::{DecodeError, SampleBuffer};
use crate::{Result, WaveScan};

/// Detector thresholds and display sizing come from [`AnalysisConfig`]; the
/// decoder defaults to WAV/PCM when the `wav` feature is enabled.
///
/// # Example
///
/// ```ignore
/// use wavescan::prelude::*;
///
/// let mut config = AnalysisConfig::default();
/// config.silence.min_duration_secs = 2.0;
///
/// let mut scan = WaveScan::builder().config(config).build()?;
/// scan.load_path("take_03.wav")?;
/// for entry in scan.log() {
///     println!("{entry}");
/// }
/// ```
#[derive(Default)]
pub struct WaveScanBuilder {
    config: AnalysisConfig,
    decoder: Option<Box<dyn Decoder>>,
}

impl WaveScanBuilder {
    pub fn config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom decoder for formats other than WAV.
    pub fn decoder(mut self, decoder: impl Decoder + 'static) -> Self {
        self.decoder = Some(Box::new(decoder));
        self
    }

    /// Validates the configuration.
    pub fn build(self) -> Result<WaveScan> {
        self.config.validate()?;

        let decoder = match self.decoder {
            Some(decoder) => decoder,
            None => default_decoder(),
        };

        tracing::debug!(config = ?self.config, "wavescan built");
        let analysis = AnalysisHandle::new(self.config);
        Ok(WaveScan::from_parts(analysis, decoder))
    }
}

#[cfg(feature = "wav")]
fn default_decoder() -> Box<dyn Decoder> {
    Box::new(crate::core::WavDecoder)
}

#[cfg(not(feature = "wav"))]
fn default_decoder() -> Box<dyn Decoder> {
    Box::new(no_decoder)
}

#[cfg(not(feature = "wav"))]
fn no_decoder(_: &[u8]) -> std::result::Result<SampleBuffer, DecodeError> {
    Err(DecodeError::Unsupported("no decoder configured".into()))
}
