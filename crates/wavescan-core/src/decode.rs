//! Decoding collaborator interface.
//!
//! Container decoding lives outside the analysis core; the pipeline only needs
//! something that turns raw file bytes into a [`SampleBuffer`]. [`WavDecoder`]
//! covers uncompressed WAV/PCM, other formats plug in through [`Decoder`].

use crate::SampleBuffer;
use thiserror::Error;

/// Malformed or unsupported input.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[cfg(feature = "wav")]
    #[error("WAV: {0}")]
    Wav(#[from] hound::Error),

    #[error("Unsupported input: {0}")]
    Unsupported(String),

    #[error("Input declares no audio channels")]
    NoChannels,

    #[error("Invalid sample rate: {0}")]
    InvalidSampleRate(f64),
}

/// Turns raw file bytes into a decoded reference channel.
pub trait Decoder {
    fn decode(&self, bytes: &[u8]) -> Result<SampleBuffer, DecodeError>;
}

impl<F> Decoder for F
where
    F: Fn(&[u8]) -> Result<SampleBuffer, DecodeError>,
{
    fn decode(&self, bytes: &[u8]) -> Result<SampleBuffer, DecodeError> {
        self(bytes)
    }
}

/// Scoped decode resource.
///
/// Holds the input bytes for the duration of one decode and runs its release
/// hook when dropped, so cleanup happens on success, error and unwinding alike.
pub struct DecodeHandle<'a> {
    decoder: &'a dyn Decoder,
    bytes: &'a [u8],
    on_release: Option<Box<dyn FnOnce() + 'a>>,
}

impl<'a> DecodeHandle<'a> {
    pub fn open(decoder: &'a dyn Decoder, bytes: &'a [u8]) -> Self {
        tracing::debug!(bytes = bytes.len(), "decode handle opened");
        Self {
            decoder,
            bytes,
            on_release: None,
        }
    }

    /// Register a hook that runs when the handle is released.
    pub fn on_release(mut self, hook: impl FnOnce() + 'a) -> Self {
        self.on_release = Some(Box::new(hook));
        self
    }

    pub fn decode(&self) -> Result<SampleBuffer, DecodeError> {
        self.decoder.decode(self.bytes)
    }
}

impl Drop for DecodeHandle<'_> {
    fn drop(&mut self) {
        if let Some(hook) = self.on_release.take() {
            hook();
        }
        tracing::debug!(bytes = self.bytes.len(), "decode handle released");
    }
}

/// WAV/PCM decoder backed by `hound`.
///
/// Integer PCM is scaled to [-1, 1); float PCM is passed through.
#[cfg(feature = "wav")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WavDecoder;

#[cfg(feature = "wav")]
impl Decoder for WavDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<SampleBuffer, DecodeError> {
        let reader = hound::WavReader::new(std::io::Cursor::new(bytes))?;
        let spec = reader.spec();

        if spec.channels == 0 {
            return Err(DecodeError::NoChannels);
        }
        if spec.sample_rate == 0 {
            return Err(DecodeError::InvalidSampleRate(0.0));
        }

        let interleaved: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .into_samples::<f32>()
                .collect::<Result<Vec<_>, _>>()?,
            hound::SampleFormat::Int => {
                if spec.bits_per_sample == 0 || spec.bits_per_sample > 32 {
                    return Err(DecodeError::Unsupported(format!(
                        "{}-bit integer PCM",
                        spec.bits_per_sample
                    )));
                }
                let scale = 1.0 / (1u64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|v| v as f32 * scale))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };

        let buffer = SampleBuffer::from_interleaved(
            &interleaved,
            spec.channels as usize,
            spec.sample_rate as f64,
        );
        tracing::debug!(
            channels = spec.channels,
            sample_rate = spec.sample_rate,
            frames = buffer.len(),
            "decoded WAV"
        );
        Ok(buffer)
    }
}
