//! # wavescan-core
//!
//! Shared building blocks for the wavescan pipeline:
//! - **SampleBuffer**: the decoded reference channel of one recording
//! - **Decoder**: collaborator interface turning raw file bytes into a buffer
//! - **AnalysisConfig**: detector thresholds, merge gap and display sizing
//! - **time**: timestamp formatting for logs and playback readouts

pub mod buffer;
pub mod config;
pub mod decode;
pub mod error;
pub mod time;

pub use buffer::SampleBuffer;
pub use config::{AnalysisConfig, ClickParams, DisplayParams, LoudnessParams, SilenceParams};
pub use decode::{DecodeError, DecodeHandle, Decoder};
pub use error::{Error, Result};
pub use time::{format_clock, format_hms};

#[cfg(feature = "wav")]
pub use decode::WavDecoder;
