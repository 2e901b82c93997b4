//! # WaveScan - Waveform Review Tool
//!
//! Loads a recording, draws its waveform and flags the stretches a reviewer
//! should listen to: long silences, sustained loud passages and clicks.
//!
//! ## Architecture
//!
//! WaveScan is an umbrella crate that coordinates:
//! - **wavescan-core** - Sample buffer, decoder interface, configuration, time formatting
//! - **wavescan-analysis** - Decimation, silence/loudness/click detection, merging, event log
//! - **wavescan-view** - Frame rendering, playhead tracking, viewport auto-scroll, frame scheduling
//!
//! ## Quick Start
//!
//! ```ignore
//! use wavescan::prelude::*;
//!
//! let mut scan = WaveScan::builder().build()?;
//! scan.load_path("interview.wav")?;
//!
//! for entry in scan.log() {
//!     println!("{entry}");
//! }
//!
//! scan.handle_event(PlaybackEvent::Seek(12.5));
//! let svg = scan.render().map(|frame| frame.to_svg());
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - WAV decoding
//! - `wav` - WAV/PCM decoding through hound
//! - `serialization` - Serde derives on configs, regions and log entries

/// Re-export of wavescan-core for direct access
pub use wavescan_core as core;

/// Re-export of wavescan-analysis
pub use wavescan_analysis as analysis;

/// Re-export of wavescan-view
pub use wavescan_view as view;

pub use wavescan_analysis::{LogEntry, Region, RegionKind, RegionSets, WaveformGeometry};
pub use wavescan_core::{AnalysisConfig, DecodeError, Decoder, SampleBuffer};
pub use wavescan_view::{Frame, FrameTicket, TickOutcome};

pub mod error;
pub use error::{Error, Result};

pub mod session;
pub use session::{PlaybackEvent, Session};

mod builder;
mod engine;

pub use builder::WaveScanBuilder;
pub use engine::{EventResponse, WaveScan};

/// Convenience prelude for common imports
pub mod prelude {
    // Main controller
    pub use crate::{EventResponse, WaveScan, WaveScanBuilder};

    // Session and playback
    pub use crate::session::{PlaybackEvent, Session};

    // Configuration and decoding
    pub use crate::core::{AnalysisConfig, Decoder, SampleBuffer};

    // Analysis results
    pub use crate::analysis::{LogEntry, Region, RegionKind};

    // Rendering
    pub use crate::view::{DrawCommand, Frame};
}
