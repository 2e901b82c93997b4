//! # wavescan Analysis
//!
//! Offline analysis of a decoded recording.
//!
//! This crate provides:
//! - **Decimation**: min/max envelope per display column for waveform drawing
//! - **Silence detection**: long runs below an amplitude threshold
//! - **Loudness detection**: windowed RMS above a threshold
//! - **Click detection**: clipping and abrupt sample jumps
//! - **Region merging**: coalescing near-adjacent regions of one kind
//! - **Event log**: ordered, human-readable summary of the merged regions
//!
//! Detectors operate on raw `&[f32]` buffers and run to completion on the
//! whole recording.
//!
//! ## Example
//!
//! ```rust
//! use wavescan_analysis::{decimate, detect_silence, project, RegionKind, RegionSet, RegionSets};
//!
//! let samples: Vec<f32> = vec![0.0; 44100 * 2]; // 2 seconds of silence
//! let sample_rate = 44100.0;
//!
//! let geometry = decimate(&samples, 1200);
//! assert_eq!(geometry.len(), 1200);
//!
//! let raw = detect_silence(&samples, sample_rate, 0.01, 1.2).unwrap();
//! let sets = RegionSets {
//!     silence: RegionSet::from_raw(RegionKind::Silence, &raw, 0.2),
//!     ..Default::default()
//! };
//! let log = project(&sets);
//! assert_eq!(log[0].to_string(), "0:00:00 to 0:00:02 - Silence");
//! ```

pub mod click;
pub mod error;
pub mod log;
pub mod loudness;
pub mod region;
pub mod silence;
pub mod waveform;

mod handle;

pub use click::detect_clicks;
pub use error::{AnalysisError, Result};
pub use handle::{AnalysisHandle, AnalysisReport, DetectorWarning};
pub use log::{project, reason_label, LogEntry, NO_WARNINGS};
pub use loudness::detect_loud;
pub use region::{merge, Region, RegionKind, RegionSet, RegionSets};
pub use silence::detect_silence;
pub use waveform::{decimate, target_width, EnvelopeColumn, WaveformGeometry};
