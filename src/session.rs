//! One open recording and its derived state.
//!
//! A [`Session`] bundles the decoded buffer with everything computed from it
//! (geometry, merged regions, event log) and the playback/viewport state that
//! changes while it is on screen. Playback changes go through
//! [`Session::apply`], a by-value transition that returns the updated session
//! together with what the host should do next.

use crate::analysis::{
    AnalysisHandle, AnalysisReport, DetectorWarning, LogEntry, RegionSets, WaveformGeometry,
};
use crate::core::SampleBuffer;
use crate::view::{
    on_seek, on_tick, render_frame, seek_time, Frame, FrameSize, PlaybackState, TickOutcome,
    Viewport,
};
use std::sync::Arc;

/// Inputs that move the playhead or change what is visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackEvent {
    Play,
    Pause,
    TogglePlayPause,
    /// Position reported by the external playback clock
    Clock { current_time: f64 },
    /// Jump to an absolute time
    Seek(f64),
    /// Pointer click on the rendering, `local_x` within the visible part
    PointerSeek { local_x: f32 },
    /// Playback reached the end; the clock rewinds to 0
    Ended,
    /// The visible part of the viewport changed width
    Resize { visible_width: f32 },
}

#[derive(Debug, Clone)]
pub struct Session {
    buffer: Arc<SampleBuffer>,
    report: AnalysisReport,
    playback: PlaybackState,
    viewport: Viewport,
    frame_size: FrameSize,
}

impl Session {
    /// Analyze `buffer` and open a paused session at time 0.
    ///
    /// The rendering is as wide as the decimated geometry and as tall as the
    /// configured display height; the viewport initially shows all of it.
    pub fn analyze(buffer: SampleBuffer, analysis: &AnalysisHandle) -> Self {
        let report = analysis.analyze(&buffer);
        let width = report.geometry.len() as f32;
        let height = analysis.config().display.height;

        tracing::debug!(
            duration = buffer.duration(),
            columns = report.geometry.len(),
            log_entries = report.log.len(),
            warnings = report.warnings.len(),
            "session analyzed"
        );

        Self {
            playback: PlaybackState::new(buffer.duration()),
            buffer: Arc::new(buffer),
            report,
            viewport: Viewport::new(width, width),
            frame_size: FrameSize::new(width, height),
        }
    }

    /// Read-only view of the decoded buffer.
    pub fn buffer(&self) -> &Arc<SampleBuffer> {
        &self.buffer
    }

    pub fn geometry(&self) -> &WaveformGeometry {
        &self.report.geometry
    }

    pub fn regions(&self) -> &RegionSets {
        &self.report.regions
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.report.log
    }

    pub fn warnings(&self) -> &[DetectorWarning] {
        &self.report.warnings
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn frame_size(&self) -> FrameSize {
        self.frame_size
    }

    /// Build the current frame from scratch.
    pub fn render(&self) -> Frame {
        render_frame(
            &self.report.geometry,
            &self.report.regions,
            &self.playback,
            self.frame_size,
        )
    }

    /// Apply one event, returning the updated session and the host's to-do.
    ///
    /// Clock ticks only request a render while playing; every other event
    /// redraws once so seeks and pauses show up immediately. Any scroll change
    /// in the outcome has already been written to the returned viewport.
    pub fn apply(mut self, event: PlaybackEvent) -> (Self, TickOutcome) {
        let duration = self.playback.duration;
        let has_duration = duration.is_finite() && duration > 0.0;

        let outcome = match event {
            PlaybackEvent::Play => {
                self.playback.is_playing = has_duration;
                on_seek(&self.playback, &self.viewport)
            }
            PlaybackEvent::Pause => {
                self.playback.is_playing = false;
                on_seek(&self.playback, &self.viewport)
            }
            PlaybackEvent::TogglePlayPause => {
                self.playback.is_playing = !self.playback.is_playing && has_duration;
                on_seek(&self.playback, &self.viewport)
            }
            PlaybackEvent::Clock { current_time } => {
                self.playback.current_time = clamp_time(current_time, duration);
                on_tick(&self.playback, &self.viewport)
            }
            PlaybackEvent::Seek(time) => {
                self.playback.current_time = clamp_time(time, duration);
                on_seek(&self.playback, &self.viewport)
            }
            PlaybackEvent::PointerSeek { local_x } => {
                let Some(time) = seek_time(local_x, &self.viewport, duration) else {
                    return (self, TickOutcome::default());
                };
                self.playback.current_time = time;
                on_seek(&self.playback, &self.viewport)
            }
            PlaybackEvent::Ended => {
                self.playback.is_playing = false;
                self.playback.current_time = 0.0;
                on_seek(&self.playback, &self.viewport)
            }
            PlaybackEvent::Resize { visible_width } => {
                self.viewport.visible_width = visible_width.max(0.0);
                self.viewport.scroll_offset =
                    self.viewport.scroll_offset.min(self.viewport.max_offset());
                on_seek(&self.playback, &self.viewport)
            }
        };

        if let Some(offset) = outcome.scroll_offset {
            self.viewport.scroll_offset = offset;
        }

        (self, outcome)
    }
}

fn clamp_time(time: f64, duration: f64) -> f64 {
    if !time.is_finite() || duration <= 0.0 {
        return 0.0;
    }
    time.clamp(0.0, duration)
}
