//! WaveScan controller that owns the active session and its frame loop

use crate::analysis::{AnalysisHandle, LogEntry};
use crate::core::{DecodeHandle, Decoder, SampleBuffer};
use crate::session::{PlaybackEvent, Session};
use crate::view::{Frame, FrameScheduler, FrameTicket, TickOutcome};
use crate::Result;
use std::path::Path;
use std::time::Instant;

/// What the host should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EventResponse {
    pub outcome: TickOutcome,
    /// Newly scheduled frame, if playback just started a frame chain
    pub frame: Option<FrameTicket>,
}

/// Owns the decoder, the analysis configuration and at most one open
/// [`Session`].
///
/// Loading a new file replaces the previous session only after the new bytes
/// decoded successfully. Outstanding frame tickets from the previous session
/// are invalidated at that point, so a late completion never drives the new
/// session.
///
/// # Example
///
/// ```ignore
/// use wavescan::prelude::*;
///
/// let mut scan = WaveScan::builder().build()?;
/// scan.load_path("interview.wav")?;
///
/// let response = scan.handle_event(PlaybackEvent::Play);
/// let mut ticket = response.frame;
/// while let Some(t) = ticket {
///     scan.handle_event(PlaybackEvent::Clock { current_time: player.position() });
///     draw(scan.render());
///     ticket = scan.frame_completed(t);
/// }
/// ```
pub struct WaveScan {
    analysis: AnalysisHandle,
    decoder: Box<dyn Decoder>,
    session: Option<Session>,
    frames: FrameScheduler,
}

impl WaveScan {
    pub fn builder() -> crate::WaveScanBuilder {
        crate::WaveScanBuilder::default()
    }

    pub(crate) fn from_parts(analysis: AnalysisHandle, decoder: Box<dyn Decoder>) -> Self {
        Self {
            analysis,
            decoder,
            session: None,
            frames: FrameScheduler::new(),
        }
    }

    pub fn analysis(&self) -> &AnalysisHandle {
        &self.analysis
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Decode `bytes`, analyze them and make the result the active session.
    ///
    /// On a decode error the previous session stays open and untouched.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<&Session> {
        let buffer = {
            let started = Instant::now();
            let report_elapsed = move || {
                let elapsed_us = started.elapsed().as_micros() as u64;
                tracing::debug!(elapsed_us, "decode finished");
            };
            let handle = DecodeHandle::open(self.decoder.as_ref(), bytes);
            let handle = handle.on_release(report_elapsed);
            handle.decode().inspect_err(|e| {
                tracing::warn!(error = %e, bytes = bytes.len(), "decode failed");
            })?
        };

        Ok(self.install(buffer))
    }

    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<&Session> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "loading recording");
        self.load_bytes(&bytes)
    }

    /// Open a session over an already decoded buffer.
    pub fn load_buffer(&mut self, buffer: SampleBuffer) -> &Session {
        self.install(buffer)
    }

    fn install(&mut self, buffer: SampleBuffer) -> &Session {
        self.frames.cancel();
        self.session = None;

        let session = Session::analyze(buffer, &self.analysis);
        tracing::info!(
            duration = session.playback().duration,
            sample_rate = session.buffer().sample_rate(),
            regions = session.regions().all_regions().count(),
            "recording loaded"
        );
        for warning in session.warnings() {
            tracing::warn!(kind = %warning.kind, "{}", warning.message);
        }

        self.session.insert(session)
    }

    /// Feed a playback event to the active session.
    ///
    /// Starting playback schedules the first frame; stopping it cancels the
    /// chain. Without a session this is a no-op.
    pub fn handle_event(&mut self, event: PlaybackEvent) -> EventResponse {
        let Some(session) = self.session.take() else {
            return EventResponse::default();
        };

        let (session, outcome) = session.apply(event);
        let playing = session.playback().is_playing;
        self.session = Some(session);

        let frame = if playing {
            self.frames.request()
        } else {
            self.frames.cancel();
            None
        };

        EventResponse { outcome, frame }
    }

    /// Report that the host finished drawing `ticket`'s frame.
    ///
    /// Returns the next ticket while playback continues. Tickets issued before
    /// the last cancel or load are ignored.
    pub fn frame_completed(&mut self, ticket: FrameTicket) -> Option<FrameTicket> {
        let playing = self
            .session
            .as_ref()
            .is_some_and(|s| s.playback().is_playing);
        self.frames.complete(ticket, playing)
    }

    pub fn is_frame_pending(&self) -> bool {
        self.frames.is_pending()
    }

    pub fn render(&self) -> Option<Frame> {
        self.session.as_ref().map(Session::render)
    }

    /// Event log of the active session, empty when nothing is loaded.
    pub fn log(&self) -> &[LogEntry] {
        self.session.as_ref().map(Session::log).unwrap_or_default()
    }

    /// Release the active session and stop its frame chain.
    pub fn close(&mut self) {
        self.frames.cancel();
        if self.session.take().is_some() {
            tracing::debug!("session closed");
        }
    }
}
