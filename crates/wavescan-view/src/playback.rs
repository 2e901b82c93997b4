//! Playhead tracking and viewport auto-scroll.

use wavescan_core::format_clock;

/// Smallest scroll change worth writing to the viewport.
pub const SCROLL_EPSILON: f32 = 1.0;

/// Position of the external playback clock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackState {
    pub current_time: f64,
    pub duration: f64,
    pub is_playing: bool,
}

impl PlaybackState {
    /// Paused at the start of a recording of `duration` seconds.
    pub fn new(duration: f64) -> Self {
        Self {
            current_time: 0.0,
            duration,
            is_playing: false,
        }
    }

    /// `current_time / duration` clamped to [0, 1]; `None` without a duration.
    pub fn progress(&self) -> Option<f64> {
        if self.duration.is_finite() && self.duration > 0.0 {
            Some((self.current_time / self.duration).clamp(0.0, 1.0))
        } else {
            None
        }
    }

    /// Elapsed and total time as `M:SS`.
    pub fn readout(&self) -> (String, String) {
        (format_clock(self.current_time), format_clock(self.duration))
    }
}

/// Horizontally scrollable surface hosting the rendering.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Width of the visible part
    pub visible_width: f32,
    /// Width of the whole rendering
    pub scroll_width: f32,
    pub scroll_offset: f32,
}

impl Viewport {
    pub fn new(visible_width: f32, scroll_width: f32) -> Self {
        Self {
            visible_width,
            scroll_width,
            scroll_offset: 0.0,
        }
    }

    pub fn is_scrollable(&self) -> bool {
        self.visible_width < self.scroll_width
    }

    pub fn max_offset(&self) -> f32 {
        (self.scroll_width - self.visible_width).max(0.0)
    }
}

/// What the host should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickOutcome {
    pub render_needed: bool,
    /// New scroll offset, when it moved by more than [`SCROLL_EPSILON`]
    pub scroll_offset: Option<f32>,
}

/// Playhead x for a surface `width` wide; `None` when the duration is zero.
pub fn playhead_x(current_time: f64, duration: f64, width: f32) -> Option<f32> {
    let progress = PlaybackState {
        current_time,
        duration,
        is_playing: false,
    }
    .progress()?;
    Some((progress * width as f64) as f32)
}

/// Offset that centers `x` in the viewport, if it differs enough from the
/// current one.
fn follow_offset(x: f32, viewport: &Viewport) -> Option<f32> {
    if !viewport.is_scrollable() {
        return None;
    }
    let target = (x - viewport.visible_width / 2.0).clamp(0.0, viewport.max_offset());
    if (target - viewport.scroll_offset).abs() > SCROLL_EPSILON {
        Some(target)
    } else {
        None
    }
}

fn sync(playback: &PlaybackState, viewport: &Viewport, render_needed: bool) -> TickOutcome {
    let width = viewport.scroll_width;
    let scroll_offset = playhead_x(playback.current_time, playback.duration, width)
        .and_then(|x| follow_offset(x, viewport));
    TickOutcome {
        render_needed,
        scroll_offset,
    }
}

/// Per-frame update while the clock runs.
///
/// Requests a render only while playing; keeps the playhead centered when the
/// rendering is wider than the viewport.
pub fn on_tick(playback: &PlaybackState, viewport: &Viewport) -> TickOutcome {
    sync(playback, viewport, playback.is_playing)
}

/// One-shot update after a seek; always redraws, even while paused.
pub fn on_seek(playback: &PlaybackState, viewport: &Viewport) -> TickOutcome {
    sync(playback, viewport, true)
}

/// Time under a pointer at `local_x` within the visible part of the viewport.
///
/// `(local_x + scroll_offset) / scroll_width * duration`, clamped to
/// `[0, duration]`. `None` when there is nothing to seek in.
pub fn seek_time(local_x: f32, viewport: &Viewport, duration: f64) -> Option<f64> {
    if !(duration.is_finite() && duration > 0.0) || viewport.scroll_width <= 0.0 {
        return None;
    }
    let fraction = (local_x + viewport.scroll_offset) as f64 / viewport.scroll_width as f64;
    Some((fraction * duration).clamp(0.0, duration))
}
