//! # wavescan View
//!
//! Turns analysis results and playback state into something a host can draw.
//!
//! - [`render_frame`] builds a display list ([`Frame`]) for one repaint:
//!   background, waveform silhouette, region overlays, playhead
//! - [`on_tick`] keeps the playhead visible inside a scrollable [`Viewport`]
//! - [`FrameScheduler`] chains one frame request at a time while playing and
//!   can be canceled at any point
//!
//! Nothing here owns a window or a clock; hosts feed in state and paint the
//! returned commands.

pub mod color;
pub mod playback;
pub mod render;
pub mod scheduler;

pub use color::Rgba;
pub use playback::{
    on_seek, on_tick, playhead_x, seek_time, PlaybackState, TickOutcome, Viewport, SCROLL_EPSILON,
};
pub use render::{region_color, render_frame, DrawCommand, Frame, FrameSize, Point, Rect};
pub use scheduler::{FrameScheduler, FrameTicket};
