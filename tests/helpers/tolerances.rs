//! Tolerance constants for analysis tests.

/// Floating point rounding errors on times derived from sample indices.
pub const TIME_EPSILON: f64 = 1e-6;

/// One loudness window at the default 50 ms. Loud regions may start or end up
/// to this far from the signal edge.
pub const LOUDNESS_WINDOW_SLACK: f64 = 0.05;

/// Pixel tolerance for playhead and scroll positions.
pub const PIXEL_EPSILON: f32 = 1e-3;
