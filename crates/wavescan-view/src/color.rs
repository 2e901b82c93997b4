//! Colours used by the renderer.

/// 8-bit RGB with floating alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba(...)` notation.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub const BACKGROUND: Rgba = Rgba::rgb(0xf4, 0xf1, 0xff);
pub const WAVEFORM_STROKE: Rgba = Rgba::rgb(0xb4, 0xa5, 0xd6);
pub const WAVEFORM_FILL: Rgba = Rgba::rgba(180, 165, 214, 0.2);
pub const PLAYHEAD: Rgba = Rgba::rgb(0x7c, 0x3a, 0xed);

pub const SILENCE_OVERLAY: Rgba = Rgba::rgba(100, 149, 237, 0.25);
pub const LOUD_OVERLAY: Rgba = Rgba::rgba(239, 68, 68, 0.25);
pub const CLICK_OVERLAY: Rgba = Rgba::rgba(245, 158, 11, 0.35);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_css() {
        assert_eq!(PLAYHEAD.to_css(), "rgba(124, 58, 237, 1)");
        assert_eq!(WAVEFORM_FILL.to_css(), "rgba(180, 165, 214, 0.2)");
    }
}
