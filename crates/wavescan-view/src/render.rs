//! Frame rendering.
//!
//! Produces a display list rather than pixels: hosts replay the commands on
//! whatever canvas they own. Each call rebuilds the whole frame.

use crate::color::{self, Rgba};
use crate::playback::{playhead_x, PlaybackState};
use std::fmt::Write as _;
use wavescan_analysis::{RegionKind, RegionSets, WaveformGeometry};

const PLAYHEAD_LINE_WIDTH: f32 = 3.0;
const PLAYHEAD_RADIUS: f32 = 8.0;
const WAVEFORM_STROKE_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Pixel dimensions of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSize {
    pub width: f32,
    pub height: f32,
}

impl FrameSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    /// Closed path, filled then stroked
    Polygon {
        points: Vec<Point>,
        fill: Rgba,
        stroke: Rgba,
        stroke_width: f32,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        width: f32,
    },
    Circle {
        center: Point,
        radius: f32,
        color: Rgba,
    },
}

/// One complete repaint.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub size: FrameSize,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Playhead x, if the frame has one.
    pub fn playhead(&self) -> Option<f32> {
        self.commands.iter().find_map(|command| match command {
            DrawCommand::Circle { center, .. } => Some(center.x),
            _ => None,
        })
    }

    /// Serialize the display list as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.size.width,
            h = self.size.height
        );
        for command in &self.commands {
            let _ = match command {
                DrawCommand::FillRect { rect, color } => write!(
                    svg,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    color.to_css()
                ),
                DrawCommand::Polygon {
                    points,
                    fill,
                    stroke,
                    stroke_width,
                } => {
                    let path: Vec<String> =
                        points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
                    write!(
                        svg,
                        r#"<polygon points="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                        path.join(" "),
                        fill.to_css(),
                        stroke.to_css(),
                        stroke_width
                    )
                }
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    width,
                } => write!(
                    svg,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    color.to_css(),
                    width
                ),
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => write!(
                    svg,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                    center.x,
                    center.y,
                    radius,
                    color.to_css()
                ),
            };
        }
        svg.push_str("</svg>");
        svg
    }
}

/// Overlay colour for a region kind.
pub fn region_color(kind: RegionKind) -> Rgba {
    match kind {
        RegionKind::Silence => color::SILENCE_OVERLAY,
        RegionKind::Loud => color::LOUD_OVERLAY,
        RegionKind::Click => color::CLICK_OVERLAY,
    }
}

/// Build the display list for one frame.
///
/// Draw order: background, waveform silhouette (min envelope left to right,
/// max envelope back), one overlay per merged region, then the progress line
/// and playhead. Regions and playhead are skipped when the duration is zero.
pub fn render_frame(
    geometry: &WaveformGeometry,
    regions: &RegionSets,
    playback: &PlaybackState,
    size: FrameSize,
) -> Frame {
    let mut commands = Vec::with_capacity(3 + regions.all_regions().count());

    commands.push(DrawCommand::FillRect {
        rect: Rect {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        },
        color: color::BACKGROUND,
    });

    if !geometry.is_empty() {
        commands.push(waveform_polygon(geometry, size));
    }

    let duration = playback.duration;
    if duration.is_finite() && duration > 0.0 {
        for region in regions.all_regions() {
            let x0 = (region.start_time / duration * size.width as f64) as f32;
            let x1 = (region.end_time / duration * size.width as f64) as f32;
            commands.push(DrawCommand::FillRect {
                rect: Rect {
                    x: x0,
                    y: 0.0,
                    width: (x1 - x0).max(0.0),
                    height: size.height,
                },
                color: region_color(region.kind),
            });
        }
    }

    if let Some(x) = playhead_x(playback.current_time, duration, size.width) {
        commands.push(DrawCommand::Line {
            from: Point::new(x, 0.0),
            to: Point::new(x, size.height),
            color: color::PLAYHEAD,
            width: PLAYHEAD_LINE_WIDTH,
        });
        commands.push(DrawCommand::Circle {
            center: Point::new(x, size.height / 2.0),
            radius: PLAYHEAD_RADIUS,
            color: color::PLAYHEAD,
        });
    }

    Frame { size, commands }
}

fn waveform_polygon(geometry: &WaveformGeometry, size: FrameSize) -> DrawCommand {
    let amp = size.height / 2.0;
    let x_scale = size.width / geometry.len() as f32;

    let mut points = Vec::with_capacity(geometry.len() * 2);
    for (i, column) in geometry.iter().enumerate() {
        points.push(Point::new(i as f32 * x_scale, (1.0 + column.min) * amp));
    }
    for (i, column) in geometry.iter().enumerate().rev() {
        points.push(Point::new(i as f32 * x_scale, (1.0 + column.max) * amp));
    }

    DrawCommand::Polygon {
        points,
        fill: color::WAVEFORM_FILL,
        stroke: color::WAVEFORM_STROKE,
        stroke_width: WAVEFORM_STROKE_WIDTH,
    }
}
