// File: crates/texture-core/src/renderer.rs
// Summary: Drawing-surface capability trait and the styles passed through it.

use crate::geometry::Point;
use crate::theme::Color;

/// Dash pattern of the guide lines (on, off) in pixels.
pub const GUIDE_DASH: [f64; 2] = [5.0, 3.0];

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// Empty means solid.
    pub dash: Vec<f64>,
}

impl Stroke {
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width, dash: Vec::new() }
    }

    pub fn dashed(color: Color, width: f64, dash: &[f64]) -> Self {
        Self { color, width, dash: dash.to_vec() }
    }

    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// A single line of text anchored at `position` (baseline), optionally rotated about it.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub position: Point,
    pub align: TextAlign,
    /// Clockwise rotation in radians around `position`.
    pub rotation: f64,
    pub size: f64,
    pub bold: bool,
    pub color: Color,
}

/// Target that the triangle's draw instructions are played against.
///
/// Coordinates are surface pixels with the origin at the top-left and y growing down.
pub trait Renderer {
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Open polyline through `points`. Backends that can join segments into one
    /// path (continuous dashes) should override this.
    fn stroke_polyline(&mut self, points: &[Point], stroke: &Stroke) {
        for pair in points.windows(2) {
            self.stroke_line(pair[0], pair[1], stroke);
        }
    }

    fn fill_text(&mut self, run: &TextRun);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn fill_polygon(&mut self, points: &[Point], color: Color) { (**self).fill_polygon(points, color) }
    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke) { (**self).stroke_line(from, to, stroke) }
    fn stroke_polyline(&mut self, points: &[Point], stroke: &Stroke) { (**self).stroke_polyline(points, stroke) }
    fn fill_text(&mut self, run: &TextRun) { (**self).fill_text(run) }
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) { (**self).fill_circle(center, radius, color) }
}
