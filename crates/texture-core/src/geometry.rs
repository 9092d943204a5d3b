// File: crates/texture-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (points, segments, canvas insets).

/// Inset of the triangle from every surface edge, as a fraction of width/height.
pub const PADDING: f64 = 0.1;
/// Grid spacing as a fraction of the mean surface dimension.
pub const LINE_GAP_RATIO: f64 = 0.08;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Drawing-surface dimensions in device-independent pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl CanvasGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        if width != height {
            tracing::warn!(width, height, "non-square surface; triangle edges will not close exactly");
        }
        Self { width, height, padding: PADDING }
    }

    /// Spacing between consecutive 10% grid lines.
    #[inline]
    pub fn line_gap(&self) -> f64 {
        ((self.width + self.height) / 2.0) * LINE_GAP_RATIO
    }

    #[inline]
    pub fn inset_x(&self) -> f64 { self.width * self.padding }
    #[inline]
    pub fn inset_y(&self) -> f64 { self.height * self.padding }

    /// Y of the triangle base.
    #[inline]
    pub fn base_y(&self) -> f64 { self.height - self.inset_y() }

    pub fn apex(&self) -> Point { Point::new(self.width / 2.0, self.inset_y()) }
    pub fn bottom_left(&self) -> Point { Point::new(self.inset_x(), self.base_y()) }
    pub fn bottom_right(&self) -> Point { Point::new(self.width - self.inset_x(), self.base_y()) }

    /// Scale a (width, height) fraction pair to surface pixels.
    #[inline]
    pub fn scale(&self, (fx, fy): (f64, f64)) -> Point {
        Point::new(self.width * fx, self.height * fy)
    }
}
