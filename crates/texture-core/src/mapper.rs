// File: crates/texture-core/src/mapper.rs
// Summary: Percent-to-canvas coordinate mapping for grid, boundary, guide lines and sample point.

use crate::boundary::class_boundary_polygon;
use crate::composition::{Component, Composition};
use crate::geometry::{CanvasGeometry, Point, Segment};

/// Grid lines per axis: 0%, 10%, ..., 100%.
pub const LINES_PER_AXIS: usize = 11;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub axis: Component,
    /// Percentage of `axis` constant along this line (0, 10, ..., 100).
    pub percent: u32,
    pub segment: Segment,
}

/// Guide line from an axis to the meeting point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideLine {
    pub axis: Component,
    pub segment: Segment,
}

/// Maps percentages to surface coordinates for one surface size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureCoordinateMapper {
    geometry: CanvasGeometry,
}

impl TextureCoordinateMapper {
    pub fn new(geometry: CanvasGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &CanvasGeometry {
        &self.geometry
    }

    /// X where the sand grid/guide line for line index `k` meets the base.
    #[inline]
    fn sand_base_x(&self, k: f64) -> f64 {
        let g = &self.geometry;
        g.width - (g.inset_x() + g.line_gap() * k)
    }

    /// Y of the clay grid/guide line for line index `k`.
    #[inline]
    fn clay_y(&self, k: f64) -> f64 {
        let g = &self.geometry;
        g.height - (g.inset_y() + g.line_gap() * k)
    }

    /// X where the silt guide line for line index `k` meets the apex row.
    #[inline]
    fn silt_top_x(&self, k: f64) -> f64 {
        let g = &self.geometry;
        g.width / 2.0 + g.line_gap() * k
    }

    /// 33 grid lines: clay, then sand, then silt; 11 per axis ordered by percentage.
    pub fn grid_lines(&self) -> Vec<GridLine> {
        let g = &self.geometry;
        let gap = g.line_gap();
        let mut out = Vec::with_capacity(3 * LINES_PER_AXIS);

        for i in 0..LINES_PER_AXIS {
            let k = i as f64;
            let y = self.clay_y(k);
            out.push(GridLine {
                axis: Component::Clay,
                percent: (i * 10) as u32,
                segment: Segment::new(Point::new(g.inset_x(), y), Point::new(g.width - g.inset_x(), y)),
            });
        }
        for i in 0..LINES_PER_AXIS {
            let k = i as f64;
            out.push(GridLine {
                axis: Component::Sand,
                percent: (i * 10) as u32,
                segment: Segment::new(
                    Point::new(self.sand_base_x(k), g.base_y()),
                    Point::new(g.width / 2.0 - gap * k, g.inset_y()),
                ),
            });
        }
        for i in 0..LINES_PER_AXIS {
            let k = i as f64;
            out.push(GridLine {
                axis: Component::Silt,
                percent: (i * 10) as u32,
                segment: Segment::new(
                    Point::new(g.inset_x() + gap * k, g.base_y()),
                    Point::new(self.silt_top_x(k), g.inset_y()),
                ),
            });
        }
        out
    }

    /// Where the three guide lines of `c` intersect.
    pub fn meeting_point(&self, c: &Composition) -> Point {
        let g = &self.geometry;
        let sand = c.line_index(Component::Sand);
        let silt = c.line_index(Component::Silt);
        let clay = c.line_index(Component::Clay);
        Point::new(
            g.width / 2.0 - ((sand - silt) * g.line_gap()) / 2.0,
            self.clay_y(clay),
        )
    }

    /// Sand, silt and clay guide lines, each ending at the meeting point.
    pub fn guide_lines(&self, c: &Composition) -> [GuideLine; 3] {
        let g = &self.geometry;
        let meet = self.meeting_point(c);
        let sand = Point::new(self.sand_base_x(c.line_index(Component::Sand)), g.base_y());
        let silt = Point::new(self.silt_top_x(c.line_index(Component::Silt)), g.inset_y());
        let clay = Point::new(g.inset_x(), self.clay_y(c.line_index(Component::Clay)));
        [
            GuideLine { axis: Component::Sand, segment: Segment::new(sand, meet) },
            GuideLine { axis: Component::Silt, segment: Segment::new(silt, meet) },
            GuideLine { axis: Component::Clay, segment: Segment::new(clay, meet) },
        ]
    }

    /// Boundary strokes scaled to this surface.
    pub fn class_boundary(&self) -> Vec<Vec<Point>> {
        class_boundary_polygon()
            .iter()
            .map(|stroke| stroke.iter().map(|&f| self.geometry.scale(f)).collect())
            .collect()
    }

    /// Mask covering the surface outside the triangle.
    ///
    /// Outer rectangle and triangle run in opposite directions joined by a slit
    /// at the apex, so the triangle is a hole under either fill rule.
    pub fn outside_mask(&self) -> Vec<Point> {
        let g = &self.geometry;
        let (w, h) = (g.width, g.height);
        vec![
            Point::new(0.0, 0.0),
            Point::new(w / 2.0, 0.0),
            g.apex(),
            g.bottom_left(),
            g.bottom_right(),
            g.apex(),
            Point::new(w / 2.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, h),
            Point::new(0.0, h),
        ]
    }

    /// Radius of the plotted sample dot.
    pub fn point_radius(&self) -> f64 {
        self.geometry.width * 0.005
    }
}
