// File: crates/texture-render-skia/src/renderer.rs
// Summary: texture_core::Renderer implementation drawing onto a Skia canvas.

use skia_safe as skia;
use texture_core::{Color, Point, Renderer, Stroke, TextRun};

use crate::text::TextShaper;

pub(crate) fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn path_through(points: &[Point]) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to((first.x as f32, first.y as f32));
        for p in rest {
            path.line_to((p.x as f32, p.y as f32));
        }
    }
    path
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width as f32);
    paint.set_color(to_skia(stroke.color));
    if stroke.is_dashed() {
        let intervals: Vec<f32> = stroke.dash.iter().map(|&d| d as f32).collect();
        paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }
    paint
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(color));
    paint
}

pub struct SkiaRenderer<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
    draw_labels: bool,
}

impl<'a> SkiaRenderer<'a> {
    /// `draw_labels = false` skips all text, which keeps pixel output independent of installed fonts.
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper, draw_labels: bool) -> Self {
        Self { canvas, shaper, draw_labels }
    }
}

impl Renderer for SkiaRenderer<'_> {
    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let mut path = path_through(points);
        path.close();
        self.canvas.draw_path(&path, &fill_paint(color));
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.canvas.draw_line(
            (from.x as f32, from.y as f32),
            (to.x as f32, to.y as f32),
            &stroke_paint(stroke),
        );
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: &Stroke) {
        self.canvas.draw_path(&path_through(points), &stroke_paint(stroke));
    }

    fn fill_text(&mut self, run: &TextRun) {
        if !self.draw_labels {
            return;
        }
        self.shaper.draw_run(self.canvas, run, to_skia(run.color));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.canvas.draw_circle((center.x as f32, center.y as f32), radius as f32, &fill_paint(color));
    }
}
