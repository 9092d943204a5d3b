// File: crates/texture-core/src/scene.rs
// Summary: Recorded draw instructions that can be replayed against any renderer.

use crate::geometry::Point;
use crate::renderer::{Renderer, Stroke, TextRun};
use crate::theme::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillPolygon { points: Vec<Point>, color: Color },
    StrokeLine { from: Point, to: Point, stroke: Stroke },
    StrokePolyline { points: Vec<Point>, stroke: Stroke },
    FillText(TextRun),
    FillCircle { center: Point, radius: f64, color: Color },
}

impl DrawCommand {
    /// Every coordinate this command touches, in order.
    pub fn points(&self) -> Vec<Point> {
        match self {
            DrawCommand::FillPolygon { points, .. } | DrawCommand::StrokePolyline { points, .. } => points.clone(),
            DrawCommand::StrokeLine { from, to, .. } => vec![*from, *to],
            DrawCommand::FillText(run) => vec![run.position],
            DrawCommand::FillCircle { center, .. } => vec![*center],
        }
    }
}

/// Recording renderer: an ordered list of draw commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize { self.commands.len() }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Play the recorded commands against `target`.
    pub fn replay<R: Renderer + ?Sized>(&self, target: &mut R) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::FillPolygon { points, color } => target.fill_polygon(points, *color),
                DrawCommand::StrokeLine { from, to, stroke } => target.stroke_line(*from, *to, stroke),
                DrawCommand::StrokePolyline { points, stroke } => target.stroke_polyline(points, stroke),
                DrawCommand::FillText(run) => target.fill_text(run),
                DrawCommand::FillCircle { center, radius, color } => target.fill_circle(*center, *radius, *color),
            }
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillText(run) => Some(run),
            _ => None,
        })
    }
}

impl Renderer for Scene {
    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::FillPolygon { points: points.to_vec(), color });
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeLine { from, to, stroke: stroke.clone() });
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokePolyline { points: points.to_vec(), stroke: stroke.clone() });
    }

    fn fill_text(&mut self, run: &TextRun) {
        self.commands.push(DrawCommand::FillText(run.clone()));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }
}
