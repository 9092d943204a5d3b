// File: crates/texture-core/src/svg.rs
// Summary: SVG renderer producing a standalone document string.

use std::fmt::Write as _;
use std::path::Path;

use crate::config::TriangleConfig;
use crate::geometry::Point;
use crate::renderer::{Renderer, Stroke, TextAlign, TextRun};
use crate::theme::Color;

const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";

pub struct SvgRenderer {
    width: f64,
    height: f64,
    draw_labels: bool,
    body: String,
}

impl SvgRenderer {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, draw_labels: true, body: String::new() }
    }

    /// Surface size and label toggle taken from `cfg`.
    pub fn from_config(cfg: &TriangleConfig) -> Self {
        Self::new(f64::from(cfg.width), f64::from(cfg.height)).with_draw_labels(cfg.draw_labels)
    }

    /// `false` drops every text element.
    pub fn with_draw_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }

    /// Finish the document.
    pub fn into_string(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }

    pub fn write_to(self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        tracing::debug!(path = %path.display(), "writing svg");
        std::fs::write(path, self.into_string())
    }
}

fn points_attr(points: &[Point]) -> String {
    points.iter().map(|p| format!("{},{}", p.x, p.y)).collect::<Vec<_>>().join(" ")
}

fn paint_attrs(attr: &str, color: Color) -> String {
    if color.a == 255 {
        format!("{attr}=\"{}\"", color.to_hex())
    } else {
        format!("{attr}=\"{}\" {attr}-opacity=\"{:.3}\"", color.to_hex(), color.opacity())
    }
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut s = format!("{} stroke-width=\"{}\"", paint_attrs("stroke", stroke.color), stroke.width);
    if stroke.is_dashed() {
        let dash = stroke.dash.iter().map(|d| d.to_string()).collect::<Vec<_>>().join(",");
        let _ = write!(s, " stroke-dasharray=\"{dash}\"");
    }
    s
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

impl Renderer for SvgRenderer {
    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let _ = writeln!(self.body, "  <polygon points=\"{}\" {} stroke=\"none\"/>", points_attr(points), paint_attrs("fill", color));
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let _ = writeln!(
            self.body,
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>",
            from.x, from.y, to.x, to.y, stroke_attrs(stroke)
        );
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: &Stroke) {
        let _ = writeln!(
            self.body,
            "  <polyline points=\"{}\" fill=\"none\" stroke-linejoin=\"miter\" {}/>",
            points_attr(points),
            stroke_attrs(stroke)
        );
    }

    fn fill_text(&mut self, run: &TextRun) {
        if !self.draw_labels {
            return;
        }
        let anchor = match run.align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        let weight = if run.bold { " font-weight=\"bold\"" } else { "" };
        let transform = if run.rotation != 0.0 {
            format!(" transform=\"rotate({} {} {})\"", run.rotation.to_degrees(), run.position.x, run.position.y)
        } else {
            String::new()
        };
        let _ = writeln!(
            self.body,
            "  <text x=\"{}\" y=\"{}\" font-family=\"{FONT_FAMILY}\" font-size=\"{}\"{weight} text-anchor=\"{anchor}\" {}{transform}>{}</text>",
            run.position.x,
            run.position.y,
            run.size,
            paint_attrs("fill", run.color),
            escape(&run.text)
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let _ = writeln!(
            self.body,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>",
            center.x, center.y, radius, paint_attrs("fill", color)
        );
    }
}
