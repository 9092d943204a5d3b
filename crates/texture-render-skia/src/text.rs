// File: crates/texture-render-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; aligned, optionally rotated, baseline-anchored runs.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use texture_core::{TextAlign, TextRun};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Arial", "Helvetica", "Liberation Sans", "DejaVu Sans", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, self.fonts.clone());
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `run` with its baseline at `run.position`, aligned and rotated about that point.
    pub fn draw_run(&self, canvas: &skia::Canvas, run: &TextRun, color: skia::Color) {
        let size = run.size as f32;
        let mut p = self.layout(&run.text, size, color, run.bold);
        let width = p.longest_line();
        let dx = match run.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => -width / 2.0,
            TextAlign::Right => -width,
        };
        canvas.save();
        canvas.translate((run.position.x as f32, run.position.y as f32));
        if run.rotation != 0.0 {
            canvas.rotate(run.rotation.to_degrees() as f32, None);
        }
        // Paragraph draws from top-left; shift up by the baseline
        let baseline = p.alphabetic_baseline();
        p.paint(canvas, (dx, -baseline));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
