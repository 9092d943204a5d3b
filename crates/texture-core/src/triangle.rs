// File: crates/texture-core/src/triangle.rs
// Summary: TexturalTriangle struct and the ordered draw pipeline played against a Renderer.

use crate::composition::Composition;
use crate::error::InvalidComposition;
use crate::geometry::{CanvasGeometry, Point};
use crate::labels::{LabelSet, Language};
use crate::layout;
use crate::mapper::TextureCoordinateMapper;
use crate::renderer::{Renderer, Stroke, GUIDE_DASH};
use crate::scene::Scene;
use crate::theme::Theme;

pub struct TexturalTriangle {
    labels: LabelSet,
    pub theme: Theme,
}

impl TexturalTriangle {
    pub fn new() -> Self {
        Self::with_language(Language::En)
    }

    pub fn with_language(language: Language) -> Self {
        Self::with_labels(LabelSet::for_language(language).clone())
    }

    /// Use a caller-supplied label table, e.g. one loaded from config.
    pub fn with_labels(labels: LabelSet) -> Self {
        Self { labels, theme: Theme::default() }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Replace the whole label set; geometry of later draws is unaffected.
    pub fn set_language(&mut self, language: Language) {
        self.set_labels(LabelSet::for_language(language).clone());
    }

    pub fn set_labels(&mut self, labels: LabelSet) {
        self.labels = labels;
    }

    pub fn language(&self) -> Language {
        self.labels.language
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Draw the triangle, plus guide lines and the meeting point when `sample` is given.
    pub fn draw<R: Renderer + ?Sized>(
        &self,
        geometry: &CanvasGeometry,
        sample: Option<&Composition>,
        target: &mut R,
    ) {
        let mapper = TextureCoordinateMapper::new(*geometry);
        let theme = &self.theme;
        let (w, h) = (geometry.width, geometry.height);
        tracing::debug!(width = w, height = h, language = %self.language(), sample = ?sample, "drawing triangle");

        // Background
        target.fill_polygon(
            &[Point::new(0.0, 0.0), Point::new(w, 0.0), Point::new(w, h), Point::new(0.0, h)],
            theme.background,
        );

        // Grid
        for line in mapper.grid_lines() {
            let stroke = Stroke::solid(theme.axis(line.axis), 1.0);
            target.stroke_line(line.segment.from, line.segment.to, &stroke);
        }

        // Class borders and names
        let border = Stroke::solid(theme.triangle, w * 0.003);
        for stroke in mapper.class_boundary() {
            target.stroke_polyline(&stroke, &border);
        }
        for run in layout::class_labels(geometry, &self.labels, theme) {
            target.fill_text(&run);
        }

        if let Some(sample) = sample {
            let guide = Stroke::dashed(theme.guide, w * 0.003, &GUIDE_DASH);
            for line in mapper.guide_lines(sample) {
                target.stroke_line(line.segment.from, line.segment.to, &guide);
            }
            target.fill_circle(mapper.meeting_point(sample), mapper.point_radius(), theme.guide);
        }

        // Mask everything outside the triangle, then outline it
        let mut mask = mapper.outside_mask();
        target.fill_polygon(&mask, theme.background);
        mask.push(mask[0]);
        target.stroke_polyline(&mask, &Stroke::solid(theme.triangle, w * 0.01));

        for run in layout::tick_labels(geometry, theme) {
            target.fill_text(&run);
        }
        for run in layout::axis_titles(geometry, &self.labels, theme) {
            target.fill_text(&run);
        }
    }

    /// Validate the percentages, then draw. Nothing is drawn when validation fails.
    pub fn draw_with_values<R: Renderer + ?Sized>(
        &self,
        geometry: &CanvasGeometry,
        silt: f64,
        sand: f64,
        clay: f64,
        target: &mut R,
    ) -> Result<Composition, InvalidComposition> {
        let sample = Composition::new(silt, sand, clay)?;
        self.draw(geometry, Some(&sample), target);
        Ok(sample)
    }

    /// Record the draw into a [`Scene`].
    pub fn scene(&self, geometry: &CanvasGeometry, sample: Option<&Composition>) -> Scene {
        let mut scene = Scene::new();
        self.draw(geometry, sample, &mut scene);
        scene
    }
}

impl Default for TexturalTriangle {
    fn default() -> Self {
        Self::new()
    }
}
