// File: crates/texture-core/src/layout.rs
// Summary: Placement of class labels, tick values and axis titles.

use std::f64::consts::PI;

use crate::composition::Component;
use crate::geometry::{CanvasGeometry, Point};
use crate::labels::{LabelSet, TextureClass};
use crate::mapper::LINES_PER_AXIS;
use crate::renderer::{TextAlign, TextRun};
use crate::theme::Theme;

/// Horizontal gap in pixels between the clay/silt edges and their tick values.
const TICK_OFFSET_PX: f64 = 10.0;
/// Vertical distance between stacked words, as a fraction of height.
const STACK_STEP: f64 = 0.025;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Placement {
    Single,
    /// One word per line.
    Stacked,
    Rotated(f64),
}

/// Anchor of each class label as a (width, height) fraction.
const CLASS_ANCHORS: [(TextureClass, (f64, f64), Placement); 13] = [
    (TextureClass::VeryClayey, (0.50, 0.31), Placement::Stacked),
    (TextureClass::Clay, (0.50, 0.51), Placement::Single),
    (TextureClass::SandyClay, (0.32, 0.57), Placement::Stacked),
    (TextureClass::SiltyClay, (0.66, 0.53), Placement::Stacked),
    (TextureClass::ClayLoam, (0.51, 0.64), Placement::Single),
    (TextureClass::SiltyClayLoam, (0.68, 0.62), Placement::Stacked),
    (TextureClass::SandyClayLoam, (0.31, 0.67), Placement::Stacked),
    (TextureClass::Sand, (0.155, 0.88), Placement::Single),
    (TextureClass::LoamySand, (0.21, 0.85), Placement::Rotated(PI / 5.0)),
    (TextureClass::SandyLoam, (0.32, 0.815), Placement::Single),
    (TextureClass::Loam, (0.50, 0.78), Placement::Single),
    (TextureClass::SiltLoam, (0.68, 0.80), Placement::Single),
    (TextureClass::Silt, (0.815, 0.87), Placement::Single),
];

pub fn class_label_size(g: &CanvasGeometry) -> f64 { g.width * 0.023 }
pub fn tick_size(g: &CanvasGeometry) -> f64 { g.width * 0.025 }
pub fn axis_title_size(g: &CanvasGeometry) -> f64 { g.width / 25.0 }

/// Text runs naming every texture class region.
pub fn class_labels(g: &CanvasGeometry, labels: &LabelSet, theme: &Theme) -> Vec<TextRun> {
    let size = class_label_size(g);
    let run = |text: &str, position: Point, rotation: f64| TextRun {
        text: text.to_string(),
        position,
        align: TextAlign::Center,
        rotation,
        size,
        bold: true,
        color: theme.text,
    };

    let mut out = Vec::new();
    for (class, anchor, placement) in CLASS_ANCHORS {
        let text = labels.class(class);
        let at = g.scale(anchor);
        match placement {
            Placement::Single => out.push(run(text, at, 0.0)),
            Placement::Rotated(angle) => out.push(run(text, at, angle)),
            Placement::Stacked => {
                for (i, word) in text.split_whitespace().enumerate() {
                    let y = g.height * (anchor.1 + STACK_STEP * i as f64);
                    out.push(run(word, Point::new(at.x, y), 0.0));
                }
            }
        }
    }
    out
}

/// 0..=100 values along each axis: clay, then silt, then sand.
pub fn tick_labels(g: &CanvasGeometry, theme: &Theme) -> Vec<TextRun> {
    let gap = g.line_gap();
    let size = tick_size(g);
    let mut out = Vec::with_capacity(3 * LINES_PER_AXIS);
    let mut push = |axis: Component, i: usize, position: Point, align: TextAlign| {
        out.push(TextRun {
            text: (i * 10).to_string(),
            position,
            align,
            rotation: 0.0,
            size,
            bold: true,
            color: theme.axis(axis),
        });
    };

    for i in 0..LINES_PER_AXIS {
        let m = gap * i as f64;
        let at = Point::new((g.inset_x() - TICK_OFFSET_PX) + m / 2.0, g.base_y() - m);
        push(Component::Clay, i, at, TextAlign::Right);
    }
    for i in 0..LINES_PER_AXIS {
        let m = gap * i as f64;
        let at = Point::new((g.width / 2.0 + TICK_OFFSET_PX) + m / 2.0, g.inset_y() + m);
        push(Component::Silt, i, at, TextAlign::Left);
    }
    for i in 0..LINES_PER_AXIS {
        let m = gap * i as f64;
        let at = Point::new(g.width - (g.inset_x() + m), g.height - g.height * (g.padding / 1.5));
        push(Component::Sand, i, at, TextAlign::Center);
    }
    out
}

/// Upper-cased "% clay" / "% silt" / "% sand" titles beside their axes.
pub fn axis_titles(g: &CanvasGeometry, labels: &LabelSet, theme: &Theme) -> Vec<TextRun> {
    let size = axis_title_size(g);
    [
        (Component::Clay, Point::new(g.width * 0.22, g.height / 2.0), -PI / 3.0),
        (Component::Silt, Point::new(g.width * 0.78, g.height / 2.0), PI / 3.0),
        (Component::Sand, Point::new(g.width / 2.1, g.height * 0.98), 0.0),
    ]
    .into_iter()
    .map(|(axis, position, rotation)| TextRun {
        text: labels.axis_title(axis).to_uppercase(),
        position,
        align: TextAlign::Center,
        rotation,
        size,
        bold: true,
        color: theme.axis(axis),
    })
    .collect()
}
