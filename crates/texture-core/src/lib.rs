// File: crates/texture-core/src/lib.rs
// Summary: Core library entry point; exports the coordinate mapper, labels and the draw pipeline.

pub mod boundary;
pub mod composition;
pub mod config;
pub mod error;
pub mod geometry;
pub mod labels;
pub mod layout;
pub mod mapper;
pub mod renderer;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod triangle;

pub use boundary::class_boundary_polygon;
pub use composition::{validate, Component, Composition};
pub use config::TriangleConfig;
pub use error::{ConfigError, InvalidComposition};
pub use geometry::{CanvasGeometry, Point, Segment};
pub use labels::{LabelSet, Language, TextureClass};
pub use mapper::{GridLine, GuideLine, TextureCoordinateMapper};
pub use renderer::{Renderer, Stroke, TextAlign, TextRun};
pub use scene::{DrawCommand, Scene};
pub use svg::SvgRenderer;
pub use theme::{Color, Theme};
pub use triangle::TexturalTriangle;
