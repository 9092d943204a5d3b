// File: crates/texture-render-skia/src/lib.rs
// Summary: Skia renderer crate; CPU raster surfaces, text shaping and PNG/RGBA8 output.

pub mod render;
pub mod renderer;
pub mod text;

pub use render::{render_to_png, render_to_png_bytes, render_to_rgba8, RenderOptions};
pub use renderer::SkiaRenderer;
pub use text::TextShaper;
