// File: crates/texture-render-skia/src/render.rs
// Summary: Headless rendering pipeline using Skia CPU raster surfaces (PNG file, PNG bytes, RGBA8).

use anyhow::{Context, Result};
use skia_safe as skia;
use texture_core::config::{HEIGHT, WIDTH};
use texture_core::{CanvasGeometry, Composition, TexturalTriangle, TriangleConfig};

use crate::renderer::SkiaRenderer;
use crate::text::TextShaper;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH as i32, height: HEIGHT as i32, draw_labels: true }
    }
}

impl RenderOptions {
    pub fn from_config(cfg: &TriangleConfig) -> Self {
        Self {
            width: i32::try_from(cfg.width).unwrap_or(i32::MAX),
            height: i32::try_from(cfg.height).unwrap_or(i32::MAX),
            draw_labels: cfg.draw_labels,
        }
    }

    pub fn geometry(&self) -> CanvasGeometry {
        CanvasGeometry::new(f64::from(self.width), f64::from(self.height))
    }
}

fn rasterize(
    triangle: &TexturalTriangle,
    sample: Option<&Composition>,
    opts: &RenderOptions,
) -> Result<skia::Surface> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
    let shaper = TextShaper::new();
    {
        let canvas = surface.canvas();
        let mut target = SkiaRenderer::new(canvas, &shaper, opts.draw_labels);
        triangle.draw(&opts.geometry(), sample, &mut target);
    }
    Ok(surface)
}

/// Render to PNG-encoded bytes.
pub fn render_to_png_bytes(
    triangle: &TexturalTriangle,
    sample: Option<&Composition>,
    opts: &RenderOptions,
) -> Result<Vec<u8>> {
    let mut surface = rasterize(triangle, sample, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the triangle to a PNG at `output_png_path` using a CPU raster surface.
pub fn render_to_png(
    triangle: &TexturalTriangle,
    sample: Option<&Composition>,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(triangle, sample, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

/// Render to an unpremultiplied RGBA8 buffer: `(pixels, width, height, row_bytes)`.
pub fn render_to_rgba8(
    triangle: &TexturalTriangle,
    sample: Option<&Composition>,
    opts: &RenderOptions,
) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = rasterize(triangle, sample, opts)?;
    let (w, h) = (opts.width.max(0) as u32, opts.height.max(0) as u32);
    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("reading back {w}x{h} pixels failed");
    }
    Ok((pixels, w, h, stride))
}
