// File: crates/demo/src/main.rs
// Summary: Demo renders one sample from flags, or one per CSV row, to PNG and SVG under the output dir.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use texture_core::{Composition, SvgRenderer, TexturalTriangle, TriangleConfig};
use texture_render_skia::{render_to_png, RenderOptions};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// One CSV row. Values stay textual so bad numbers surface as `NotANumber`.
#[derive(Debug, Deserialize)]
struct SampleRow {
    #[serde(default)]
    name: Option<String>,
    silt: String,
    sand: String,
    clay: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = cli.resolve_config()?;
    init_tracing(&cfg.log_level);

    let triangle = cfg.triangle();
    let opts = RenderOptions::from_config(&cfg);
    tracing::info!(
        language = %triangle.language(),
        theme = triangle.theme.name,
        width = cfg.width,
        height = cfg.height,
        "rendering"
    );

    let samples: Vec<(String, Option<Composition>)> = if let Some(path) = &cli.csv {
        load_samples_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
    } else if let Some((silt, sand, clay)) = cli.inline_sample() {
        let sample = Composition::parse(silt, sand, clay).context("invalid composition")?;
        vec![(sample_name(&sample), Some(sample))]
    } else {
        vec![("empty".to_string(), None)]
    };

    if samples.is_empty() {
        anyhow::bail!("no valid samples to render");
    }

    for (name, sample) in &samples {
        let png = out_path(&cli.out, name, "png");
        render_to_png(&triangle, sample.as_ref(), &opts, &png)?;
        let svg = png.with_extension("svg");
        write_svg(&triangle, sample.as_ref(), &cfg, &svg)?;
        println!("Wrote {}", png.display());
    }
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

/// Load `silt,sand,clay[,name]` rows; invalid rows are logged and skipped.
fn load_samples_csv(path: &Path) -> Result<Vec<(String, Option<Composition>)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    for (i, rec) in rdr.deserialize::<SampleRow>().enumerate() {
        // header is line 1
        let line = i + 2;
        let row = match rec {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(line, %err, "skipping unreadable row");
                continue;
            }
        };
        match Composition::parse(&row.silt, &row.sand, &row.clay) {
            Ok(sample) => {
                let name = row
                    .name
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| sample_name(&sample));
                out.push((sanitize(&name), Some(sample)));
            }
            Err(err) => tracing::warn!(line, %err, "skipping invalid row"),
        }
    }
    tracing::info!(count = out.len(), path = %path.display(), "loaded samples");
    Ok(out)
}

fn write_svg(
    triangle: &TexturalTriangle,
    sample: Option<&Composition>,
    cfg: &TriangleConfig,
    path: &Path,
) -> Result<()> {
    let mut svg = SvgRenderer::from_config(cfg);
    triangle.draw(&cfg.geometry(), sample, &mut svg);
    svg.write_to(path).with_context(|| format!("writing {}", path.display()))
}

/// Name like `20_20_60` for silt/sand/clay.
fn sample_name(sample: &Composition) -> String {
    format!("{}_{}_{}", sample.silt(), sample.sand(), sample.clay())
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

/// Produce output file name like <dir>/triangle_<name>.<ext>
fn out_path(dir: &Path, name: &str, ext: &str) -> PathBuf {
    dir.join(format!("triangle_{name}.{ext}"))
}
