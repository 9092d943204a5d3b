// File: crates/demo/src/cli.rs
// Summary: Command-line flags and their merge over the RON config file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use texture_core::TriangleConfig;

#[derive(Parser, Debug)]
#[command(name = "texture-demo", about = "Render soil textural triangles to PNG and SVG")]
pub struct Cli {
    /// Silt percentage (0-100)
    #[arg(long, requires_all = ["sand", "clay"])]
    pub silt: Option<String>,

    /// Sand percentage (0-100)
    #[arg(long, requires_all = ["silt", "clay"])]
    pub sand: Option<String>,

    /// Clay percentage (0-100)
    #[arg(long, requires_all = ["silt", "sand"])]
    pub clay: Option<String>,

    /// CSV with `silt,sand,clay` columns and an optional `name` column
    #[arg(long, conflicts_with = "silt")]
    pub csv: Option<PathBuf>,

    /// Label language: en, pt-br or sp
    #[arg(long)]
    pub lang: Option<String>,

    /// Color theme: classic or dark
    #[arg(long)]
    pub theme: Option<String>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Skip all text (font independent output)
    #[arg(long)]
    pub no_labels: bool,

    /// RON settings file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory
    #[arg(long, default_value = "target/out")]
    pub out: PathBuf,

    /// Tracing filter, e.g. `debug` or `texture_core=debug`; RUST_LOG wins when set
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// File settings (or defaults) with every flag given on the command line applied on top.
    pub fn resolve_config(&self) -> Result<TriangleConfig> {
        let mut cfg = match &self.config {
            Some(path) => TriangleConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => TriangleConfig::default(),
        };
        if let Some(lang) = &self.lang {
            cfg.language = lang.clone();
        }
        if let Some(theme) = &self.theme {
            cfg.theme = theme.clone();
        }
        if let Some(w) = self.width {
            cfg.width = w;
        }
        if let Some(h) = self.height {
            cfg.height = h;
        }
        if self.no_labels {
            cfg.draw_labels = false;
        }
        if let Some(level) = &self.log_level {
            cfg.log_level = level.clone();
        }
        Ok(cfg)
    }

    /// The single sample given through `--silt/--sand/--clay`, unparsed.
    pub fn inline_sample(&self) -> Option<(&str, &str, &str)> {
        match (&self.silt, &self.sand, &self.clay) {
            (Some(si), Some(sa), Some(cl)) => Some((si, sa, cl)),
            _ => None,
        }
    }
}
