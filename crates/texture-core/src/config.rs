// File: crates/texture-core/src/config.rs
// Summary: RON-backed settings for surface size, language, theme and labels.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::CanvasGeometry;
use crate::labels::{LabelSet, Language};
use crate::theme::{self, Theme};
use crate::triangle::TexturalTriangle;

/// Default surface width in pixels.
pub const WIDTH: u32 = 400;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 400;

/// Settings shared by the renderers and the CLI. Every field is optional in the file.
///
/// ```ron
/// (language: "pt-br", theme: "classic", width: 600, height: 600, draw_labels: true)
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleConfig {
    /// `en`, `pt-br` or `sp`; anything else means `en`.
    pub language: String,
    pub theme: String,
    pub width: u32,
    pub height: u32,
    pub draw_labels: bool,
    /// Tracing filter directive, e.g. `info` or `texture_core=debug`.
    pub log_level: String,
    /// Custom label table replacing the built-in one for `language`.
    /// Fields left out keep their English text.
    pub labels: Option<LabelSet>,
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            language: Language::En.code().to_string(),
            theme: Theme::classic().name.to_string(),
            width: WIDTH,
            height: HEIGHT,
            draw_labels: true,
            log_level: "info".to_string(),
            labels: None,
        }
    }
}

impl TriangleConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config = Self::from_ron_str(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn language(&self) -> Language {
        Language::from_code(&self.language)
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }

    pub fn geometry(&self) -> CanvasGeometry {
        CanvasGeometry::new(f64::from(self.width), f64::from(self.height))
    }

    pub fn triangle(&self) -> TexturalTriangle {
        let triangle = match &self.labels {
            Some(labels) => TexturalTriangle::with_labels(labels.clone()),
            None => TexturalTriangle::with_language(self.language()),
        };
        triangle.with_theme(self.theme())
    }
}
