// File: crates/texture-core/src/error.rs
// Summary: Error types for composition validation and configuration loading.

use std::path::PathBuf;

use crate::composition::Component;

/// Raised when a (silt, sand, clay) triple cannot be plotted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidComposition {
    #[error("{component} is not a number: {raw:?}")]
    NotANumber { component: Component, raw: String },
    #[error("{component} must be within 0..=100, got {value}")]
    OutOfRange { component: Component, value: f64 },
    #[error("percentages must add up to 100, got {sum}")]
    BadSum { sum: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}
