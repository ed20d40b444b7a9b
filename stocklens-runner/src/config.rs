//! Serializable analysis configuration.
//!
//! A TOML file naming the input CSV, the symbol label for artifacts, and
//! the output directory:
//!
//! ```toml
//! input = "upload/uber_stock_data.csv"
//! symbol = "UBER"
//! output_dir = "analysis_results"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors while reading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for a single analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Path to the input bar CSV.
    pub input: PathBuf,

    /// Symbol label used in artifact names and headings.
    pub symbol: String,

    /// Directory artifacts are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("analysis_results")
}

impl AnalysisConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }
}
