//! Artifact manager for persisting analysis outputs.

mod projections;
mod series;
mod summary;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::runner::AnalysisResult;

/// Artifact paths returned after export.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub series_csv: PathBuf,
    pub summary_txt: PathBuf,
    pub summary_json: PathBuf,
    pub plots_dir: PathBuf,
}

/// Manages writing all artifacts for an analysis run.
///
/// Directory layout mirrors what the downstream report consumes:
/// `data/processed_<symbol>.csv`, `summary_statistics.txt`, and one
/// chart-data CSV per figure under `plots/`.
#[derive(Debug, Clone)]
pub struct ArtifactManager {
    output_dir: PathBuf,
}

impl ArtifactManager {
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&output_dir)
            .context("Failed to create artifact output directory")?;
        Ok(Self { output_dir })
    }

    /// Save complete analysis artifacts.
    pub fn save_analysis(&self, result: &AnalysisResult) -> Result<ArtifactPaths> {
        let data_dir = self.output_dir.join("data");
        std::fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

        let series_csv = data_dir.join(format!(
            "processed_{}_stock_data.csv",
            result.symbol.to_lowercase()
        ));
        series::write_series_csv(&series_csv, result.series.rows())?;

        let summary_txt = self.output_dir.join("summary_statistics.txt");
        summary::write_summary_text(&summary_txt, &result.symbol, &result.summary)?;
        let summary_json = self.output_dir.join("summary_statistics.json");
        summary::write_summary_json(&summary_json, &result.summary)?;

        let plots_dir = self.output_dir.join("plots");
        std::fs::create_dir_all(&plots_dir).context("Failed to create plots directory")?;
        projections::write_all(&plots_dir, result)?;

        Ok(ArtifactPaths {
            series_csv,
            summary_txt,
            summary_json,
            plots_dir,
        })
    }
}
