//! Augmented series export (CSV).
//!
//! Serializes every `IndicatorRow` through serde; undefined windowed values
//! become empty cells, not zeros.

use anyhow::{Context, Result};
use std::path::Path;

use stocklens_core::domain::IndicatorRow;

pub fn write_series_csv(path: &Path, rows: &[IndicatorRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create series CSV {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .context("Failed to serialize indicator row")?;
    }
    writer.flush().context("Failed to flush series CSV")?;
    Ok(())
}
