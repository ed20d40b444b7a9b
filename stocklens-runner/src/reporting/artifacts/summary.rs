//! Summary statistics text export.
//!
//! Renders the ordered label/value listing: floats at two decimal places,
//! integers and dates verbatim (the `SummaryValue` display rules).

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use stocklens_core::summary::SummaryRecord;

pub fn write_summary_text(path: &Path, symbol: &str, record: &SummaryRecord) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create summary file {}", path.display()))?;

    let heading = format!("{symbol} Stock Analysis Summary Statistics");
    writeln!(file, "{heading}")?;
    writeln!(file, "{}", "=".repeat(heading.len()))?;
    writeln!(file)?;
    for (label, value) in record.fields() {
        writeln!(file, "{label}: {value}")?;
    }
    Ok(())
}

/// Machine-readable companion to the text summary.
pub fn write_summary_json(path: &Path, record: &SummaryRecord) -> Result<()> {
    let json =
        serde_json::to_string_pretty(record).context("Failed to serialize summary record")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write summary JSON {}", path.display()))?;
    Ok(())
}
