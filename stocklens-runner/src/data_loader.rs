//! Bar loading from CSV files.
//!
//! Expects the columns `Date,Open,High,Low,Close,Volume` with ISO dates.
//! Rows are sorted chronologically after reading (input order is not
//! trusted); duplicate dates and non-finite prices are rejected rather than
//! silently repaired. The core engine never touches files — this is the
//! loader collaborator in front of it.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use stocklens_core::domain::{Bar, PriceSeries, SeriesError};

/// Errors from the data loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("non-finite price on {date}")]
    NonFinitePrice { date: NaiveDate },

    #[error(transparent)]
    Series(#[from] SeriesError),
}

/// Raw CSV row, column names as the source file spells them.
#[derive(Debug, Deserialize)]
struct CsvBar {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Open")]
    open: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "Low")]
    low: f64,
    #[serde(rename = "Close")]
    close: f64,
    #[serde(rename = "Volume")]
    volume: u64,
}

impl From<CsvBar> for Bar {
    fn from(raw: CsvBar) -> Self {
        Bar {
            date: raw.date,
            open: raw.open,
            high: raw.high,
            low: raw.low,
            close: raw.close,
            volume: raw.volume,
        }
    }
}

/// Load a sorted, validated price series from a CSV file.
pub fn load_bars_csv(path: &Path) -> Result<PriceSeries, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut bars = Vec::new();
    for record in reader.deserialize() {
        let raw: CsvBar = record?;
        let bar = Bar::from(raw);
        if !bar.is_finite() {
            return Err(LoadError::NonFinitePrice { date: bar.date });
        }
        bars.push(bar);
    }

    Ok(PriceSeries::from_bars(bars)?)
}
