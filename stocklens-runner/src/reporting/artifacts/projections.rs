//! Chart-ready data projections (CSV per figure).
//!
//! One file per chart of the downstream report: time vs. the derived
//! columns that figure plots. Rendering is out of scope; these files are
//! the renderer's input. Undefined values are empty cells.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::runner::AnalysisResult;

fn cell(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

fn create(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Failed to create projection {}", path.display()))
}

pub fn write_all(plots_dir: &Path, result: &AnalysisResult) -> Result<()> {
    let rows = result.series.rows();

    let mut price = create(&plots_dir.join("price_history.csv"))?;
    writeln!(price, "date,close,ma_50,ma_200")?;
    for r in rows {
        writeln!(price, "{},{},{},{}", r.date, r.close, cell(r.ma_50), cell(r.ma_200))?;
    }

    let mut returns = create(&plots_dir.join("daily_returns.csv"))?;
    writeln!(returns, "date,daily_return")?;
    for r in rows {
        writeln!(returns, "{},{}", r.date, r.daily_return)?;
    }

    let mut cumulative = create(&plots_dir.join("cumulative_returns.csv"))?;
    writeln!(cumulative, "date,cumulative_return_pct")?;
    for r in rows {
        writeln!(cumulative, "{},{}", r.date, r.cumulative_return * 100.0)?;
    }

    let mut volatility = create(&plots_dir.join("volatility.csv"))?;
    writeln!(volatility, "date,volatility_20")?;
    for r in rows {
        writeln!(volatility, "{},{}", r.date, cell(r.volatility_20))?;
    }

    let mut volume = create(&plots_dir.join("volume.csv"))?;
    writeln!(volume, "date,volume,volume_ma_20")?;
    for r in rows {
        writeln!(volume, "{},{},{}", r.date, r.volume, cell(r.volume_ma_20))?;
    }

    let mut macd = create(&plots_dir.join("macd.csv"))?;
    writeln!(macd, "date,macd,signal,histogram")?;
    for r in rows {
        writeln!(macd, "{},{},{},{}", r.date, r.macd, r.macd_signal, r.macd_histogram)?;
    }

    let mut rsi = create(&plots_dir.join("rsi.csv"))?;
    writeln!(rsi, "date,rsi_14")?;
    for r in rows {
        writeln!(rsi, "{},{}", r.date, cell(r.rsi_14))?;
    }

    let mut bollinger = create(&plots_dir.join("bollinger_bands.csv"))?;
    writeln!(bollinger, "date,close,bb_middle,bb_upper,bb_lower")?;
    for r in rows {
        writeln!(
            bollinger,
            "{},{},{},{},{}",
            r.date,
            r.close,
            cell(r.bb_middle),
            cell(r.bb_upper),
            cell(r.bb_lower)
        )?;
    }

    let mut yearly = create(&plots_dir.join("yearly_returns.csv"))?;
    writeln!(yearly, "year,return_pct")?;
    for (year, total) in &result.yearly_returns {
        writeln!(yearly, "{year},{total}")?;
    }

    let mut monthly = create(&plots_dir.join("monthly_returns.csv"))?;
    writeln!(monthly, "year,month,return_pct")?;
    for (&(year, month), total) in result.monthly_returns.iter() {
        writeln!(monthly, "{year},{month},{total}")?;
    }

    let mut correlation = create(&plots_dir.join("correlation_matrix.csv"))?;
    writeln!(correlation, "column,{}", result.correlation.labels.join(","))?;
    for (label, row) in result.correlation.labels.iter().zip(&result.correlation.values) {
        let cells: Vec<String> = row.iter().map(|v| cell(*v)).collect();
        writeln!(correlation, "{label},{}", cells.join(","))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::run_analysis;
    use chrono::NaiveDate;
    use stocklens_core::domain::{Bar, PriceSeries};

    fn sample_result() -> AnalysisResult {
        let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let bars = (0..30)
            .map(|i| Bar {
                date: base_date + chrono::Duration::days(i),
                open: 100.0,
                high: 102.0 + (i % 3) as f64,
                low: 98.0,
                close: 100.0 + (i % 5) as f64,
                volume: 1000 + i as u64,
            })
            .collect();
        let series = PriceSeries::from_bars(bars).unwrap();
        run_analysis(&series, "TEST").unwrap()
    }

    #[test]
    fn writes_every_projection_file() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path(), &sample_result()).unwrap();

        for name in [
            "price_history.csv",
            "daily_returns.csv",
            "cumulative_returns.csv",
            "volatility.csv",
            "volume.csv",
            "macd.csv",
            "rsi.csv",
            "bollinger_bands.csv",
            "yearly_returns.csv",
            "monthly_returns.csv",
            "correlation_matrix.csv",
        ] {
            assert!(dir.path().join(name).exists(), "missing projection {name}");
        }
    }

    #[test]
    fn projections_have_one_row_per_bar() {
        let dir = tempfile::tempdir().unwrap();
        let result = sample_result();
        write_all(dir.path(), &result).unwrap();

        let contents = std::fs::read_to_string(dir.path().join("macd.csv")).unwrap();
        assert_eq!(contents.lines().count(), result.series.len() + 1);
    }

    #[test]
    fn correlation_matrix_is_square() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path(), &sample_result()).unwrap();

        let contents = std::fs::read_to_string(dir.path().join("correlation_matrix.csv")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 7); // header + 6 labelled rows
        for line in &lines {
            assert_eq!(line.split(',').count(), 7);
        }
    }
}
