//! SummaryAggregator — reduces the completed series to a flat statistics record.
//!
//! Every statistic is computed over the entire series, not a window.
//! Formatting is the report sink's concern; this module only defines the
//! values and their presentation order.

pub mod stats;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::AugmentedSeries;
use stats::{mean, median, std_dev};

/// Errors from summary aggregation.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Annualized return needs a non-zero elapsed span; a series whose first
    /// and last dates coincide cannot be annualized.
    #[error("cannot annualize over a zero-day date range (first and last date are both {0})")]
    DegenerateDateRange(NaiveDate),
}

/// Flat statistics record over the full series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub trading_days: usize,
    pub initial_price: f64,
    pub final_price: f64,
    pub overall_return_pct: f64,
    pub annualized_return_pct: f64,
    pub mean_daily_return_pct: f64,
    pub median_daily_return_pct: f64,
    pub max_daily_gain_pct: f64,
    pub max_daily_loss_pct: f64,
    pub daily_return_std_pct: f64,
    pub positive_days_pct: f64,
    pub negative_days_pct: f64,
    pub mean_volume: f64,
    pub max_volume: u64,
    pub min_volume: u64,
    pub highest_price: f64,
    pub lowest_price: f64,
    pub price_range: f64,
    /// Mean of the 20-day volatility column, skipping undefined entries.
    /// `None` when the series is too short for any window to fill.
    pub mean_volatility_20: Option<f64>,
}

/// One rendered summary value. Floats print at 2 decimal places; integers
/// and dates print verbatim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryValue {
    Date(NaiveDate),
    Int(u64),
    Float(f64),
    Missing,
}

impl std::fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryValue::Date(d) => write!(f, "{d}"),
            SummaryValue::Int(i) => write!(f, "{i}"),
            SummaryValue::Float(v) => write!(f, "{v:.2}"),
            SummaryValue::Missing => write!(f, "n/a"),
        }
    }
}

impl SummaryRecord {
    /// The record as an ordered label/value listing for text rendering.
    pub fn fields(&self) -> Vec<(&'static str, SummaryValue)> {
        vec![
            ("Start Date", SummaryValue::Date(self.start_date)),
            ("End Date", SummaryValue::Date(self.end_date)),
            ("Trading Days", SummaryValue::Int(self.trading_days as u64)),
            ("Initial Price", SummaryValue::Float(self.initial_price)),
            ("Final Price", SummaryValue::Float(self.final_price)),
            ("Overall Return (%)", SummaryValue::Float(self.overall_return_pct)),
            ("Annualized Return (%)", SummaryValue::Float(self.annualized_return_pct)),
            ("Average Daily Return (%)", SummaryValue::Float(self.mean_daily_return_pct)),
            ("Median Daily Return (%)", SummaryValue::Float(self.median_daily_return_pct)),
            ("Max Daily Gain (%)", SummaryValue::Float(self.max_daily_gain_pct)),
            ("Max Daily Loss (%)", SummaryValue::Float(self.max_daily_loss_pct)),
            ("Daily Return Std Dev (%)", SummaryValue::Float(self.daily_return_std_pct)),
            ("Positive Days (%)", SummaryValue::Float(self.positive_days_pct)),
            ("Negative Days (%)", SummaryValue::Float(self.negative_days_pct)),
            ("Average Volume", SummaryValue::Float(self.mean_volume)),
            ("Max Volume", SummaryValue::Int(self.max_volume)),
            ("Min Volume", SummaryValue::Int(self.min_volume)),
            ("Highest Price", SummaryValue::Float(self.highest_price)),
            ("Lowest Price", SummaryValue::Float(self.lowest_price)),
            ("Price Range", SummaryValue::Float(self.price_range)),
            (
                "Average Volatility (20d)",
                match self.mean_volatility_20 {
                    Some(v) => SummaryValue::Float(v),
                    None => SummaryValue::Missing,
                },
            ),
        ]
    }
}

/// Reduce the augmented series to a `SummaryRecord`.
///
/// Fails only on a degenerate date range (single-day span), which makes the
/// annualized-return exponent divide by zero. Everything else is total.
pub fn summarize(series: &AugmentedSeries) -> Result<SummaryRecord, SummaryError> {
    let rows = series.rows();
    let first = series.first();
    let last = series.last();

    let elapsed_days = (last.date - first.date).num_days();
    if elapsed_days == 0 {
        return Err(SummaryError::DegenerateDateRange(first.date));
    }

    let overall_return_pct = (last.close / first.close - 1.0) * 100.0;
    let annualized_return_pct =
        ((last.close / first.close).powf(365.0 / elapsed_days as f64) - 1.0) * 100.0;

    let daily = series.daily_returns();
    let n = rows.len() as f64;
    let positive = daily.iter().filter(|r| **r > 0.0).count() as f64;
    let negative = daily.iter().filter(|r| **r < 0.0).count() as f64;

    let max_daily_gain_pct = daily.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let max_daily_loss_pct = daily.iter().cloned().fold(f64::INFINITY, f64::min);

    let volumes: Vec<f64> = rows.iter().map(|r| r.volume as f64).collect();
    let max_volume = rows.iter().map(|r| r.volume).max().unwrap_or(0);
    let min_volume = rows.iter().map(|r| r.volume).min().unwrap_or(0);

    let highest_price = rows.iter().map(|r| r.high).fold(f64::NEG_INFINITY, f64::max);
    let lowest_price = rows.iter().map(|r| r.low).fold(f64::INFINITY, f64::min);

    let defined_volatility: Vec<f64> = rows.iter().filter_map(|r| r.volatility_20).collect();
    let mean_volatility_20 = if defined_volatility.is_empty() {
        None
    } else {
        Some(mean(&defined_volatility))
    };

    Ok(SummaryRecord {
        start_date: first.date,
        end_date: last.date,
        trading_days: rows.len(),
        initial_price: first.close,
        final_price: last.close,
        overall_return_pct,
        annualized_return_pct,
        mean_daily_return_pct: mean(&daily),
        median_daily_return_pct: median(&daily),
        max_daily_gain_pct,
        max_daily_loss_pct,
        daily_return_std_pct: std_dev(&daily),
        positive_days_pct: positive / n * 100.0,
        negative_days_pct: negative / n * 100.0,
        mean_volume: mean(&volumes),
        max_volume,
        min_volume,
        highest_price,
        lowest_price,
        price_range: highest_price - lowest_price,
        mean_volatility_20,
    })
}
