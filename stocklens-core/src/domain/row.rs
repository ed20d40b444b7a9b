//! IndicatorRow — a bar extended with every derived column.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One bar plus all derived indicator values at that position.
///
/// Recurrence-based columns (returns, EMAs, MACD family) are total: they are
/// defined at every index by seeding. Windowed columns are `Option<f64>` and
/// hold `None` until their trailing window is fully populated — absence is
/// tagged, never encoded as zero or NaN. Serialized to CSV, `None` becomes an
/// empty cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,

    /// Close-over-close percent change; 0.0 at index 0 by definition.
    pub daily_return: f64,
    /// Running product of (1 + r/100) minus one.
    pub cumulative_return: f64,
    /// 20-bar sample std of daily returns.
    pub volatility_20: Option<f64>,

    pub ma_50: Option<f64>,
    pub ma_200: Option<f64>,

    pub ema_12: f64,
    pub ema_26: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_histogram: f64,

    pub rsi_14: Option<f64>,

    pub bb_middle: Option<f64>,
    pub bb_std: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_lower: Option<f64>,

    pub true_range: Option<f64>,
    pub atr_14: Option<f64>,

    pub volume_ma_20: Option<f64>,
    pub momentum_14: Option<f64>,
}
