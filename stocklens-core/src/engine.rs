//! IndicatorEngine — precomputes every derived column over a sorted series.
//!
//! All columns are computed in one pass each, in dependency order: returns
//! before cumulative returns and volatility, EMAs before MACD, MACD before
//! its signal, gains/losses before RSI, rolling mean/std before the
//! Bollinger bands, TR before ATR. Window lengths are fixed constants;
//! nothing here is configurable.
//!
//! The engine is pure: series in, augmented series out, no I/O. Partial
//! history is never an error — windowed columns carry `None` until their
//! window fills. The only failure is an empty input.

use thiserror::Error;

use crate::domain::{IndicatorRow, PriceSeries};
use crate::indicators::{
    atr, bollinger, cumulative_returns, daily_returns, macd, momentum, rolling_mean, rolling_std,
    rsi, true_range,
};

pub const VOLATILITY_WINDOW: usize = 20;
pub const MA_SHORT_WINDOW: usize = 50;
pub const MA_LONG_WINDOW: usize = 200;
pub const EMA_FAST_SPAN: usize = 12;
pub const EMA_SLOW_SPAN: usize = 26;
pub const MACD_SIGNAL_SPAN: usize = 9;
pub const RSI_PERIOD: usize = 14;
pub const BOLLINGER_WINDOW: usize = 20;
pub const BOLLINGER_MULT: f64 = 2.0;
pub const ATR_PERIOD: usize = 14;
pub const VOLUME_MA_WINDOW: usize = 20;
pub const MOMENTUM_PERIOD: usize = 14;

/// Errors from the indicator engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cannot compute indicators over an empty series")]
    EmptyInput,
}

/// The input series extended with every derived column, read-only after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedSeries {
    rows: Vec<IndicatorRow>,
}

impl AugmentedSeries {
    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row by date order. The engine never produces an empty series.
    pub fn first(&self) -> &IndicatorRow {
        &self.rows[0]
    }

    pub fn last(&self) -> &IndicatorRow {
        &self.rows[self.rows.len() - 1]
    }

    pub fn daily_returns(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.daily_return).collect()
    }
}

/// Compute every derived column for a sorted series.
pub fn enrich(series: &PriceSeries) -> Result<AugmentedSeries, EngineError> {
    if series.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let bars = series.bars();
    let closes = series.closes();
    let volumes: Vec<f64> = bars.iter().map(|b| b.volume as f64).collect();

    let daily = daily_returns(bars);
    let cumulative = cumulative_returns(&daily);
    let volatility = rolling_std(&daily, VOLATILITY_WINDOW);

    let ma_short = rolling_mean(&closes, MA_SHORT_WINDOW);
    let ma_long = rolling_mean(&closes, MA_LONG_WINDOW);

    let macd_series = macd(&closes, EMA_FAST_SPAN, EMA_SLOW_SPAN, MACD_SIGNAL_SPAN);
    let rsi_series = rsi(&closes, RSI_PERIOD);
    let bb = bollinger(&closes, BOLLINGER_WINDOW, BOLLINGER_MULT);

    let tr = true_range(bars);
    let atr_series = atr(bars, ATR_PERIOD);

    let volume_ma = rolling_mean(&volumes, VOLUME_MA_WINDOW);
    let momentum_series = momentum(&closes, MOMENTUM_PERIOD);

    let rows = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| IndicatorRow {
            date: bar.date,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            daily_return: daily[i],
            cumulative_return: cumulative[i],
            volatility_20: volatility[i],
            ma_50: ma_short[i],
            ma_200: ma_long[i],
            ema_12: macd_series.ema_fast[i],
            ema_26: macd_series.ema_slow[i],
            macd: macd_series.macd[i],
            macd_signal: macd_series.signal[i],
            macd_histogram: macd_series.histogram[i],
            rsi_14: rsi_series[i],
            bb_middle: bb.middle[i],
            bb_std: bb.std[i],
            bb_upper: bb.upper[i],
            bb_lower: bb.lower[i],
            true_range: tr[i],
            atr_14: atr_series[i],
            volume_ma_20: volume_ma[i],
            momentum_14: momentum_series[i],
        })
        .collect();

    Ok(AugmentedSeries { rows })
}
