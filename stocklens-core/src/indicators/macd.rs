//! MACD — Moving Average Convergence Divergence.
//!
//! macd = EMA(close, fast) - EMA(close, slow)
//! signal = EMA(macd, signal_span), same seeding rule
//! histogram = macd - signal
//!
//! All three series are total because the underlying EMAs are seeded at
//! index 0. Ordering matters: both EMAs before the MACD line, the line
//! before its signal.

use crate::indicators::ema::ema;

/// The MACD line, its signal line, and their difference, plus the two
/// component EMAs (kept because they are output columns in their own right).
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub ema_fast: Vec<f64>,
    pub ema_slow: Vec<f64>,
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

pub fn macd(closes: &[f64], fast: usize, slow: usize, signal_span: usize) -> MacdSeries {
    let ema_fast = ema(closes, fast);
    let ema_slow = ema(closes, slow);
    let macd: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(f, s)| f - s)
        .collect();
    let signal = ema(&macd, signal_span);
    let histogram: Vec<f64> = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();
    MacdSeries {
        ema_fast,
        ema_slow,
        macd,
        signal,
        histogram,
    }
}
