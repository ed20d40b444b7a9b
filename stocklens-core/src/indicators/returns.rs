//! Daily and cumulative returns.
//!
//! daily[0] is defined as 0.0 — an explicit fallback, not an undefined
//! marker — so the cumulative running product is well-founded from the
//! first bar. Every other windowed column in this crate uses `None` for
//! missing history; index 0 of the return column is the single exception.

use crate::domain::Bar;

/// Close-over-close percent change: `(close[i] / close[i-1] - 1) * 100`.
pub fn daily_returns(bars: &[Bar]) -> Vec<f64> {
    let mut result = Vec::with_capacity(bars.len());
    for (i, bar) in bars.iter().enumerate() {
        if i == 0 {
            result.push(0.0);
        } else {
            result.push((bar.close / bars[i - 1].close - 1.0) * 100.0);
        }
    }
    result
}

/// Running product of `(1 + r/100)` minus one. Not a window: position i
/// depends on every prior return.
pub fn cumulative_returns(daily: &[f64]) -> Vec<f64> {
    let mut result = Vec::with_capacity(daily.len());
    let mut acc = 1.0;
    for r in daily {
        acc *= 1.0 + r / 100.0;
        result.push(acc - 1.0);
    }
    result
}
