//! True Range and Average True Range (ATR).
//!
//! TR[t] = max(high[t]-low[t], |high[t]-close[t-1]|, |low[t]-close[t-1]|).
//! TR[0] has no previous close and is undefined. ATR is a simple rolling
//! mean of TR (not Wilder smoothing) over a fully defined window, so with
//! TR[0] = None the first defined ATR sits one index past the window
//! boundary.

use crate::domain::Bar;
use crate::indicators::rolling::rolling_mean_opt;

/// True Range series. `None` at index 0.
pub fn true_range(bars: &[Bar]) -> Vec<Option<f64>> {
    let mut tr = Vec::with_capacity(bars.len());
    for (i, bar) in bars.iter().enumerate() {
        if i == 0 {
            tr.push(None);
        } else {
            let pc = bars[i - 1].close;
            let range = (bar.high - bar.low)
                .max((bar.high - pc).abs())
                .max((bar.low - pc).abs());
            tr.push(Some(range));
        }
    }
    tr
}

/// Simple rolling mean of TR over `period` bars.
pub fn atr(bars: &[Bar], period: usize) -> Vec<Option<f64>> {
    rolling_mean_opt(&true_range(bars), period)
}
