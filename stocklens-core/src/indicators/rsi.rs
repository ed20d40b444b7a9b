//! Relative Strength Index (RSI).
//!
//! Each close-to-close delta is split into gain = max(delta, 0) and
//! loss = max(-delta, 0); both sides are averaged with a simple rolling
//! mean over `period` bars (not Wilder smoothing), then
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss).
//!
//! The division is evaluated in raw f64 on purpose:
//! - avg_loss == 0 with gains present: rs = +inf, RSI saturates to exactly 100
//! - avg_gain == avg_loss == 0 (flat window): rs = 0/0 = NaN, and the value
//!   is reported as undefined (`None`) — a different outcome from saturation
//!
//! The index-0 delta has no prior close and counts as a zero gain and zero
//! loss, so the first candidate index is period - 1.

use crate::indicators::rolling::rolling_mean;

pub fn rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    assert!(period >= 1, "RSI period must be >= 1");
    let n = closes.len();

    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];
    for i in 1..n {
        let delta = closes[i] - closes[i - 1];
        gains[i] = delta.max(0.0);
        losses[i] = (-delta).max(0.0);
    }

    let avg_gain = rolling_mean(&gains, period);
    let avg_loss = rolling_mean(&losses, period);

    avg_gain
        .iter()
        .zip(&avg_loss)
        .map(|(g, l)| match (g, l) {
            (Some(g), Some(l)) => {
                let value = 100.0 - 100.0 / (1.0 + g / l);
                if value.is_nan() {
                    None
                } else {
                    Some(value)
                }
            }
            _ => None,
        })
        .collect()
}
