//! Momentum — simple lookback difference (not percentage).
//!
//! momentum[t] = close[t] - close[t-period], undefined for t < period.

pub fn momentum(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    assert!(period >= 1, "Momentum period must be >= 1");
    let n = closes.len();
    let mut result = vec![None; n];
    for i in period..n {
        result[i] = Some(closes[i] - closes[i - period]);
    }
    result
}
