//! Bollinger Bands — rolling mean +/- standard deviation multiplier.
//!
//! Middle: rolling mean of close. Band width: rolling *sample* std of close
//! (divide by N-1) times the multiplier. All four columns share one window,
//! so they become defined at the same index.

use crate::indicators::rolling::{rolling_mean, rolling_std};

#[derive(Debug, Clone, PartialEq)]
pub struct BollingerSeries {
    pub middle: Vec<Option<f64>>,
    pub std: Vec<Option<f64>>,
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

pub fn bollinger(closes: &[f64], period: usize, multiplier: f64) -> BollingerSeries {
    let middle = rolling_mean(closes, period);
    let std = rolling_std(closes, period);
    let upper: Vec<Option<f64>> = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m + multiplier * s),
            _ => None,
        })
        .collect();
    let lower: Vec<Option<f64>> = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - multiplier * s),
            _ => None,
        })
        .collect();
    BollingerSeries {
        middle,
        std,
        upper,
        lower,
    }
}
