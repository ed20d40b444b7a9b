//! Pearson correlation matrix over the headline metric columns.
//!
//! Columns: close, volume, daily return, 20-day volatility, RSI, MACD.
//! Each pair is correlated over the rows where both columns are defined
//! (pairwise-complete observations), so warm-up gaps in windowed columns
//! shrink the sample instead of poisoning it.

use crate::engine::AugmentedSeries;

/// Column labels, in matrix order.
pub const CORRELATION_COLUMNS: [&str; 6] = [
    "close",
    "volume",
    "daily_return",
    "volatility_20",
    "rsi_14",
    "macd",
];

/// Square symmetric matrix of pairwise correlations.
///
/// `values[i][j]` is the correlation of column i with column j; the diagonal
/// is 1.0. A pair with fewer than two complete observations, or with a
/// zero-variance column, is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub labels: Vec<&'static str>,
    pub values: Vec<Vec<Option<f64>>>,
}

/// Pearson correlation of two equal-length samples. `None` when either side
/// has zero variance or fewer than two points.
fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len();
    if n < 2 {
        return None;
    }
    let k = n as f64;
    let mean_x = xs.iter().sum::<f64>() / k;
    let mean_y = ys.iter().sum::<f64>() / k;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

fn columns(series: &AugmentedSeries) -> Vec<Vec<Option<f64>>> {
    let rows = series.rows();
    vec![
        rows.iter().map(|r| Some(r.close)).collect(),
        rows.iter().map(|r| Some(r.volume as f64)).collect(),
        rows.iter().map(|r| Some(r.daily_return)).collect(),
        rows.iter().map(|r| r.volatility_20).collect(),
        rows.iter().map(|r| r.rsi_14).collect(),
        rows.iter().map(|r| Some(r.macd)).collect(),
    ]
}

/// Correlation matrix over `CORRELATION_COLUMNS`.
pub fn correlation_matrix(series: &AugmentedSeries) -> CorrelationMatrix {
    let cols = columns(series);
    let m = cols.len();
    let mut values = vec![vec![None; m]; m];

    for i in 0..m {
        values[i][i] = Some(1.0);
        for j in (i + 1)..m {
            let mut xs = Vec::new();
            let mut ys = Vec::new();
            for (x, y) in cols[i].iter().zip(&cols[j]) {
                if let (Some(x), Some(y)) = (x, y) {
                    xs.push(*x);
                    ys.push(*y);
                }
            }
            let r = pearson(&xs, &ys);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix {
        labels: CORRELATION_COLUMNS.to_vec(),
        values,
    }
}
