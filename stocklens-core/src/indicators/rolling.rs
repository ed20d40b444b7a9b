//! Rolling-window mean and standard deviation.
//!
//! Single pass with a sliding accumulator: add the incoming value, subtract
//! the outgoing one. O(n) regardless of window size. Standard deviation is
//! the sample std (divide by N-1), tracked via running sum and sum of
//! squares.

/// Trailing simple mean over `period` values. `None` until the window fills.
pub fn rolling_mean(values: &[f64], period: usize) -> Vec<Option<f64>> {
    assert!(period >= 1, "rolling window must be >= 1");
    let n = values.len();
    let mut result = vec![None; n];

    let mut sum = 0.0;
    for i in 0..n {
        sum += values[i];
        if i >= period {
            sum -= values[i - period];
        }
        if i + 1 >= period {
            result[i] = Some(sum / period as f64);
        }
    }

    result
}

/// Trailing sample standard deviation over `period` values.
///
/// `None` until the window fills. For `period == 1` the sample variance has
/// zero degrees of freedom and every defined value is `None` as well.
pub fn rolling_std(values: &[f64], period: usize) -> Vec<Option<f64>> {
    assert!(period >= 1, "rolling window must be >= 1");
    let n = values.len();
    let mut result = vec![None; n];
    if period < 2 {
        return result;
    }

    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for i in 0..n {
        sum += values[i];
        sum_sq += values[i] * values[i];
        if i >= period {
            let out = values[i - period];
            sum -= out;
            sum_sq -= out * out;
        }
        if i + 1 >= period {
            let k = period as f64;
            // Clamp: cancellation can leave a tiny negative variance.
            let variance = ((sum_sq - sum * sum / k) / (k - 1.0)).max(0.0);
            result[i] = Some(variance.sqrt());
        }
    }

    result
}

/// Trailing simple mean over an `Option` column. The window must be fully
/// defined; a single `None` inside it makes the output `None` (absence
/// propagates, it is never treated as zero).
pub fn rolling_mean_opt(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    assert!(period >= 1, "rolling window must be >= 1");
    let n = values.len();
    let mut result = vec![None; n];

    let mut sum = 0.0;
    let mut missing = 0usize;
    for i in 0..n {
        match values[i] {
            Some(v) => sum += v,
            None => missing += 1,
        }
        if i >= period {
            match values[i - period] {
                Some(v) => sum -= v,
                None => missing -= 1,
            }
        }
        if i + 1 >= period && missing == 0 {
            result[i] = Some(sum / period as f64);
        }
    }

    result
}
