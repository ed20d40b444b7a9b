//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[t] = alpha * value[t] + (1 - alpha) * EMA[t-1]
//! with alpha = 2 / (span + 1), seeded at value[0]. The seed makes the
//! series total — there is no warm-up gap, the first value is itself the
//! EMA at index 0. The recurrence depends on its immediate predecessor,
//! so this is strictly a left-to-right fold.

/// EMA over an arbitrary series. Defined at every index of a non-empty input.
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    assert!(span >= 1, "EMA span must be >= 1");
    let alpha = 2.0 / (span as f64 + 1.0);

    let mut result = Vec::with_capacity(values.len());
    let mut prev = match values.first() {
        Some(&v) => v,
        None => return result,
    };
    result.push(prev);
    for &v in &values[1..] {
        prev = alpha * v + (1.0 - alpha) * prev;
        result.push(prev);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn ema_span_1_equals_input() {
        let result = ema(&[100.0, 200.0, 300.0], 1);
        assert_eq!(result, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn ema_seeded_at_first_value() {
        let result = ema(&[10.0, 11.0, 12.0], 9);
        assert_approx(result[0], 10.0, DEFAULT_EPSILON);
    }

    #[test]
    fn ema_3_known_values() {
        // alpha = 2/(3+1) = 0.5, seed = 10
        // EMA[1] = 0.5*11 + 0.5*10.0 = 10.5
        // EMA[2] = 0.5*12 + 0.5*10.5 = 11.25
        // EMA[3] = 0.5*13 + 0.5*11.25 = 12.125
        let result = ema(&[10.0, 11.0, 12.0, 13.0], 3);
        assert_approx(result[1], 10.5, DEFAULT_EPSILON);
        assert_approx(result[2], 11.25, DEFAULT_EPSILON);
        assert_approx(result[3], 12.125, DEFAULT_EPSILON);
    }

    #[test]
    fn ema_defined_everywhere() {
        let result = ema(&[5.0; 40], 12);
        assert_eq!(result.len(), 40);
        assert!(result.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn ema_constant_input_is_constant() {
        let result = ema(&[7.5; 10], 26);
        for v in result {
            assert_approx(v, 7.5, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn ema_empty_input() {
        assert!(ema(&[], 12).is_empty());
    }
}
