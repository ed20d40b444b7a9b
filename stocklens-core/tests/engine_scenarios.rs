//! End-to-end scenarios for the indicator pipeline and summary aggregation.

use chrono::NaiveDate;
use stocklens_core::domain::{Bar, PriceSeries};
use stocklens_core::engine::{enrich, EngineError};
use stocklens_core::summary::{summarize, SummaryError};

fn make_bars(closes: &[f64]) -> Vec<Bar> {
    let base_date = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000 + i as u64,
            }
        })
        .collect()
}

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}

#[test]
fn two_bar_series_returns() {
    // closes [100, 110], one day apart: r1 = 10.0, C1 = 0.10.
    let series = PriceSeries::from_bars(make_bars(&[100.0, 110.0])).unwrap();
    let augmented = enrich(&series).unwrap();
    let rows = augmented.rows();

    approx(rows[0].daily_return, 0.0);
    approx(rows[0].cumulative_return, 0.0);
    approx(rows[1].daily_return, 10.0);
    approx(rows[1].cumulative_return, 0.10);
}

#[test]
fn flat_series_degenerate_indicators() {
    // 260 identical closes: means settle at the price, spreads at zero,
    // and RSI is the undefined 0/0 case throughout.
    let series = PriceSeries::from_bars(make_bars(&[50.0; 260])).unwrap();
    let augmented = enrich(&series).unwrap();
    let rows = augmented.rows();

    for (i, row) in rows.iter().enumerate() {
        if i >= 49 {
            approx(row.ma_50.unwrap(), 50.0);
        }
        if i >= 199 {
            approx(row.ma_200.unwrap(), 50.0);
        }
        if i >= 19 {
            approx(row.bb_std.unwrap(), 0.0);
            approx(row.bb_upper.unwrap(), 50.0);
            approx(row.bb_lower.unwrap(), 50.0);
            approx(row.volatility_20.unwrap(), 0.0);
        }
        // Flat closes still have a 2.0 high-low range, so ATR is 2, not 0.
        if i >= 14 {
            approx(row.atr_14.unwrap(), 2.0);
            approx(row.momentum_14.unwrap(), 0.0);
        }
        // No gains and no losses anywhere: RSI stays undefined, never 100.
        assert_eq!(row.rsi_14, None, "flat-series RSI must be undefined at {i}");
        approx(row.macd, 0.0);
    }
}

#[test]
fn single_bar_engine_ok_summary_degenerate() {
    let series = PriceSeries::from_bars(make_bars(&[42.0])).unwrap();
    let augmented = enrich(&series).unwrap();
    assert_eq!(augmented.len(), 1);

    let err = summarize(&augmented).unwrap_err();
    assert!(matches!(err, SummaryError::DegenerateDateRange(_)));
}

#[test]
fn empty_series_is_an_engine_error() {
    let series = PriceSeries::from_bars(vec![]).unwrap();
    assert!(matches!(enrich(&series), Err(EngineError::EmptyInput)));
}

#[test]
fn summary_scenario_mixed_returns() {
    // Daily returns [0, 10, -10, 10, -10] percent.
    let series = PriceSeries::from_bars(make_bars(&[100.0, 110.0, 99.0, 108.9, 98.01])).unwrap();
    let augmented = enrich(&series).unwrap();
    let record = summarize(&augmented).unwrap();

    assert!(record.mean_daily_return_pct.abs() < 1e-9);
    approx(record.positive_days_pct, 40.0);
    approx(record.negative_days_pct, 40.0);
    approx(record.max_daily_gain_pct, 10.0);
    approx(record.max_daily_loss_pct, -10.0);
}

#[test]
fn rsi_saturates_at_100_in_pure_uptrend() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let series = PriceSeries::from_bars(make_bars(&closes)).unwrap();
    let augmented = enrich(&series).unwrap();
    for row in augmented.rows().iter().skip(13) {
        assert_eq!(row.rsi_14, Some(100.0));
    }
}

#[test]
fn rerun_produces_identical_output() {
    let closes: Vec<f64> = (0..120).map(|i| 100.0 + ((i * 31) % 23) as f64).collect();
    let series = PriceSeries::from_bars(make_bars(&closes)).unwrap();
    let a = enrich(&series).unwrap();
    let b = enrich(&series).unwrap();
    assert_eq!(a.rows(), b.rows());
}

#[test]
fn ma50_equals_trailing_mean() {
    let closes: Vec<f64> = (0..70).map(|i| 100.0 + ((i * 3) % 29) as f64).collect();
    let series = PriceSeries::from_bars(make_bars(&closes)).unwrap();
    let augmented = enrich(&series).unwrap();
    let rows = augmented.rows();

    for i in 49..rows.len() {
        let window = &closes[i - 49..=i];
        let expected = window.iter().sum::<f64>() / 50.0;
        approx(rows[i].ma_50.unwrap(), expected);
    }
    assert!(rows[48].ma_50.is_none());
}
