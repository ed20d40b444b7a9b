//! Calendar grouping of daily returns.
//!
//! Yearly totals and the year-by-month table behind the monthly heatmap.
//! Both are plain sums of the daily percent returns within each bucket.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::engine::AugmentedSeries;

/// Year-by-month sums of daily returns, keyed `(year, month)`.
/// Months with no trading days are simply absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonthlyReturns {
    cells: BTreeMap<(i32, u32), f64>,
}

impl MonthlyReturns {
    pub fn get(&self, year: i32, month: u32) -> Option<f64> {
        self.cells.get(&(year, month)).copied()
    }

    /// Distinct years present, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.cells.keys().map(|(y, _)| *y).collect();
        years.dedup();
        years
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(i32, u32), &f64)> {
        self.cells.iter()
    }
}

/// Sum of daily returns per calendar year, ascending by year.
pub fn yearly_returns(series: &AugmentedSeries) -> BTreeMap<i32, f64> {
    let mut totals = BTreeMap::new();
    for row in series.rows() {
        *totals.entry(row.date.year()).or_insert(0.0) += row.daily_return;
    }
    totals
}

/// Sum of daily returns per (year, month) bucket.
pub fn monthly_returns(series: &AugmentedSeries) -> MonthlyReturns {
    let mut cells = BTreeMap::new();
    for row in series.rows() {
        *cells
            .entry((row.date.year(), row.date.month()))
            .or_insert(0.0) += row.daily_return;
    }
    MonthlyReturns { cells }
}
