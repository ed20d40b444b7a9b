//! PriceSeries — a chronologically sorted, duplicate-free sequence of bars.
//!
//! Once built, position `i` is the i-th oldest bar, so every windowed
//! computation indexes positionally and reads only positions `<= i`.

use thiserror::Error;

use crate::domain::Bar;

/// Errors raised while building a series.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("duplicate date in series: {0}")]
    DuplicateDate(chrono::NaiveDate),
}

/// An ordered sequence of bars, sorted ascending by date with no duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    bars: Vec<Bar>,
}

impl PriceSeries {
    /// Build a series from bars in any order. Sorts by date and rejects
    /// duplicate dates. An empty input is a valid (empty) series; whether
    /// that is acceptable is the engine's call.
    pub fn from_bars(mut bars: Vec<Bar>) -> Result<Self, SeriesError> {
        bars.sort_by_key(|b| b.date);
        for pair in bars.windows(2) {
            if pair[0].date == pair[1].date {
                return Err(SeriesError::DuplicateDate(pair[1].date));
            }
        }
        Ok(Self { bars })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Close prices in positional order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}
