//! Chart-ready analytics over the augmented series.
//!
//! These are the projections the downstream renderer consumes: the
//! correlation matrix across the headline metric columns, and calendar
//! groupings of daily returns (yearly totals and the year-by-month table).

pub mod calendar;
pub mod correlation;

pub use calendar::{monthly_returns, yearly_returns, MonthlyReturns};
pub use correlation::{correlation_matrix, CorrelationMatrix, CORRELATION_COLUMNS};
