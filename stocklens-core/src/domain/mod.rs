//! Domain types: bars, the sorted price series, and augmented indicator rows.

pub mod bar;
pub mod row;
pub mod series;

pub use bar::Bar;
pub use row::IndicatorRow;
pub use series::{PriceSeries, SeriesError};
