//! StockLens Core — indicator pipeline, summary aggregation, analytics projections.
//!
//! This crate contains the computational heart of the analysis pipeline:
//! - Domain types (bars, the sorted price series, the augmented indicator rows)
//! - Indicator engine: returns, volatility, moving averages, MACD, RSI,
//!   Bollinger bands, ATR, volume MA, momentum — all from one sorted series
//! - Summary aggregator reducing the augmented series to a flat statistics record
//! - Chart-ready analytics: correlation matrix and calendar return grouping
//!
//! Everything here is pure and deterministic: a `PriceSeries` in, values out.
//! File I/O and artifact writing live in `stocklens-runner`.

pub mod analytics;
pub mod domain;
pub mod engine;
pub mod indicators;
pub mod summary;

pub use domain::{Bar, IndicatorRow, PriceSeries, SeriesError};
pub use engine::{enrich, AugmentedSeries, EngineError};
pub use summary::{summarize, SummaryError, SummaryRecord, SummaryValue};
