//! Single-analysis runner: series in, complete analysis out.
//!
//! Control flow is the pipeline's spine: loader output → indicator engine →
//! summary aggregator → analytics projections. No I/O happens here; the
//! artifact manager consumes the result afterwards.

use std::collections::BTreeMap;

use thiserror::Error;

use stocklens_core::analytics::{
    correlation_matrix, monthly_returns, yearly_returns, CorrelationMatrix, MonthlyReturns,
};
use stocklens_core::engine::{enrich, AugmentedSeries, EngineError};
use stocklens_core::summary::{summarize, SummaryError, SummaryRecord};
use stocklens_core::PriceSeries;

/// Errors from the analysis pipeline.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Summary(#[from] SummaryError),
}

/// Everything one analysis produces, ready for the report sink.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub symbol: String,
    pub series: AugmentedSeries,
    pub summary: SummaryRecord,
    pub correlation: CorrelationMatrix,
    pub yearly_returns: BTreeMap<i32, f64>,
    pub monthly_returns: MonthlyReturns,
}

/// Run the full pipeline over an already-loaded series.
pub fn run_analysis(series: &PriceSeries, symbol: &str) -> Result<AnalysisResult, RunError> {
    let augmented = enrich(series)?;
    let summary = summarize(&augmented)?;
    let correlation = correlation_matrix(&augmented);
    let yearly = yearly_returns(&augmented);
    let monthly = monthly_returns(&augmented);

    Ok(AnalysisResult {
        symbol: symbol.to_string(),
        series: augmented,
        summary,
        correlation,
        yearly_returns: yearly,
        monthly_returns: monthly,
    })
}
