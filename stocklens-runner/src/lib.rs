//! StockLens Runner — analysis orchestration around `stocklens-core`.
//!
//! This crate builds on the core pipeline to provide:
//! - CSV bar loading (the time-series loader collaborator)
//! - TOML analysis configuration
//! - The single-analysis runner tying loader → engine → aggregator together
//! - The report sink: artifact manager writing the augmented series, the
//!   summary statistics text file, and chart-ready data projections

pub mod config;
pub mod data_loader;
pub mod reporting;
pub mod runner;

pub use config::{AnalysisConfig, ConfigError};
pub use data_loader::{load_bars_csv, LoadError};
pub use reporting::{ArtifactManager, ArtifactPaths};
pub use runner::{run_analysis, AnalysisResult, RunError};
