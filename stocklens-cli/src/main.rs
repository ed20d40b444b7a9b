//! StockLens CLI — single-equity indicator analysis.
//!
//! Commands:
//! - `analyze` — load a bar CSV, compute indicators and summary statistics,
//!   and write artifacts (processed series, summary text, chart-data CSVs)

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use stocklens_runner::{load_bars_csv, run_analysis, AnalysisConfig, ArtifactManager};

#[derive(Parser)]
#[command(name = "stocklens", about = "StockLens — single-equity technical analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a daily OHLCV CSV and export artifacts.
    Analyze {
        /// Path to the input CSV (Date,Open,High,Low,Close,Volume).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Symbol label used in artifact names and headings.
        #[arg(long)]
        symbol: Option<String>,

        /// Output directory. Defaults to ./analysis_results.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Path to a TOML config file; flags override its values.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            input,
            symbol,
            out,
            config,
        } => cmd_analyze(input, symbol, out, config),
    }
}

fn cmd_analyze(
    input: Option<PathBuf>,
    symbol: Option<String>,
    out: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let file_config = match config {
        Some(path) => Some(AnalysisConfig::from_path(&path)?),
        None => None,
    };

    let input = match (input, &file_config) {
        (Some(path), _) => path,
        (None, Some(cfg)) => cfg.input.clone(),
        (None, None) => bail!("--input is required (or provide it via --config)"),
    };
    let symbol = match (symbol, &file_config) {
        (Some(s), _) => s,
        (None, Some(cfg)) => cfg.symbol.clone(),
        (None, None) => bail!("--symbol is required (or provide it via --config)"),
    };
    let out = out
        .or_else(|| file_config.map(|cfg| cfg.output_dir))
        .unwrap_or_else(|| PathBuf::from("analysis_results"));

    let series = load_bars_csv(&input)
        .with_context(|| format!("failed to load bars from {}", input.display()))?;
    println!("Loaded {} bars for {symbol} from {}", series.len(), input.display());

    let result = run_analysis(&series, &symbol)?;

    println!();
    for (label, value) in result.summary.fields() {
        println!("{label}: {value}");
    }

    let manager = ArtifactManager::new(&out)?;
    let paths = manager.save_analysis(&result)?;
    println!();
    println!("Artifacts saved to: {}", out.display());
    println!("  series:  {}", paths.series_csv.display());
    println!("  summary: {}", paths.summary_txt.display());
    println!("  plots:   {}", paths.plots_dir.display());
    Ok(())
}
