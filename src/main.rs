use analytics::AnalyticsEngine;
use backtester::{BacktestParams, Backtester};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use indicatif::{ProgressBar, ProgressStyle};
use reporter::ReportWriter;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Nadir backtesting application.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Run(args) => {
            if let Err(e) = handle_run(args) {
                eprintln!("Error during backtest run: {e:#}");
                std::process::exit(1);
            }
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A mean-reversion ("buy the dip") backtester for daily equity bars.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a backtest over a directory of per-ticker bar files.
    Run(RunArgs),
}

#[derive(Parser)]
struct RunArgs {
    /// Directory of per-ticker CSV bar files (overrides config.toml).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Trading days to hold after the buy bar (overrides config.toml).
    #[arg(long)]
    hold_period: Option<usize>,

    /// Percent-drop threshold, as a positive magnitude (overrides config.toml).
    #[arg(long)]
    percentage: Option<Decimal>,

    /// Lookback window in bars for the drop computation (overrides config.toml).
    #[arg(long)]
    days_back: Option<usize>,

    /// Ticker of the buy-and-hold benchmark series (overrides config.toml).
    #[arg(long)]
    benchmark: Option<String>,

    /// Directory to write run reports into (overrides config.toml).
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

// ==============================================================================
// Run Command Logic
// ==============================================================================

/// Handles the orchestration of one backtest run: load, simulate, summarize,
/// report.
fn handle_run(args: RunArgs) -> anyhow::Result<()> {
    let mut config = configuration::load_config()?;
    if let Some(dir) = args.data_dir {
        config.data.dir = dir;
    }
    if let Some(hold_period) = args.hold_period {
        config.strategy.hold_period = hold_period;
    }
    if let Some(percentage) = args.percentage {
        config.strategy.percentage = percentage;
    }
    if let Some(days_back) = args.days_back {
        config.strategy.days_back = days_back;
    }
    if let Some(benchmark) = args.benchmark {
        config.data.benchmark_ticker = benchmark;
    }
    if let Some(output_dir) = args.output_dir {
        config.report.output_dir = output_dir;
    }

    let params = BacktestParams {
        hold_period: config.strategy.hold_period,
        percentage: config.strategy.percentage,
        days_back: config.strategy.days_back,
    };
    let engine = Backtester::new(params.clone())?;

    println!(
        "Running backtest over {} (hold_period={}, percentage={}, days_back={})",
        config.data.dir.display(),
        params.hold_period,
        params.percentage,
        params.days_back
    );

    let instruments = load_instruments(&config.data.dir)?;
    let result = engine.run(&instruments)?;
    let summary = AnalyticsEngine::new().summarize(&result);

    // The benchmark is a plain buy-and-hold of the reference series over the
    // same period, juxtaposed for presentation only.
    let benchmark = instruments
        .iter()
        .find(|instrument| instrument.ticker == config.data.benchmark_ticker)
        .and_then(|instrument| analytics::buy_and_hold(&instrument.bars));
    if benchmark.is_none() {
        tracing::warn!(
            ticker = %config.data.benchmark_ticker,
            "benchmark series not found in the data directory"
        );
    }

    print_summary(&result, &summary, benchmark.as_ref());

    let run_dir = ReportWriter::new(&config.report.output_dir).write(
        &params,
        &result,
        &summary,
        benchmark.as_ref(),
    )?;
    println!("Report written to {}", run_dir.display());

    Ok(())
}

/// Loads every bar file in the data directory, with a progress bar.
fn load_instruments(dir: &std::path::Path) -> anyhow::Result<Vec<core_types::Instrument>> {
    let paths = market_data::bar_files(dir)?;

    let progress_bar = ProgressBar::new(paths.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")?
            .progress_chars("#>-"),
    );

    let mut instruments = Vec::with_capacity(paths.len());
    for path in &paths {
        let instrument = market_data::load_instrument(path)?;
        progress_bar.set_message(instrument.ticker.clone());
        progress_bar.inc(1);
        instruments.push(instrument);
    }
    progress_bar.finish_with_message(format!("Loaded {} instruments", instruments.len()));

    Ok(instruments)
}

/// Prints the strategy-versus-benchmark summary table.
fn print_summary(
    result: &backtester::RunResult,
    summary: &analytics::RunSummary,
    benchmark: Option<&analytics::BenchmarkReturn>,
) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);

    table.add_row(vec![
        "Average return".to_string(),
        format!("{:.2}%", result.average_return),
    ]);
    table.add_row(vec![
        "Total earning".to_string(),
        format!("{:.2}", result.total_earning),
    ]);
    table.add_row(vec!["Trades".to_string(), summary.total_trades.to_string()]);
    table.add_row(vec![
        "Winning / losing trades".to_string(),
        format!("{} / {}", summary.winning_trades, summary.losing_trades),
    ]);
    table.add_row(vec![
        "Winning / losing tickers".to_string(),
        format!("{} / {}", summary.winning_tickers, summary.losing_tickers),
    ]);
    table.add_row(vec![
        "Winning / losing days".to_string(),
        format!("{} / {}", summary.winning_days, summary.losing_days),
    ]);
    if let Some((date, volume)) = &summary.peak_volume_day {
        table.add_row(vec![
            "Peak buy volume".to_string(),
            format!("{:.2} on {}", volume, date),
        ]);
    }
    match benchmark {
        Some(benchmark) => {
            table.add_row(vec![
                "Buy-and-hold benchmark".to_string(),
                format!("{:.2}% ({:.2})", benchmark.return_pct, benchmark.earning),
            ]);
        }
        None => {
            table.add_row(vec!["Buy-and-hold benchmark".to_string(), "n/a".to_string()]);
        }
    }

    println!("{table}");
}
