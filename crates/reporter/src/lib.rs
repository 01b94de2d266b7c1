//! # Nadir Reporter
//!
//! Persists a finished backtest run to disk. The engine itself returns pure
//! in-memory structures; this crate owns path construction, timestamped run
//! directories, and file writing, and is invoked after the engine returns.
//!
//! Each run lands in `<output_dir>/oversold/<MM-DD-YYYY_HH-MM-SS>/` with:
//! - `result.txt`: parameter header, one line per trade, summary block;
//! - `trades.csv`: the full ordered trade list;
//! - `summary.json`: the machine-readable aggregates and statistics.

use analytics::{BenchmarkReturn, RunSummary};
use backtester::{BacktestParams, RunResult};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub mod error;

pub use error::ReportError;

/// Writes run reports under a configured output directory.
pub struct ReportWriter {
    output_dir: PathBuf,
}

/// The machine-readable payload written to `summary.json`.
#[derive(Serialize)]
struct SummaryPayload<'a> {
    params: &'a BacktestParams,
    average_return: &'a rust_decimal::Decimal,
    total_earning: &'a rust_decimal::Decimal,
    summary: &'a RunSummary,
    benchmark: Option<&'a BenchmarkReturn>,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Writes all report files for one run and returns the run directory.
    pub fn write(
        &self,
        params: &BacktestParams,
        result: &RunResult,
        summary: &RunSummary,
        benchmark: Option<&BenchmarkReturn>,
    ) -> Result<PathBuf, ReportError> {
        let stamp = chrono::Local::now().format("%m-%d-%Y_%H-%M-%S").to_string();
        let run_dir = self.output_dir.join("oversold").join(stamp);
        std::fs::create_dir_all(&run_dir)?;

        self.write_text_log(&run_dir.join("result.txt"), params, result, summary, benchmark)?;
        self.write_trade_table(&run_dir.join("trades.csv"), result)?;
        self.write_summary_json(&run_dir.join("summary.json"), params, result, summary, benchmark)?;

        tracing::info!(dir = %run_dir.display(), trades = result.trades.len(), "report written");
        Ok(run_dir)
    }

    fn write_text_log(
        &self,
        path: &Path,
        params: &BacktestParams,
        result: &RunResult,
        summary: &RunSummary,
        benchmark: Option<&BenchmarkReturn>,
    ) -> Result<(), ReportError> {
        let mut file = BufWriter::new(File::create(path)?);

        writeln!(file, "Results of backtest run.")?;
        writeln!(
            file,
            "Hold Period: {}, Percentage: {}, Days Back: {}",
            params.hold_period, params.percentage, params.days_back
        )?;

        for trade in &result.trades {
            writeln!(
                file,
                "B {} at {} at {:.2} ==> at {} at {:.2}. PCT drop was: {:.2}, LCBB was: {:.2}. Profit: {:.2}. Return: {}.",
                trade.ticker,
                trade.buy_date,
                trade.buy_price,
                trade.sell_date,
                trade.sell_price,
                trade.pct_drop,
                trade.last_close_before_buy,
                trade.profit,
                trade.return_pct,
            )?;
        }

        writeln!(file)?;
        writeln!(file, "Average return of the strategy: {:.2}%", result.average_return)?;
        writeln!(file, "Total earning of the strategy: {:.2}", result.total_earning)?;
        writeln!(file, "Winning trades: {}", summary.winning_trades)?;
        writeln!(file, "Losing trades: {}", summary.losing_trades)?;
        if let Some(benchmark) = benchmark {
            writeln!(
                file,
                "Buy-and-hold benchmark: {:.2}% ({:.2})",
                benchmark.return_pct, benchmark.earning
            )?;
        }

        file.flush()?;
        Ok(())
    }

    fn write_trade_table(&self, path: &Path, result: &RunResult) -> Result<(), ReportError> {
        let mut writer = csv::Writer::from_writer(File::create(path)?);
        for trade in &result.trades {
            writer.serialize(trade)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_summary_json(
        &self,
        path: &Path,
        params: &BacktestParams,
        result: &RunResult,
        summary: &RunSummary,
        benchmark: Option<&BenchmarkReturn>,
    ) -> Result<(), ReportError> {
        let payload = SummaryPayload {
            params,
            average_return: &result.average_return,
            total_earning: &result.total_earning,
            summary,
            benchmark,
        };
        let file = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(file, &payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::AnalyticsEngine;
    use backtester::Backtester;
    use chrono::NaiveDate;
    use core_types::{Bar, Instrument};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn series(closes: &[(Decimal, Decimal)]) -> Vec<Bar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &(open, close))| Bar {
                date: NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .checked_add_days(chrono::Days::new(i as u64))
                    .unwrap(),
                open,
                high: open.max(close),
                low: open.min(close),
                close,
                volume: dec!(1000),
            })
            .collect()
    }

    fn sample_run() -> (BacktestParams, RunResult) {
        let params = BacktestParams {
            hold_period: 0,
            percentage: dec!(10),
            days_back: 1,
        };
        let engine = Backtester::new(params.clone()).unwrap();
        let instruments = [Instrument::new(
            "AAPL",
            series(&[
                (dec!(100), dec!(100)),
                (dec!(90), dec!(80)),
                (dec!(79), dec!(81)),
            ]),
        )];
        let result = engine.run(&instruments).unwrap();
        (params, result)
    }

    #[test]
    fn writes_all_report_files() {
        let (params, result) = sample_run();
        let summary = AnalyticsEngine::new().summarize(&result);
        let out = tempfile::tempdir().unwrap();

        let run_dir = ReportWriter::new(out.path())
            .write(&params, &result, &summary, None)
            .unwrap();

        assert!(run_dir.starts_with(out.path().join("oversold")));
        for name in ["result.txt", "trades.csv", "summary.json"] {
            assert!(run_dir.join(name).is_file(), "missing {name}");
        }
    }

    #[test]
    fn text_log_carries_header_and_trade_lines() {
        let (params, result) = sample_run();
        let summary = AnalyticsEngine::new().summarize(&result);
        let out = tempfile::tempdir().unwrap();

        let run_dir = ReportWriter::new(out.path())
            .write(&params, &result, &summary, None)
            .unwrap();

        let text = std::fs::read_to_string(run_dir.join("result.txt")).unwrap();
        assert!(text.contains("Hold Period: 0, Percentage: 10, Days Back: 1"));
        assert!(text.contains("B AAPL at 2024-01-03 at 79.00"));
        assert!(text.contains("PCT drop was: -20.00"));
    }

    #[test]
    fn trade_table_has_one_row_per_trade() {
        let (params, result) = sample_run();
        let summary = AnalyticsEngine::new().summarize(&result);
        let out = tempfile::tempdir().unwrap();

        let run_dir = ReportWriter::new(out.path())
            .write(&params, &result, &summary, None)
            .unwrap();

        let table = std::fs::read_to_string(run_dir.join("trades.csv")).unwrap();
        let mut lines = table.lines();
        assert!(lines.next().unwrap().starts_with("ticker,buy_date,buy_price"));
        assert_eq!(lines.count(), result.trades.len());
    }

    #[test]
    fn summary_json_includes_the_benchmark_when_given() {
        let (params, result) = sample_run();
        let summary = AnalyticsEngine::new().summarize(&result);
        let benchmark = analytics::buy_and_hold(&series(&[
            (dec!(400), dec!(400)),
            (dec!(410), dec!(440)),
        ]))
        .unwrap();
        let out = tempfile::tempdir().unwrap();

        let run_dir = ReportWriter::new(out.path())
            .write(&params, &result, &summary, Some(&benchmark))
            .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(run_dir.join("summary.json")).unwrap())
                .unwrap();
        assert_eq!(json["params"]["days_back"], 1);
        assert!(json["benchmark"]["return_pct"].is_string() || json["benchmark"]["return_pct"].is_number());
    }
}
