use crate::report::RunSummary;
use backtester::RunResult;
use rust_decimal::Decimal;

/// A stateless calculator deriving presentation statistics from a finished run.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the `RunSummary` for a completed backtest run.
    ///
    /// Every statistic is recomputed fresh from the run's trade list and
    /// aggregate maps; nothing is cached between calls.
    pub fn summarize(&self, result: &RunResult) -> RunSummary {
        let mut summary = RunSummary::new();
        summary.total_trades = result.trades.len();

        for r in &result.returns {
            if r.is_sign_positive() && !r.is_zero() {
                summary.winning_trades += 1;
            } else if r.is_sign_negative() {
                summary.losing_trades += 1;
            }
        }

        // per_ticker_profit never holds zero entries, so every ticker in it
        // is a winner or a loser.
        for profit in result.per_ticker_profit.values() {
            if profit.is_sign_positive() {
                summary.winning_tickers += 1;
            } else {
                summary.losing_tickers += 1;
            }
        }

        for profit in result.profit_by_date.values() {
            if profit.is_sign_positive() && !profit.is_zero() {
                summary.winning_days += 1;
            } else if profit.is_sign_negative() {
                summary.losing_days += 1;
            }
        }

        let mut sorted_returns = result.returns.clone();
        sorted_returns.sort();
        summary.worst_returns = sorted_returns.iter().take(5).copied().collect();
        summary.best_returns = sorted_returns.iter().rev().take(5).copied().collect();

        summary.peak_volume_day = Self::extreme_by_value(&result.trade_volume_by_date, true);
        summary.best_day = Self::extreme_by_value(&result.profit_by_date, true);
        summary.worst_day = Self::extreme_by_value(&result.profit_by_date, false);

        summary
    }

    fn extreme_by_value(
        map: &std::collections::BTreeMap<chrono::NaiveDate, Decimal>,
        highest: bool,
    ) -> Option<(chrono::NaiveDate, Decimal)> {
        let entry = if highest {
            map.iter().max_by_key(|(_, value)| **value)
        } else {
            map.iter().min_by_key(|(_, value)| **value)
        };
        entry.map(|(date, value)| (*date, *value))
    }
}
