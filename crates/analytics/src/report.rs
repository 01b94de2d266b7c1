use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// The derived, presentation-level statistics of one backtest run.
///
/// This struct is the output of the `AnalyticsEngine` and the payload the
/// reporter serializes alongside the raw trade list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    // I. Trade-Level Counts
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,

    // II. Ticker- and Day-Level Counts
    pub winning_tickers: usize,
    pub losing_tickers: usize,
    pub winning_days: usize,
    pub losing_days: usize,

    // III. Extremes
    /// Up to five lowest trade returns, ascending.
    pub worst_returns: Vec<Decimal>,
    /// Up to five highest trade returns, descending.
    pub best_returns: Vec<Decimal>,
    /// The date with the highest total buy volume, if any trades occurred.
    pub peak_volume_day: Option<(NaiveDate, Decimal)>,
    /// The sell date with the highest realized profit.
    pub best_day: Option<(NaiveDate, Decimal)>,
    /// The sell date with the lowest realized profit.
    pub worst_day: Option<(NaiveDate, Decimal)>,
}

impl RunSummary {
    /// Creates a new, zeroed-out RunSummary.
    pub fn new() -> Self {
        Self {
            total_trades: 0,
            winning_trades: 0,
            losing_trades: 0,
            winning_tickers: 0,
            losing_tickers: 0,
            winning_days: 0,
            losing_days: 0,
            worst_returns: Vec::new(),
            best_returns: Vec::new(),
            peak_volume_day: None,
            best_day: None,
            worst_day: None,
        }
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}
