use chrono::NaiveDate;
use core_types::Trade;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// The complete output of one backtest run.
///
/// This struct is the final product of the `Backtester` and the data transfer
/// object that reporting and analysis build on. The full ordered trade list is
/// exposed alongside the aggregates so downstream consumers never have to
/// recompute anything.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    /// All simulated trades in discovery order: instruments in input order,
    /// chronological within each instrument.
    pub trades: Vec<Trade>,
    /// The return percentage of every trade, in discovery order.
    pub returns: Vec<Decimal>,
    /// The profit of every trade, in discovery order.
    pub profits: Vec<Decimal>,
    /// Net profit per ticker. Tickers whose trades net to exactly zero are
    /// absent, as are tickers that never traded.
    pub per_ticker_profit: BTreeMap<String, Decimal>,
    /// Sum of buy prices per buy date, across all tickers.
    pub trade_volume_by_date: BTreeMap<NaiveDate, Decimal>,
    /// Sum of realized profit per sell date, across all tickers.
    pub profit_by_date: BTreeMap<NaiveDate, Decimal>,
    /// Arithmetic mean of all trade returns; zero when no trades occurred.
    pub average_return: Decimal,
    /// Sum of all trade profits; zero when no trades occurred.
    pub total_earning: Decimal,
}

impl RunResult {
    /// Creates a new, zeroed-out RunResult.
    pub fn new() -> Self {
        Self {
            trades: Vec::new(),
            returns: Vec::new(),
            profits: Vec::new(),
            per_ticker_profit: BTreeMap::new(),
            trade_volume_by_date: BTreeMap::new(),
            profit_by_date: BTreeMap::new(),
            average_return: Decimal::ZERO,
            total_earning: Decimal::ZERO,
        }
    }
}

impl Default for RunResult {
    fn default() -> Self {
        Self::new()
    }
}
