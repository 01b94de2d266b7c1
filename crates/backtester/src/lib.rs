//! # Nadir Backtest Engine
//!
//! This crate simulates the "buy the dip" trading rule over historical daily
//! price series and aggregates the outcome into a [`RunResult`].
//!
//! ## Architectural Principles
//!
//! - **Pure Computation:** The engine consumes already-fetched series and
//!   returns in-memory aggregates. It performs no I/O, caches nothing, and
//!   keeps no state between runs, so identical inputs produce identical output.
//! - **Independent Scans:** Each instrument's trade list is computed on its
//!   own (rayon fans the scans out across cores); accumulation into the
//!   shared aggregate maps happens sequentially afterwards, in input order.
//!
//! ## Public API
//!
//! - `Backtester`: holds the validated strategy parameters and runs the scan.
//! - `BacktestParams`: hold period, drop threshold, and lookback window.
//! - `RunResult`: the ordered trade list plus all derived aggregates.
//! - `BacktestError`: the specific error types this crate can return.

use core_types::{Instrument, PriceField, Trade};
use indicators::percent_change;
use rayon::prelude::*;
use rust_decimal::Decimal;

pub mod error;
pub mod result;

// Re-export the key components to create a clean, public-facing API.
pub use error::BacktestError;
pub use result::RunResult;

/// The three parameters of the oversold trading rule.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BacktestParams {
    /// Trading days to hold after the buy bar before the forced sell.
    pub hold_period: usize,
    /// The drop threshold, supplied as a positive magnitude: a bar triggers
    /// when its percent change falls below `-percentage`.
    pub percentage: Decimal,
    /// The lookback window, in bars, for the percent-change computation.
    pub days_back: usize,
}

impl BacktestParams {
    fn validate(&self) -> Result<(), BacktestError> {
        if self.percentage <= Decimal::ZERO {
            return Err(BacktestError::InvalidParameter(format!(
                "percentage must be a positive magnitude, got {}",
                self.percentage
            )));
        }
        if self.days_back == 0 {
            return Err(BacktestError::InvalidParameter(
                "days_back must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// The backtesting engine for the oversold ("buy the dip") rule.
pub struct Backtester {
    params: BacktestParams,
}

impl Backtester {
    /// Constructs a new `Backtester`, validating the strategy parameters.
    pub fn new(params: BacktestParams) -> Result<Self, BacktestError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &BacktestParams {
        &self.params
    }

    /// Runs the simulation over every instrument and aggregates the outcome.
    ///
    /// Instruments are scanned independently and in parallel; the per-ticker
    /// and per-date aggregates are then merged sequentially in input order, so
    /// the trade list order (and the whole result) is reproducible.
    ///
    /// Malformed series (non-monotonic dates, negative prices) are rejected
    /// rather than silently folded into the aggregates. A series shorter than
    /// `days_back + 2` bars contributes zero trades; it is not an error.
    pub fn run(&self, instruments: &[Instrument]) -> Result<RunResult, BacktestError> {
        let per_instrument: Vec<Vec<Trade>> = instruments
            .par_iter()
            .map(|instrument| self.scan_instrument(instrument))
            .collect::<Result<_, _>>()?;

        let mut result = RunResult::new();
        for trades in per_instrument {
            for trade in trades {
                result.returns.push(trade.return_pct);
                result.profits.push(trade.profit);

                *result
                    .per_ticker_profit
                    .entry(trade.ticker.clone())
                    .or_insert(Decimal::ZERO) += trade.profit;
                *result
                    .trade_volume_by_date
                    .entry(trade.buy_date)
                    .or_insert(Decimal::ZERO) += trade.buy_price;
                *result
                    .profit_by_date
                    .entry(trade.sell_date)
                    .or_insert(Decimal::ZERO) += trade.profit;

                result.trades.push(trade);
            }
        }

        // Two-phase per-ticker accumulation: tickers whose trades net to
        // exactly zero are dropped from the final map.
        result.per_ticker_profit.retain(|_, profit| !profit.is_zero());

        if !result.returns.is_empty() {
            let sum: Decimal = result.returns.iter().sum();
            result.average_return = sum / Decimal::from(result.returns.len());
        }
        result.total_earning = result.profits.iter().sum();

        tracing::info!(
            instruments = instruments.len(),
            trades = result.trades.len(),
            total_earning = %result.total_earning,
            "backtest run complete"
        );

        Ok(result)
    }

    /// Scans one instrument's series for triggers and simulates its trades.
    fn scan_instrument(&self, instrument: &Instrument) -> Result<Vec<Trade>, BacktestError> {
        instrument.validate()?;

        let bars = &instrument.bars;
        let changes = percent_change(bars, self.params.days_back, PriceField::Close)?;
        let threshold = -self.params.percentage;

        let mut trades = Vec::new();
        // The last bar can never trigger: there is no following bar to buy on.
        for i in self.params.days_back..bars.len().saturating_sub(1) {
            let Some(change) = changes[i] else { continue };
            if change >= threshold {
                continue;
            }

            let pct_drop = change.round_dp(2);
            let last_close_before_buy = bars[i].close.round_dp(2);
            let buy_bar = &bars[i + 1];
            let buy_price = buy_bar.open.round_dp(2);

            let sell_index = i + 1 + self.params.hold_period;
            let (sell_price, sell_date) = if sell_index < bars.len() {
                (bars[sell_index].close.round_dp(2), bars[sell_index].date)
            } else {
                // Holding period runs past the end of the data: sell at the
                // last available close, but record the buy date as the sell
                // date. Preserved as-is; downstream statistics depend on it.
                (bars[bars.len() - 1].close.round_dp(2), buy_bar.date)
            };

            let profit = (sell_price - buy_price).round_dp(2);
            let return_pct = profit
                .checked_div(buy_price)
                .map(|r| r * Decimal::from(100))
                .ok_or_else(|| BacktestError::ZeroBuyPrice {
                    ticker: instrument.ticker.clone(),
                    date: buy_bar.date,
                })?;

            tracing::debug!(
                ticker = %instrument.ticker,
                buy_date = %buy_bar.date,
                %buy_price,
                %sell_date,
                %sell_price,
                %pct_drop,
                %profit,
                "trigger"
            );

            trades.push(Trade {
                ticker: instrument.ticker.clone(),
                buy_date: buy_bar.date,
                buy_price,
                sell_date,
                sell_price,
                pct_drop,
                last_close_before_buy,
                profit,
                return_pct,
            });
        }

        Ok(trades)
    }
}
