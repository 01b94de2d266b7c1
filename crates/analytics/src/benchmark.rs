use core_types::Bar;
use rust_decimal::Decimal;
use serde::Serialize;

/// The passive buy-and-hold return of a reference instrument over a period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenchmarkReturn {
    /// Percentage change from the first close to the last close.
    pub return_pct: Decimal,
    /// Absolute change from the first close to the last close.
    pub earning: Decimal,
}

/// Computes the simple two-point buy-and-hold return over a series: buy at the
/// first close, sell at the last.
///
/// Returns `None` for an empty series or a zero starting price, where the
/// percentage is undefined. The backtest engine never calls this; it exists so
/// result presentation can juxtapose the strategy against a passive holding of
/// a reference instrument.
pub fn buy_and_hold(bars: &[Bar]) -> Option<BenchmarkReturn> {
    let first = bars.first()?;
    let last = bars.last()?;

    let earning = last.close - first.close;
    let return_pct = earning.checked_div(first.close)? * Decimal::from(100);

    Some(BenchmarkReturn {
        return_pct,
        earning,
    })
}
