use crate::error::CoreError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single daily OHLCV bar of a price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// The calendar date of the bar. Strictly increasing within a series.
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

/// One instrument's identifier together with its chronologically ordered bars.
///
/// The series is owned by the caller and only ever read by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub ticker: String,
    pub bars: Vec<Bar>,
}

impl Instrument {
    pub fn new(ticker: impl Into<String>, bars: Vec<Bar>) -> Self {
        Self {
            ticker: ticker.into(),
            bars,
        }
    }

    /// Checks the series well-formedness assumptions the engine relies on:
    /// strictly increasing dates (no duplicates) and non-negative prices.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (index, window) in self.bars.windows(2).enumerate() {
            if window[1].date <= window[0].date {
                return Err(CoreError::NonMonotonicDates {
                    ticker: self.ticker.clone(),
                    index: index + 1,
                    date: window[1].date,
                });
            }
        }

        for (index, bar) in self.bars.iter().enumerate() {
            for (field, price) in [
                ("open", bar.open),
                ("high", bar.high),
                ("low", bar.low),
                ("close", bar.close),
            ] {
                if price.is_sign_negative() && !price.is_zero() {
                    return Err(CoreError::NegativePrice {
                        ticker: self.ticker.clone(),
                        field,
                        index,
                    });
                }
            }
        }

        Ok(())
    }
}

/// The immutable record of one simulated buy-then-sell cycle.
///
/// All prices are rounded to 2 decimal places at creation, and `profit` is
/// computed from the already-rounded prices. `return_pct` is derived from the
/// rounded `profit` and `buy_price`, not recomputed at higher precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub ticker: String,
    pub buy_date: NaiveDate,
    pub buy_price: Decimal,
    /// Note: for trades whose holding period runs past the end of the series,
    /// the sell price is the close of the last available bar but the recorded
    /// sell date is the buy date. Downstream statistics depend on this.
    pub sell_date: NaiveDate,
    pub sell_price: Decimal,
    /// The triggering percent change, rounded to 2 decimals.
    pub pct_drop: Decimal,
    /// The close of the trigger bar itself, rounded to 2 decimals.
    pub last_close_before_buy: Decimal,
    pub profit: Decimal,
    pub return_pct: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PriceField;
    use rust_decimal_macros::dec;

    fn bar(date: &str, close: Decimal) -> Bar {
        Bar {
            date: date.parse().unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume: Decimal::ZERO,
        }
    }

    #[test]
    fn validate_accepts_ordered_series() {
        let instrument = Instrument::new(
            "AAPL",
            vec![bar("2024-01-02", dec!(100)), bar("2024-01-03", dec!(101))],
        );
        assert!(instrument.validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_dates() {
        let instrument = Instrument::new(
            "AAPL",
            vec![bar("2024-01-02", dec!(100)), bar("2024-01-02", dec!(101))],
        );
        assert!(matches!(
            instrument.validate(),
            Err(CoreError::NonMonotonicDates { index: 1, .. })
        ));
    }

    #[test]
    fn validate_rejects_negative_prices() {
        let mut instrument = Instrument::new("AAPL", vec![bar("2024-01-02", dec!(100))]);
        instrument.bars[0].low = dec!(-0.01);
        assert!(matches!(
            instrument.validate(),
            Err(CoreError::NegativePrice { field: "low", .. })
        ));
    }

    #[test]
    fn price_field_reads_the_selected_column() {
        let mut b = bar("2024-01-02", dec!(10));
        b.open = dec!(9);
        assert_eq!(PriceField::Open.read(&b), dec!(9));
        assert_eq!(PriceField::default().read(&b), dec!(10));
    }
}
