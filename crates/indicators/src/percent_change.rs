use crate::error::IndicatorError;
use core_types::{Bar, PriceField};
use rust_decimal::Decimal;

/// Computes the percentage change of the selected price field over a lookback
/// window of `days_back` bars.
///
/// The result is aligned with `bars`: index `i` holds
/// `(field[i] - field[i - days_back]) / field[i - days_back] * 100` for
/// `i >= days_back`, and `None` for the warm-up indices `i < days_back`,
/// which have no defined change and must never be treated as triggers.
///
/// A zero reference price also yields `None` for that index: the change is
/// undefined there and can never satisfy a drop threshold.
pub fn percent_change(
    bars: &[Bar],
    days_back: usize,
    field: PriceField,
) -> Result<Vec<Option<Decimal>>, IndicatorError> {
    if days_back == 0 {
        return Err(IndicatorError::InvalidLookback(days_back));
    }

    let hundred = Decimal::from(100);
    let values = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let reference = bars.get(i.checked_sub(days_back)?)?;
            let base = field.read(reference);
            let current = field.read(bar);
            (current - base).checked_div(base).map(|r| r * hundred)
        })
        .collect();

    Ok(values)
}
