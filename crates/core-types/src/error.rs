use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Series for '{ticker}' is not in strictly increasing date order at bar {index} ({date})")]
    NonMonotonicDates {
        ticker: String,
        index: usize,
        date: chrono::NaiveDate,
    },

    #[error("Series for '{ticker}' has a negative {field} price at bar {index}")]
    NegativePrice {
        ticker: String,
        field: &'static str,
        index: usize,
    },
}
