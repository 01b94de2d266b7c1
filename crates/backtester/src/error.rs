use thiserror::Error;

#[derive(Error, Debug)]
pub enum BacktestError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Malformed input series: {0}")]
    MalformedSeries(#[from] core_types::CoreError),

    #[error("Indicator computation failed: {0}")]
    Indicator(#[from] indicators::IndicatorError),

    #[error("Buy price for '{ticker}' on {date} is zero; the trade return is undefined")]
    ZeroBuyPrice {
        ticker: String,
        date: chrono::NaiveDate,
    },
}
