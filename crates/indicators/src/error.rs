use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("Invalid lookback window: days_back must be at least 1, got {0}")]
    InvalidLookback(usize),
}
