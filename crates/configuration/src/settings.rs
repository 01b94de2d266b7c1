use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section has defaults, so a missing `config.toml` (or a partial one)
/// still yields a usable configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub strategy: StrategyParams,
    pub data: DataSettings,
    pub report: ReportSettings,
}

/// The three parameters of the oversold trading rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StrategyParams {
    /// Trading days to hold a position after the buy bar.
    pub hold_period: usize,
    /// The percent-drop threshold, as a positive magnitude.
    pub percentage: Decimal,
    /// The lookback window, in bars, for the drop computation.
    pub days_back: usize,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            hold_period: 5,
            percentage: Decimal::from(5),
            days_back: 1,
        }
    }
}

/// Where the caller's already-fetched price series live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Directory of per-ticker CSV files (`<TICKER>.csv`).
    pub dir: PathBuf,
    /// The reference instrument for the buy-and-hold benchmark.
    pub benchmark_ticker: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            benchmark_ticker: "SPY".to_string(),
        }
    }
}

/// Where the reporter writes its run directories.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub output_dir: PathBuf,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("results"),
        }
    }
}
