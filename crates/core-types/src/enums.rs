use serde::{Deserialize, Serialize};

/// Selects which price column of a bar feeds a derived computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceField {
    Open,
    High,
    Low,
    Close,
}

impl PriceField {
    /// Reads the selected price out of a bar.
    pub fn read(&self, bar: &crate::structs::Bar) -> rust_decimal::Decimal {
        match self {
            PriceField::Open => bar.open,
            PriceField::High => bar.high,
            PriceField::Low => bar.low,
            PriceField::Close => bar.close,
        }
    }
}

impl Default for PriceField {
    fn default() -> Self {
        PriceField::Close
    }
}
