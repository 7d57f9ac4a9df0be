//! Mandi price models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Wholesale price quote for a crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketPrice {
    pub crop: String,
    /// Rupees per quintal
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Day-on-day change in percent
    #[serde(with = "rust_decimal::serde::float")]
    pub change: Decimal,
    pub market: String,
}
