//! Mandi price service backed by a fixed sample board

use rust_decimal::Decimal;

use crate::models::{CropType, MarketPrice};

/// (crop, rupees per quintal, change in tenths of a percent, market)
const SAMPLE_PRICES: [(&str, i64, i64, &str); 5] = [
    ("Rice", 2500, 25, "Delhi Mandi"),
    ("Wheat", 2200, -12, "Punjab Mandi"),
    ("Cotton", 5800, 32, "Gujarat Mandi"),
    ("Tomato", 1200, -58, "Karnataka Mandi"),
    ("Onion", 800, 85, "Maharashtra Mandi"),
];

#[derive(Clone, Default)]
pub struct MarketService;

impl MarketService {
    pub fn new() -> Self {
        Self
    }

    /// Current prices, optionally for a single crop
    pub fn prices(&self, crop: Option<&str>) -> Vec<MarketPrice> {
        SAMPLE_PRICES
            .iter()
            .filter(|(name, ..)| {
                crop.map_or(true, |query| CropType::parse(name).matches_loosely(query))
            })
            .map(|(name, price, change, market)| MarketPrice {
                crop: name.to_string(),
                price: Decimal::from(*price),
                change: Decimal::new(*change, 1),
                market: market.to_string(),
            })
            .collect()
    }
}
