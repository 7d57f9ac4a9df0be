//! Market price HTTP handlers

use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::models::MarketPrice;
use crate::services::MarketService;

#[derive(Debug, Deserialize)]
pub struct MarketQuery {
    pub crop: Option<String>,
}

/// Current mandi prices
pub async fn get_market_prices(Query(query): Query<MarketQuery>) -> Json<Vec<MarketPrice>> {
    Json(MarketService::new().prices(query.crop.as_deref()))
}
