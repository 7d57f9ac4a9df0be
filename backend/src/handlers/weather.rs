//! Weather HTTP handlers

use axum::{extract::Query, Json};
use serde::Deserialize;

use super::today;
use crate::models::WeatherReport;
use crate::services::WeatherService;

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub location: Option<String>,
}

/// Current weather and forecast for a location
pub async fn get_weather(Query(query): Query<WeatherQuery>) -> Json<WeatherReport> {
    Json(WeatherService::new().report(query.location.as_deref(), today()))
}
