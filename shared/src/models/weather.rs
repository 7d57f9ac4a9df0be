//! Weather report models

use serde::{Deserialize, Serialize};

/// Current conditions and a short forecast for a location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub location: String,
    pub temperature: i32,
    pub humidity: i32,
    pub wind_speed: i32,
    pub condition: String,
    pub forecast: Vec<DailyForecast>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub condition: String,
}
