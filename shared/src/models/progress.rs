//! Derived growth outputs shown on the dashboard

use serde::{Deserialize, Serialize};

/// Harvest progress at a given date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarvestSnapshot {
    /// Percentage of the harvest duration elapsed, 0-100, one decimal
    pub progress: f64,
    pub days_to_harvest: i64,
}

/// One point of the six-week growth chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPoint {
    pub week: u32,
    pub progress: f64,
    pub soil_moisture: f64,
    pub rainfall: f64,
}
