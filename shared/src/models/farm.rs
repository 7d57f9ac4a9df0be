//! Farm plot models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CropType, HarvestSnapshot, SoilType};

/// A farm plot registered by a user
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FarmPlot {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub owner_id: Uuid,
    pub crop_type: CropType,
    pub soil_type: SoilType,
    /// Area in acres
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub area: Decimal,
    pub sowing_date: NaiveDate,
    pub status: FarmStatus,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle status of a plot as recorded by the farmer
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum FarmStatus {
    #[default]
    Growing,
    ReadyToHarvest,
    Harvested,
    Fallow,
}

impl std::fmt::Display for FarmStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FarmStatus::Growing => write!(f, "Growing"),
            FarmStatus::ReadyToHarvest => write!(f, "Ready to harvest"),
            FarmStatus::Harvested => write!(f, "Harvested"),
            FarmStatus::Fallow => write!(f, "Fallow"),
        }
    }
}

/// A plot together with its harvest countdown
#[derive(Debug, Clone, Serialize)]
pub struct FarmWithProgress {
    #[serde(flatten)]
    pub farm: FarmPlot,
    #[serde(flatten)]
    pub progress: HarvestSnapshot,
}
