//! Field activity log models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged field activity, optionally tied to one plot
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub owner_id: Uuid,
    pub farm_id: Option<Uuid>,
    pub kind: ActivityKind,
    /// Quantity applied (litres of water, kg of fertilizer, ...)
    #[serde(
        serialize_with = "rust_decimal::serde::float_option::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    /// How the work was done: "drip", "canal", "sprinkler", "foliar spray"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    pub notes: Option<String>,
    pub performed_on: NaiveDate,
    pub logged_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Sowing,
    Irrigation,
    Fertilization,
    PestControl,
    Harvest,
    Other,
}
