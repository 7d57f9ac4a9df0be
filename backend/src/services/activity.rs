//! Activity log service for irrigation, fertilizer and other field work

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Activity, ActivityKind};
use crate::store::{ActivityStore, FarmStore};

#[derive(Clone)]
pub struct ActivityService {
    activities: Arc<dyn ActivityStore>,
    farms: Arc<dyn FarmStore>,
}

/// Input for logging an activity
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogActivityInput {
    pub farm_id: Option<Uuid>,
    pub kind: ActivityKind,
    pub amount: Option<Decimal>,
    pub method: Option<String>,
    pub notes: Option<String>,
    /// Defaults to today
    pub performed_on: Option<String>,
}

impl ActivityService {
    pub fn new(activities: Arc<dyn ActivityStore>, farms: Arc<dyn FarmStore>) -> Self {
        Self { activities, farms }
    }

    /// Record an activity. A referenced plot must belong to the caller.
    pub fn log_activity(
        &self,
        owner_id: Uuid,
        input: LogActivityInput,
        today: NaiveDate,
    ) -> AppResult<Activity> {
        if let Some(farm_id) = input.farm_id {
            if self.farms.get_farm(owner_id, farm_id)?.is_none() {
                return Err(AppError::NotFound("Farm".to_string()));
            }
        }
        if let Some(amount) = input.amount {
            shared::validate_positive("amount", amount)?;
        }
        let performed_on = match input.performed_on.as_deref() {
            Some(date) => shared::parse_iso_date("performedOn", date)?,
            None => today,
        };
        let method = non_blank(input.method);
        let notes = non_blank(input.notes);

        let activity = self.activities.insert_activity(Activity {
            id: Uuid::new_v4(),
            owner_id,
            farm_id: input.farm_id,
            kind: input.kind,
            amount: input.amount,
            method,
            notes,
            performed_on,
            logged_at: Utc::now(),
        })?;

        tracing::debug!(activity_id = %activity.id, kind = ?activity.kind, "Logged activity");
        Ok(activity)
    }

    /// Activities of a user, newest first
    pub fn list_activities(&self, owner_id: Uuid, farm_id: Option<Uuid>) -> AppResult<Vec<Activity>> {
        self.activities.list_activities(owner_id, farm_id)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CropType, FarmPlot, FarmStatus, SoilType};
    use crate::store::{MemoryActivityStore, MemoryFarmStore};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    fn setup() -> (ActivityService, Uuid, Uuid) {
        let farms = Arc::new(MemoryFarmStore::new());
        let owner = Uuid::new_v4();
        let farm = farms
            .insert_farm(FarmPlot {
                id: Uuid::new_v4(),
                owner_id: owner,
                crop_type: CropType::Rice,
                soil_type: SoilType::Clay,
                area: Decimal::from(3),
                sowing_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
                status: FarmStatus::Growing,
                created_at: Utc::now(),
            })
            .unwrap();
        let service = ActivityService::new(Arc::new(MemoryActivityStore::new()), farms);
        (service, owner, farm.id)
    }

    fn irrigation(farm_id: Option<Uuid>) -> LogActivityInput {
        LogActivityInput {
            farm_id,
            kind: ActivityKind::Irrigation,
            amount: Some(Decimal::from(500)),
            method: Some(" drip ".to_string()),
            notes: Some("  drip line, morning  ".to_string()),
            performed_on: None,
        }
    }

    #[test]
    fn test_log_activity_defaults_date_and_trims_notes() {
        let (service, owner, farm_id) = setup();
        let activity = service.log_activity(owner, irrigation(Some(farm_id)), today()).unwrap();

        assert_eq!(activity.performed_on, today());
        assert_eq!(activity.notes.as_deref(), Some("drip line, morning"));
        assert_eq!(activity.method.as_deref(), Some("drip"));
        assert_eq!(service.list_activities(owner, Some(farm_id)).unwrap().len(), 1);
    }

    #[test]
    fn test_blank_method_is_dropped() {
        let (service, owner, farm_id) = setup();
        let mut input = irrigation(Some(farm_id));
        input.method = Some("   ".to_string());

        let activity = service.log_activity(owner, input, today()).unwrap();
        assert_eq!(activity.method, None);
    }

    #[test]
    fn test_log_activity_for_foreign_farm_fails() {
        let (service, _owner, farm_id) = setup();
        let err = service
            .log_activity(Uuid::new_v4(), irrigation(Some(farm_id)), today())
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_log_activity_validates_amount_and_date() {
        let (service, owner, _) = setup();

        let mut negative = irrigation(None);
        negative.amount = Some(Decimal::from(-5));
        assert!(matches!(
            service.log_activity(owner, negative, today()),
            Err(AppError::Validation { field, .. }) if field == "amount"
        ));

        let mut bad_date = irrigation(None);
        bad_date.performed_on = Some("last week".to_string());
        assert!(matches!(
            service.log_activity(owner, bad_date, today()),
            Err(AppError::Validation { field, .. }) if field == "performedOn"
        ));
    }
}
