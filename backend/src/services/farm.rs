//! Farm plot service: registration, harvest countdown and growth charts

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    growth, CropType, FarmPlot, FarmStatus, FarmWithProgress, SoilType, WeekPoint,
};
use crate::store::{ActivityStore, FarmStore};

/// Farm service for managing a user's plots
#[derive(Clone)]
pub struct FarmService {
    farms: Arc<dyn FarmStore>,
    activities: Arc<dyn ActivityStore>,
}

/// Input for registering a plot
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFarmInput {
    pub crop_type: String,
    pub soil_type: String,
    pub area: Decimal,
    pub sowing_date: String,
    pub status: Option<FarmStatus>,
}

/// Input for updating a plot; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFarmInput {
    pub crop_type: Option<String>,
    pub soil_type: Option<String>,
    pub area: Option<Decimal>,
    pub sowing_date: Option<String>,
    pub status: Option<FarmStatus>,
}

impl FarmService {
    /// Create a new FarmService instance
    pub fn new(farms: Arc<dyn FarmStore>, activities: Arc<dyn ActivityStore>) -> Self {
        Self { farms, activities }
    }

    /// Get all plots of a user with their harvest countdown
    pub fn list_farms(&self, owner_id: Uuid, today: NaiveDate) -> AppResult<Vec<FarmWithProgress>> {
        let farms = self.farms.list_farms(owner_id)?;
        Ok(farms
            .into_iter()
            .map(|farm| with_progress(farm, today))
            .collect())
    }

    /// Get one plot with its harvest countdown
    pub fn get_farm(
        &self,
        owner_id: Uuid,
        farm_id: Uuid,
        today: NaiveDate,
    ) -> AppResult<FarmWithProgress> {
        let farm = self.find(owner_id, farm_id)?;
        Ok(with_progress(farm, today))
    }

    /// Register a new plot
    pub fn create_farm(
        &self,
        owner_id: Uuid,
        input: CreateFarmInput,
        today: NaiveDate,
    ) -> AppResult<FarmWithProgress> {
        shared::validate_label("cropType", &input.crop_type)?;
        shared::validate_label("soilType", &input.soil_type)?;
        shared::validate_area(input.area)?;
        let sowing_date = shared::parse_sowing_date(&input.sowing_date)?;

        let farm = FarmPlot {
            id: Uuid::new_v4(),
            owner_id,
            crop_type: CropType::parse(&input.crop_type),
            soil_type: SoilType::parse(&input.soil_type),
            area: input.area,
            sowing_date,
            status: input.status.unwrap_or_default(),
            created_at: Utc::now(),
        };
        warn_on_fallback(&farm);

        let farm = self.farms.insert_farm(farm)?;
        tracing::info!(
            farm_id = %farm.id,
            crop = %farm.crop_type,
            status = %farm.status,
            "Registered farm plot"
        );

        Ok(with_progress(farm, today))
    }

    /// Update a plot
    pub fn update_farm(
        &self,
        owner_id: Uuid,
        farm_id: Uuid,
        input: UpdateFarmInput,
        today: NaiveDate,
    ) -> AppResult<FarmWithProgress> {
        let mut farm = self.find(owner_id, farm_id)?;

        if let Some(crop_type) = input.crop_type {
            shared::validate_label("cropType", &crop_type)?;
            farm.crop_type = CropType::parse(&crop_type);
        }
        if let Some(soil_type) = input.soil_type {
            shared::validate_label("soilType", &soil_type)?;
            farm.soil_type = SoilType::parse(&soil_type);
        }
        if let Some(area) = input.area {
            shared::validate_area(area)?;
            farm.area = area;
        }
        if let Some(sowing_date) = input.sowing_date {
            farm.sowing_date = shared::parse_sowing_date(&sowing_date)?;
        }
        if let Some(status) = input.status {
            farm.status = status;
        }
        warn_on_fallback(&farm);

        let farm = self
            .farms
            .update_farm(farm)?
            .ok_or_else(|| AppError::NotFound("Farm".to_string()))?;
        tracing::info!(farm_id = %farm.id, status = %farm.status, "Updated farm plot");

        Ok(with_progress(farm, today))
    }

    /// Delete a plot together with its activity log
    pub fn delete_farm(&self, owner_id: Uuid, farm_id: Uuid) -> AppResult<()> {
        if !self.farms.delete_farm(owner_id, farm_id)? {
            return Err(AppError::NotFound("Farm".to_string()));
        }

        let removed = self.activities.delete_for_farm(owner_id, farm_id)?;
        tracing::info!(farm_id = %farm_id, activities_removed = removed, "Deleted farm plot");

        Ok(())
    }

    /// Six-week growth chart for a plot
    pub fn growth_series(
        &self,
        owner_id: Uuid,
        farm_id: Uuid,
        today: NaiveDate,
    ) -> AppResult<Vec<WeekPoint>> {
        let farm = self.find(owner_id, farm_id)?;
        Ok(growth::weekly_series(
            &farm.crop_type,
            &farm.soil_type,
            farm.sowing_date,
            today,
        ))
    }

    fn find(&self, owner_id: Uuid, farm_id: Uuid) -> AppResult<FarmPlot> {
        self.farms
            .get_farm(owner_id, farm_id)?
            .ok_or_else(|| AppError::NotFound("Farm".to_string()))
    }
}

fn with_progress(farm: FarmPlot, today: NaiveDate) -> FarmWithProgress {
    let progress = growth::snapshot(&farm.crop_type, &farm.soil_type, farm.sowing_date, today);
    FarmWithProgress { farm, progress }
}

/// Unknown crop or soil names are accepted but estimated with default profiles
fn warn_on_fallback(farm: &FarmPlot) {
    if !farm.crop_type.is_known() {
        tracing::warn!(crop = %farm.crop_type, "Unknown crop type, using default growth profile");
    }
    if !farm.soil_type.is_known() {
        tracing::warn!(soil = %farm.soil_type, "Unknown soil type, using Loamy profile");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryActivityStore, MemoryFarmStore};

    fn service() -> FarmService {
        FarmService::new(
            Arc::new(MemoryFarmStore::new()),
            Arc::new(MemoryActivityStore::new()),
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    fn input(crop: &str, soil: &str, sowing: &str) -> CreateFarmInput {
        CreateFarmInput {
            crop_type: crop.to_string(),
            soil_type: soil.to_string(),
            area: Decimal::new(25, 1),
            sowing_date: sowing.to_string(),
            status: None,
        }
    }

    #[test]
    fn test_create_farm_reports_progress() {
        let service = service();
        let owner = Uuid::new_v4();

        // 2024-07-03 is 60 days before 2024-09-01
        let created = service
            .create_farm(owner, input("Rice", "Loamy", "2024-07-03"), today())
            .unwrap();

        assert_eq!(created.farm.status, FarmStatus::Growing);
        assert_eq!(created.progress.progress, 50.0);
        assert_eq!(created.progress.days_to_harvest, 60);
    }

    #[test]
    fn test_create_farm_rejects_bad_input() {
        let service = service();
        let owner = Uuid::new_v4();

        let mut zero_area = input("Rice", "Loamy", "2024-07-03");
        zero_area.area = Decimal::ZERO;
        assert!(matches!(
            service.create_farm(owner, zero_area, today()),
            Err(AppError::Validation { field, .. }) if field == "area"
        ));

        assert!(matches!(
            service.create_farm(owner, input("Rice", "Loamy", "03/07/2024"), today()),
            Err(AppError::Validation { field, .. }) if field == "sowingDate"
        ));

        assert!(matches!(
            service.create_farm(owner, input(" ", "Loamy", "2024-07-03"), today()),
            Err(AppError::Validation { field, .. }) if field == "cropType"
        ));
    }

    #[test]
    fn test_unknown_crop_is_stored_verbatim() {
        let service = service();
        let owner = Uuid::new_v4();

        let created = service
            .create_farm(owner, input("Millet", "Peat", "2024-08-02"), today())
            .unwrap();

        assert_eq!(created.farm.crop_type.to_string(), "Millet");
        // default profile: 100 days
        assert_eq!(created.progress.days_to_harvest, 70);
    }

    #[test]
    fn test_lowercase_crop_uses_default_duration() {
        let service = service();
        let owner = Uuid::new_v4();

        // 60 days sown; "rice" is not the Rice table entry
        let created = service
            .create_farm(owner, input("rice", "Loamy", "2024-07-03"), today())
            .unwrap();

        assert_eq!(created.farm.crop_type, CropType::Other("rice".to_string()));
        assert_eq!(created.progress.progress, 60.0);
        assert_eq!(created.progress.days_to_harvest, 40);
    }

    #[test]
    fn test_list_is_owner_scoped() {
        let service = service();
        let owner = Uuid::new_v4();
        service
            .create_farm(owner, input("Wheat", "Clay", "2024-08-01"), today())
            .unwrap();
        service
            .create_farm(owner, input("Cotton", "Sandy", "2024-08-20"), today())
            .unwrap();

        assert_eq!(service.list_farms(owner, today()).unwrap().len(), 2);
        assert!(service.list_farms(Uuid::new_v4(), today()).unwrap().is_empty());
    }

    #[test]
    fn test_update_farm_changes_only_given_fields() {
        let service = service();
        let owner = Uuid::new_v4();
        let created = service
            .create_farm(owner, input("Maize", "Loamy", "2024-07-03"), today())
            .unwrap();

        let updated = service
            .update_farm(
                owner,
                created.farm.id,
                UpdateFarmInput {
                    status: Some(FarmStatus::ReadyToHarvest),
                    area: Some(Decimal::from(4)),
                    ..Default::default()
                },
                today(),
            )
            .unwrap();

        assert_eq!(updated.farm.status, FarmStatus::ReadyToHarvest);
        assert_eq!(updated.farm.area, Decimal::from(4));
        assert_eq!(updated.farm.crop_type, CropType::Maize);
        assert_eq!(updated.farm.sowing_date, created.farm.sowing_date);
    }

    #[test]
    fn test_other_owner_cannot_touch_farm() {
        let service = service();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let created = service
            .create_farm(owner, input("Onion", "Clay", "2024-07-03"), today())
            .unwrap();
        let id = created.farm.id;

        assert!(matches!(
            service.get_farm(stranger, id, today()),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.growth_series(stranger, id, today()),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_farm(stranger, id),
            Err(AppError::NotFound(_))
        ));
        assert!(service.get_farm(owner, id, today()).is_ok());
    }

    #[test]
    fn test_growth_series_for_stored_farm() {
        let service = service();
        let owner = Uuid::new_v4();
        // 10 days before today
        let created = service
            .create_farm(owner, input("Cotton", "Sandy", "2024-08-22"), today())
            .unwrap();

        let series = service.growth_series(owner, created.farm.id, today()).unwrap();
        assert_eq!(series.len(), 6);
        assert_eq!(series[0].progress, 15.0);
        assert_eq!(series[1].progress, 12.0);
    }

    #[test]
    fn test_delete_farm_twice() {
        let service = service();
        let owner = Uuid::new_v4();
        let created = service
            .create_farm(owner, input("Potato", "Loamy", "2024-07-03"), today())
            .unwrap();

        service.delete_farm(owner, created.farm.id).unwrap();
        assert!(matches!(
            service.delete_farm(owner, created.farm.id),
            Err(AppError::NotFound(_))
        ));
    }
}
