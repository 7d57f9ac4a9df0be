//! Farm plot HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use super::today;
use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::models::{FarmWithProgress, WeekPoint};
use crate::services::farm::{CreateFarmInput, UpdateFarmInput};
use crate::services::FarmService;
use crate::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFarmResponse {
    pub message: String,
    pub farm_id: Uuid,
    pub farm: FarmWithProgress,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn farm_service(state: &AppState) -> FarmService {
    FarmService::new(state.farms.clone(), state.activities.clone())
}

/// List all plots of the current user
pub async fn list_farms(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<FarmWithProgress>>> {
    let farms = farm_service(&state).list_farms(current_user.0.user_id, today())?;
    Ok(Json(farms))
}

/// Register a new plot
pub async fn create_farm(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateFarmInput>,
) -> AppResult<(StatusCode, Json<CreateFarmResponse>)> {
    let farm = farm_service(&state).create_farm(current_user.0.user_id, input, today())?;

    Ok((
        StatusCode::CREATED,
        Json(CreateFarmResponse {
            message: "Farm added successfully".to_string(),
            farm_id: farm.farm.id,
            farm,
        }),
    ))
}

/// Get a specific plot
pub async fn get_farm(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(farm_id): Path<Uuid>,
) -> AppResult<Json<FarmWithProgress>> {
    let farm = farm_service(&state).get_farm(current_user.0.user_id, farm_id, today())?;
    Ok(Json(farm))
}

/// Update a plot
pub async fn update_farm(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(farm_id): Path<Uuid>,
    Json(input): Json<UpdateFarmInput>,
) -> AppResult<Json<FarmWithProgress>> {
    let farm = farm_service(&state).update_farm(current_user.0.user_id, farm_id, input, today())?;
    Ok(Json(farm))
}

/// Delete a plot
pub async fn delete_farm(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(farm_id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    farm_service(&state).delete_farm(current_user.0.user_id, farm_id)?;
    Ok(Json(MessageResponse {
        message: "Farm deleted successfully".to_string(),
    }))
}

/// Six-week growth chart for a plot
pub async fn get_growth_data(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(farm_id): Path<Uuid>,
) -> AppResult<Json<Vec<WeekPoint>>> {
    let series = farm_service(&state).growth_series(current_user.0.user_id, farm_id, today())?;
    Ok(Json(series))
}
