//! Activity log HTTP handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use super::today;
use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::models::Activity;
use crate::services::activity::LogActivityInput;
use crate::services::ActivityService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    pub farm_id: Option<Uuid>,
}

/// List the current user's activities, newest first
pub async fn list_activities(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<ActivityQuery>,
) -> AppResult<Json<Vec<Activity>>> {
    let service = ActivityService::new(state.activities.clone(), state.farms.clone());
    let activities = service.list_activities(current_user.0.user_id, query.farm_id)?;
    Ok(Json(activities))
}

/// Log a field activity
pub async fn log_activity(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<LogActivityInput>,
) -> AppResult<(StatusCode, Json<Activity>)> {
    let service = ActivityService::new(state.activities.clone(), state.farms.clone());
    let activity = service.log_activity(current_user.0.user_id, input, today())?;
    Ok((StatusCode::CREATED, Json(activity)))
}
