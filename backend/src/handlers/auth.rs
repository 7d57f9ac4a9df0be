//! Authentication handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::models::User;
use crate::services::auth::{AuthSession, LoginInput, RegisterInput};
use crate::services::AuthService;
use crate::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

impl AuthResponse {
    fn new(message: &str, session: AuthSession) -> Self {
        Self {
            message: message.to_string(),
            token: session.token,
            token_type: session.token_type,
            expires_in: session.expires_in,
            user: session.user,
        }
    }
}

/// Register endpoint handler
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterInput>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let auth_service = AuthService::new(state.users.clone(), &state.config);
    let session = auth_service.register(body).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new("User registered successfully", session)),
    ))
}

/// Login endpoint handler
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginInput>,
) -> AppResult<Json<AuthResponse>> {
    let auth_service = AuthService::new(state.users.clone(), &state.config);
    let session = auth_service.login(body).await?;

    Ok(Json(AuthResponse::new("Login successful", session)))
}

/// Profile of the signed-in user
pub async fn me(State(state): State<AppState>, current_user: CurrentUser) -> AppResult<Json<User>> {
    let auth_service = AuthService::new(state.users.clone(), &state.config);
    let user = auth_service.current_user(current_user.0.user_id)?;
    Ok(Json(user))
}
