//! Authentication service for user registration, login, and token management

use std::sync::Arc;

use bcrypt::{hash, verify};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::store::UserStore;

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    jwt_secret: String,
    token_expiry_days: i64,
    bcrypt_cost: u32,
}

/// Input for registering a new user
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Email address is not valid"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[serde(default)]
    pub location: String,
}

/// Input for logging in
#[derive(Debug, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // User ID
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token plus the account it was issued for
#[derive(Debug, Serialize)]
pub struct AuthSession {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(users: Arc<dyn UserStore>, config: &Config) -> Self {
        Self {
            users,
            jwt_secret: config.jwt.secret.clone(),
            token_expiry_days: config.jwt.token_expiry_days,
            bcrypt_cost: config.auth.bcrypt_cost,
        }
    }

    /// Register a new user and sign them in
    pub async fn register(&self, input: RegisterInput) -> AppResult<AuthSession> {
        input.validate()?;

        let email = input.email.trim().to_lowercase();
        if self.users.find_by_email(&email)?.is_some() {
            return Err(AppError::DuplicateEntry("email".to_string()));
        }

        let password_hash = self.hash_password(input.password).await?;

        let user = self.users.insert_user(User {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            email,
            password_hash,
            location: input.location.trim().to_string(),
            created_at: Utc::now(),
        })?;

        tracing::info!(user_id = %user.id, "Registered new user");

        self.issue_session(user)
    }

    /// Authenticate user with email and password
    pub async fn login(&self, input: LoginInput) -> AppResult<AuthSession> {
        input.validate()?;

        let user = self
            .users
            .find_by_email(&input.email)?
            .ok_or(AppError::InvalidCredentials)?;

        let password_hash = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || verify(input.password, &password_hash))
            .await
            .map_err(|e| AppError::Internal(format!("Password verification task failed: {}", e)))?
            .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;

        if !valid {
            tracing::debug!(user_id = %user.id, "Rejected login with wrong password");
            return Err(AppError::InvalidCredentials);
        }

        self.issue_session(user)
    }

    /// Validate access token and return claims
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => AppError::InvalidToken,
        })?;

        Ok(token_data.claims)
    }

    /// Look up the account behind a validated token
    pub fn current_user(&self, user_id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(user_id)?
            .ok_or_else(|| AppError::NotFound("User".to_string()))
    }

    async fn hash_password(&self, password: String) -> AppResult<String> {
        let cost = self.bcrypt_cost;
        tokio::task::spawn_blocking(move || hash(password, cost))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
    }

    fn issue_session(&self, user: User) -> AppResult<AuthSession> {
        let token = self.generate_token(&user)?;
        Ok(AuthSession {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_expiry_days * 24 * 60 * 60,
            user,
        })
    }

    /// Generate a signed access token
    fn generate_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            exp: (now + Duration::days(self.token_expiry_days)).timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
    }
}
