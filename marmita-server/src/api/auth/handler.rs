//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::User;
use crate::db::repository::UserRepository;
use shared::AppError;

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response; the user serializes without its password hash
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Login handler
///
/// Authenticates user credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let repo = UserRepository::new(state.get_db());
    let user = repo.find_by_email(&req.email).await.map_err(AppError::from)?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent email enumeration
    let user = match user {
        Some(u) => {
            let password_valid = u
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            u
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let jwt_service = state.get_jwt_service();
    let user_id = user.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    let role = user.role.as_str();

    let token = jwt_service
        .generate_token(&user_id, &user.email, role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        user_id = %user_id,
        email = %user.email,
        role = %role,
        "User logged in successfully"
    );

    Ok(Json(LoginResponse { token, user }))
}
