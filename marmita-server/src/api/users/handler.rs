//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::{User, UserCreate, UserUpdate};
use crate::db::repository::UserRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use shared::{AppError, AppResult};

/// GET /usuarios - list all users
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<User>>> {
    let repo = UserRepository::new(state.get_db());
    let users = repo.find_all().await.map_err(AppError::from)?;
    Ok(Json(users))
}

/// POST /usuarios - create a user
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<(StatusCode, Json<User>)> {
    payload
        .validate()
        .map_err(|e| AppError::validation(format!("Invalid user payload: {e}")))?;
    validate_required_text(&payload.name, "nome", MAX_NAME_LEN)?;
    validate_required_text(&payload.password, "senha", MAX_PASSWORD_LEN)?;
    validate_required_text(&payload.phone, "telefone", MAX_SHORT_TEXT_LEN)?;

    let repo = UserRepository::new(state.get_db());
    let user = repo.create(payload).await.map_err(AppError::from)?;

    tracing::info!(email = %user.email, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /usuarios/{id} - partially update a user
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<User>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(format!("Invalid user payload: {e}")))?;
    validate_optional_text(&payload.name, "nome", MAX_NAME_LEN)?;
    validate_optional_text(&payload.phone, "telefone", MAX_SHORT_TEXT_LEN)?;

    let repo = UserRepository::new(state.get_db());
    let user = repo.update(&id, payload).await.map_err(AppError::from)?;
    Ok(Json(user))
}

/// DELETE /usuarios/{id} - delete a user
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = UserRepository::new(state.get_db());
    repo.delete(&id).await.map_err(AppError::from)?;
    Ok(StatusCode::NO_CONTENT)
}
