//! Component API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Component, ComponentCreate, ComponentUpdate};
use crate::db::repository::ComponentRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_optional_text, validate_required_text};
use shared::{AppError, AppResult};

/// GET /componentes - list all components
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Component>>> {
    let repo = ComponentRepository::new(state.get_db());
    let components = repo.find_all().await.map_err(AppError::from)?;
    Ok(Json(components))
}

/// POST /componentes - create a component
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ComponentCreate>,
) -> AppResult<(StatusCode, Json<Component>)> {
    validate_required_text(&payload.name, "nome", MAX_NAME_LEN)?;
    if payload.extra_price_cents < 0 {
        return Err(AppError::validation(
            "preco_adicional_centavos must not be negative",
        ));
    }

    let repo = ComponentRepository::new(state.get_db());
    let component = repo.create(payload).await.map_err(AppError::from)?;

    Ok((StatusCode::CREATED, Json(component)))
}

/// PUT /componentes/{id} - partially update a component
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ComponentUpdate>,
) -> AppResult<Json<Component>> {
    validate_optional_text(&payload.name, "nome", MAX_NAME_LEN)?;
    if let Some(price) = payload.extra_price_cents
        && price < 0
    {
        return Err(AppError::validation(
            "preco_adicional_centavos must not be negative",
        ));
    }

    let repo = ComponentRepository::new(state.get_db());
    let component = repo.update(&id, payload).await.map_err(AppError::from)?;
    Ok(Json(component))
}

/// DELETE /componentes/{id} - delete a component
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = ComponentRepository::new(state.get_db());
    repo.delete(&id).await.map_err(AppError::from)?;
    Ok(StatusCode::NO_CONTENT)
}
