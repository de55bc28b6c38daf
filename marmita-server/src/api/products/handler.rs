//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use crate::db::repository::ProductRepository;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use shared::{AppError, AppResult};

/// GET /produtos - list all products
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.get_db());
    let products = repo.find_all().await.map_err(AppError::from)?;
    Ok(Json(products))
}

/// POST /produtos - create a product
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    validate_required_text(&payload.name, "nome", MAX_NAME_LEN)?;
    if payload.description.len() > MAX_DESCRIPTION_LEN {
        return Err(AppError::validation("descricao is too long"));
    }
    if payload.image_url.len() > MAX_URL_LEN {
        return Err(AppError::validation("imagem_url is too long"));
    }

    let repo = ProductRepository::new(state.get_db());
    let product = repo.create(payload).await.map_err(AppError::from)?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /produtos/{id} - partially update a product
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    validate_optional_text(&payload.name, "nome", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "descricao", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&payload.image_url, "imagem_url", MAX_URL_LEN)?;

    let repo = ProductRepository::new(state.get_db());
    let product = repo.update(&id, payload).await.map_err(AppError::from)?;
    Ok(Json(product))
}

/// DELETE /produtos/{id} - delete a product
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = ProductRepository::new(state.get_db());
    repo.delete(&id).await.map_err(AppError::from)?;
    Ok(StatusCode::NO_CONTENT)
}
