//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate, OrderStatusUpdate};
use crate::db::repository::OrderRepository;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use shared::{AppError, AppResult, ErrorCode};

/// POST /pedidos - create an order
///
/// The order code, creation timestamp, initial status and all money fields
/// are computed server-side.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<Order>)> {
    validate_required_text(&payload.customer.name, "cliente.nome", MAX_NAME_LEN)?;
    validate_required_text(&payload.customer.phone, "cliente.telefone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(
        &payload.customer.tax_document,
        "cliente.cpf_nota",
        MAX_SHORT_TEXT_LEN,
    )?;
    if let Some(address) = &payload.delivery_address {
        validate_required_text(&address.street, "entrega.logradouro", MAX_ADDRESS_LEN)?;
        validate_required_text(&address.number, "entrega.numero", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&address.district, "entrega.bairro", MAX_NAME_LEN)?;
    }

    let order = state.order_service().create_order(payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /pedidos - list all orders
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.get_db());
    let orders = repo.find_all().await.map_err(AppError::from)?;
    Ok(Json(orders))
}

/// GET /pedidos/{id} - read one order
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.get_db());
    let order = repo
        .find_by_id(&id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::OrderNotFound, format!("Order {} not found", id))
        })?;
    Ok(Json(order))
}

/// PATCH /pedidos/{id}/status - advance the order status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let order = state
        .order_service()
        .advance_status(&id, payload.status)
        .await?;
    Ok(Json(order))
}
