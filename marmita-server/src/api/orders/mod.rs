//! Order API module
//!
//! Creation computes pricing and lifecycle fields server-side; the only
//! mutation afterwards is the status PATCH.

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/pedidos", order_routes())
}

fn order_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", patch(handler::update_status))
}
