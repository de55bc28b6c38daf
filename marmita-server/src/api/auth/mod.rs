//! Authentication Routes

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Build authentication router
pub fn router() -> Router<ServerState> {
    Router::new().route("/auth/login", post(handler::login))
}
