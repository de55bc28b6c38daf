//! Health check route

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Health check router - public, no auth
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (ok | error)
    status: &'static str,
    /// Crate version
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
