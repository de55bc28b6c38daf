//! API route module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`auth`] - login
//! - [`users`] - user management
//! - [`components`] - meal component management
//! - [`products`] - product management
//! - [`orders`] - order creation, listing and status changes

pub mod auth;
pub mod components;
pub mod health;
pub mod orders;
pub mod products;
pub mod users;

// Re-export common types for handlers
pub use shared::{AppError, AppResult};
