//! Marmita Order Server - order-taking backend for a meal-delivery business
//!
//! # Architecture Overview
//!
//! - **Database** (`db`): embedded SurrealDB storage with per-collection
//!   repositories (users, products, components, orders)
//! - **Domain core** (`orders`): pricing, composition validation and the
//!   order status lifecycle
//! - **Authentication** (`auth`): JWT + Argon2
//! - **HTTP API** (`api`): RESTful routes and handlers
//!
//! # Module Structure
//!
//! ```text
//! marmita-server/src/
//! ├── core/          # Config, state, server
//! ├── auth/          # JWT token service
//! ├── db/            # Database layer (models + repositories)
//! ├── orders/        # Pricing, composition, lifecycle
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # Logging, validation helpers
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export public types
pub use auth::JwtService;
pub use crate::core::{Config, Server, ServerState, build_app};
pub use orders::OrderService;

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
