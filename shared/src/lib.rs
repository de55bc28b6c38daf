//! Shared types for the marmita backend
//!
//! Error codes, error types and the unified API response envelope used by
//! the server crate.

pub mod error;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
