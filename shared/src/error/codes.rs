//! Unified error codes for the marmita backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: User errors
//! - 3xxx: Catalog errors (products, components)
//! - 4xxx: Order errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid identifier format
    InvalidId = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is disabled
    AccountDisabled = 1005,

    // ==================== 2xxx: User ====================
    /// User not found
    UserNotFound = 2001,
    /// Email is already registered
    EmailAlreadyRegistered = 2002,

    // ==================== 3xxx: Catalog ====================
    /// Product not found
    ProductNotFound = 3001,
    /// Component not found
    ComponentNotFound = 3002,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no line items
    EmptyOrder = 4002,
    /// Composition rule exceeded for a composite product
    CompositionRuleViolated = 4003,
    /// Status transition is not the immediate successor
    InvalidStatusTransition = 4004,
    /// Delivery order without a delivery address
    MissingDeliveryAddress = 4005,
    /// Status changed concurrently, conditional update lost
    StatusConflict = 4006,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidId => "Invalid identifier",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::AccountDisabled => "Account is disabled",

            // User
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::EmailAlreadyRegistered => "Email is already registered",

            // Catalog
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ComponentNotFound => "Component not found",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::EmptyOrder => "Order must contain at least one item",
            ErrorCode::CompositionRuleViolated => "Composition rule violated",
            ErrorCode::InvalidStatusTransition => "Invalid order status transition",
            ErrorCode::MissingDeliveryAddress => "Delivery orders require an address",
            ErrorCode::StatusConflict => "Order status was changed concurrently",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => ErrorCode::Success,
            1 => ErrorCode::Unknown,
            2 => ErrorCode::ValidationFailed,
            3 => ErrorCode::NotFound,
            4 => ErrorCode::AlreadyExists,
            5 => ErrorCode::InvalidRequest,
            6 => ErrorCode::InvalidId,
            7 => ErrorCode::RequiredField,
            8 => ErrorCode::ValueOutOfRange,

            1001 => ErrorCode::NotAuthenticated,
            1002 => ErrorCode::InvalidCredentials,
            1003 => ErrorCode::TokenExpired,
            1004 => ErrorCode::TokenInvalid,
            1005 => ErrorCode::AccountDisabled,

            2001 => ErrorCode::UserNotFound,
            2002 => ErrorCode::EmailAlreadyRegistered,

            3001 => ErrorCode::ProductNotFound,
            3002 => ErrorCode::ComponentNotFound,

            4001 => ErrorCode::OrderNotFound,
            4002 => ErrorCode::EmptyOrder,
            4003 => ErrorCode::CompositionRuleViolated,
            4004 => ErrorCode::InvalidStatusTransition,
            4005 => ErrorCode::MissingDeliveryAddress,
            4006 => ErrorCode::StatusConflict,

            9001 => ErrorCode::InternalError,
            9002 => ErrorCode::DatabaseError,
            9003 => ErrorCode::ConfigError,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidCredentials,
            ErrorCode::EmailAlreadyRegistered,
            ErrorCode::CompositionRuleViolated,
            ErrorCode::DatabaseError,
        ] {
            let value: u16 = code.into();
            assert_eq!(ErrorCode::try_from(value), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(777), Err(InvalidErrorCode(777)));
    }
}
