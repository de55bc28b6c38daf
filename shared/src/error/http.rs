//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::UserNotFound
            | Self::ProductNotFound
            | Self::ComponentNotFound
            | Self::OrderNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::EmailAlreadyRegistered
            | Self::StatusConflict => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::AccountDisabled => StatusCode::UNAUTHORIZED,

            // 422 Unprocessable Entity (business rule violations)
            Self::InvalidStatusTransition => StatusCode::UNPROCESSABLE_ENTITY,

            // 500 Internal Server Error
            Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ErrorCode::ValidationFailed.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::InvalidCredentials.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::ComponentNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::EmailAlreadyRegistered.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::InvalidStatusTransition.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
