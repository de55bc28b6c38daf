//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: User errors
/// - 3xxx: Catalog errors
/// - 4xxx: Order errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// User errors (2xxx)
    User,
    /// Catalog errors (3xxx)
    Catalog,
    /// Order errors (4xxx)
    Order,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::User,
            3000..4000 => Self::Catalog,
            4000..5000 => Self::Order,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    /// Get the category of this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ranges() {
        assert_eq!(ErrorCode::ValidationFailed.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::InvalidCredentials.category(), ErrorCategory::Auth);
        assert_eq!(ErrorCode::EmailAlreadyRegistered.category(), ErrorCategory::User);
        assert_eq!(ErrorCode::ProductNotFound.category(), ErrorCategory::Catalog);
        assert_eq!(ErrorCode::InvalidStatusTransition.category(), ErrorCategory::Order);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }
}
