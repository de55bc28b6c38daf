//! Order status lifecycle
//!
//! Linear progression with no branching:
//! RECEBIDO → EM_PREPARO → PRONTO → ENTREGUE. A transition is valid only to
//! the immediate successor of the current status; ENTREGUE is terminal.

use crate::db::models::OrderStatus;
use shared::{AppError, AppResult, ErrorCode};

impl OrderStatus {
    /// The only status this one may advance to, None for the terminal state
    pub const fn successor(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Received => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

/// Validate that `target` is the immediate successor of `current`
///
/// Backward moves, skips and transitions out of the terminal state are all
/// rejected.
pub fn validate_transition(current: OrderStatus, target: OrderStatus) -> AppResult<()> {
    if current.successor() == Some(target) {
        return Ok(());
    }
    Err(AppError::with_message(
        ErrorCode::InvalidStatusTransition,
        format!("Cannot move order from {} to {}", current, target),
    )
    .with_detail("from", current.as_str())
    .with_detail("to", target.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions_accepted() {
        assert!(validate_transition(OrderStatus::Received, OrderStatus::Preparing).is_ok());
        assert!(validate_transition(OrderStatus::Preparing, OrderStatus::Ready).is_ok());
        assert!(validate_transition(OrderStatus::Ready, OrderStatus::Delivered).is_ok());
    }

    #[test]
    fn test_skipping_a_step_rejected() {
        let err = validate_transition(OrderStatus::Received, OrderStatus::Ready)
            .expect_err("skip must fail");
        assert_eq!(err.code, ErrorCode::InvalidStatusTransition);

        assert!(validate_transition(OrderStatus::Received, OrderStatus::Delivered).is_err());
        assert!(validate_transition(OrderStatus::Preparing, OrderStatus::Delivered).is_err());
    }

    #[test]
    fn test_backward_transitions_rejected() {
        assert!(validate_transition(OrderStatus::Preparing, OrderStatus::Received).is_err());
        assert!(validate_transition(OrderStatus::Ready, OrderStatus::Preparing).is_err());
        assert!(validate_transition(OrderStatus::Delivered, OrderStatus::Ready).is_err());
    }

    #[test]
    fn test_self_transition_rejected() {
        assert!(validate_transition(OrderStatus::Received, OrderStatus::Received).is_err());
        assert!(validate_transition(OrderStatus::Delivered, OrderStatus::Delivered).is_err());
    }

    #[test]
    fn test_delivered_is_terminal() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert_eq!(OrderStatus::Delivered.successor(), None);
        assert!(!OrderStatus::Received.is_terminal());
    }
}
