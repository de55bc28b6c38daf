//! Order pricing
//!
//! All money values are integer cents. The delivery fee is a fixed surcharge
//! applied only to DELIVERY orders; the invariant
//! `total == subtotal + fee` holds for every stored order.

use crate::db::models::{DeliveryMode, LineItem};
use shared::{AppError, AppResult, ErrorCode};

/// Computed money fields of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub products_subtotal_cents: i64,
    pub delivery_fee_cents: i64,
    pub total_cents: i64,
}

/// Compute the money fields for an order creation request
///
/// Rejects empty orders, non-positive quantities and negative unit prices.
pub fn compute_totals(
    items: &[LineItem],
    mode: DeliveryMode,
    delivery_fee_cents: i64,
) -> AppResult<OrderTotals> {
    if items.is_empty() {
        return Err(AppError::new(ErrorCode::EmptyOrder));
    }

    let mut subtotal: i64 = 0;
    for (index, item) in items.iter().enumerate() {
        if item.quantity < 1 {
            return Err(AppError::validation(format!(
                "quantidade must be at least 1 (item '{}')",
                item.product_name
            ))
            .with_detail("item_index", index));
        }
        if item.unit_price_cents < 0 {
            return Err(AppError::validation(format!(
                "preco_unitario must not be negative (item '{}')",
                item.product_name
            ))
            .with_detail("item_index", index));
        }

        let line_total = item
            .unit_price_cents
            .checked_mul(item.quantity)
            .ok_or_else(|| AppError::new(ErrorCode::ValueOutOfRange))?;
        subtotal = subtotal
            .checked_add(line_total)
            .ok_or_else(|| AppError::new(ErrorCode::ValueOutOfRange))?;
    }

    let fee = match mode {
        DeliveryMode::Delivery => delivery_fee_cents,
        DeliveryMode::Pickup | DeliveryMode::Counter => 0,
    };

    let total = subtotal
        .checked_add(fee)
        .ok_or_else(|| AppError::new(ErrorCode::ValueOutOfRange))?;

    Ok(OrderTotals {
        products_subtotal_cents: subtotal,
        delivery_fee_cents: fee,
        total_cents: total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: i64, unit_price_cents: i64) -> LineItem {
        LineItem {
            product_name: name.to_string(),
            quantity,
            unit_price_cents,
            selections: Vec::new(),
        }
    }

    #[test]
    fn test_delivery_order_totals() {
        let items = vec![item("Marmita Grande", 1, 2600)];
        let totals = compute_totals(&items, DeliveryMode::Delivery, 1000)
            .expect("totals should compute");

        assert_eq!(totals.products_subtotal_cents, 2600);
        assert_eq!(totals.delivery_fee_cents, 1000);
        assert_eq!(totals.total_cents, 3600);
    }

    #[test]
    fn test_pickup_order_has_no_fee() {
        let items = vec![item("Marmita Grande", 1, 2600)];
        let totals = compute_totals(&items, DeliveryMode::Pickup, 1000)
            .expect("totals should compute");

        assert_eq!(totals.delivery_fee_cents, 0);
        assert_eq!(totals.total_cents, 2600);
    }

    #[test]
    fn test_counter_order_has_no_fee() {
        let items = vec![item("Refrigerante", 2, 600)];
        let totals = compute_totals(&items, DeliveryMode::Counter, 1000)
            .expect("totals should compute");

        assert_eq!(totals.delivery_fee_cents, 0);
        assert_eq!(totals.total_cents, 1200);
    }

    #[test]
    fn test_subtotal_sums_quantity_times_price() {
        let items = vec![item("Marmita", 3, 2000), item("Suco", 2, 800)];
        let totals = compute_totals(&items, DeliveryMode::Delivery, 1000)
            .expect("totals should compute");

        assert_eq!(totals.products_subtotal_cents, 7600);
        assert_eq!(
            totals.total_cents,
            totals.products_subtotal_cents + totals.delivery_fee_cents
        );
    }

    #[test]
    fn test_empty_order_rejected() {
        let err = compute_totals(&[], DeliveryMode::Pickup, 1000)
            .expect_err("empty order must fail");
        assert_eq!(err.code, ErrorCode::EmptyOrder);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let items = vec![item("Marmita", 0, 2600)];
        let err = compute_totals(&items, DeliveryMode::Pickup, 1000)
            .expect_err("zero quantity must fail");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_negative_price_rejected() {
        let items = vec![item("Marmita", 1, -1)];
        let err = compute_totals(&items, DeliveryMode::Pickup, 1000)
            .expect_err("negative price must fail");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_overflow_rejected() {
        let items = vec![item("Marmita", i64::MAX, 2)];
        let err = compute_totals(&items, DeliveryMode::Pickup, 1000)
            .expect_err("overflow must fail");
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
}
