//! Order Service
//!
//! Orchestrates order creation and status changes: resolves the catalog,
//! runs composition validation, computes money fields and talks to the
//! repositories. Handlers call this instead of touching repositories
//! directly.

use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{DeliveryMode, Order, OrderCreate, OrderStatus};
use crate::db::repository::{ComponentRepository, OrderRepository, ProductRepository};
use crate::orders::{composition, lifecycle, pricing};
use shared::{AppError, AppResult, ErrorCode};

/// Order domain service
#[derive(Clone)]
pub struct OrderService {
    db: Surreal<Db>,
    delivery_fee_cents: i64,
}

impl OrderService {
    pub fn new(db: Surreal<Db>, delivery_fee_cents: i64) -> Self {
        Self {
            db,
            delivery_fee_cents,
        }
    }

    /// Create an order from a creation request
    ///
    /// Assigns the order code, timestamps, initial status and all computed
    /// money fields server-side.
    pub async fn create_order(&self, data: OrderCreate) -> AppResult<Order> {
        // Address and modality must agree in both directions
        match (data.delivery_mode, &data.delivery_address) {
            (DeliveryMode::Delivery, None) => {
                return Err(AppError::new(ErrorCode::MissingDeliveryAddress));
            }
            (mode, Some(_)) if mode != DeliveryMode::Delivery => {
                return Err(AppError::validation(
                    "entrega is only accepted when modalidade is DELIVERY",
                ));
            }
            _ => {}
        }

        // Resolve the catalog entries the items reference by name
        let product_names: Vec<String> = data
            .items
            .iter()
            .map(|i| i.product_name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let selection_names: Vec<String> = data
            .items
            .iter()
            .flat_map(|i| i.selections.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let product_repo = ProductRepository::new(self.db.clone());
        let component_repo = ComponentRepository::new(self.db.clone());

        let products: HashMap<String, _> = product_repo
            .find_by_names(product_names)
            .await
            .map_err(AppError::from)?
            .into_iter()
            .map(|p| (p.name.clone(), p))
            .collect();
        let components: HashMap<String, _> = component_repo
            .find_by_names(selection_names)
            .await
            .map_err(AppError::from)?
            .into_iter()
            .map(|c| (c.name.clone(), c))
            .collect();

        composition::validate_line_items(&data.items, &products, &components)?;

        let totals =
            pricing::compute_totals(&data.items, data.delivery_mode, self.delivery_fee_cents)?;

        let order_repo = OrderRepository::new(self.db.clone());
        let order_code = order_repo.next_order_code().await.map_err(AppError::from)?;

        let order = Order {
            id: None,
            order_code,
            created_at: Utc::now(),
            customer: data.customer,
            delivery_mode: data.delivery_mode,
            delivery_address: data.delivery_address,
            payment_method: data.payment_method,
            status: OrderStatus::Received,
            products_subtotal_cents: totals.products_subtotal_cents,
            delivery_fee_cents: totals.delivery_fee_cents,
            total_cents: totals.total_cents,
            items: data.items,
        };

        let created = order_repo.create(order).await.map_err(AppError::from)?;

        tracing::info!(
            order_code = created.order_code,
            total_cents = created.total_cents,
            modality = ?created.delivery_mode,
            "Order created"
        );

        Ok(created)
    }

    /// Advance an order to the given status
    ///
    /// The target must be the immediate successor of the current status;
    /// the write is conditional on the status still being the one read here,
    /// so a concurrent change surfaces as a conflict instead of silently
    /// winning.
    pub async fn advance_status(&self, id: &str, target: OrderStatus) -> AppResult<Order> {
        let repo = OrderRepository::new(self.db.clone());

        let order = repo
            .find_by_id(id)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::OrderNotFound, format!("Order {} not found", id))
            })?;

        lifecycle::validate_transition(order.status, target)?;

        match repo
            .update_status(id, order.status, target)
            .await
            .map_err(AppError::from)?
        {
            Some(updated) => {
                tracing::info!(
                    order_code = updated.order_code,
                    from = %order.status,
                    to = %target,
                    "Order status advanced"
                );
                Ok(updated)
            }
            None => Err(AppError::new(ErrorCode::StatusConflict)),
        }
    }
}
