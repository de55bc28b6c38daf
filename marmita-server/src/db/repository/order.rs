//! Order Repository
//!
//! Orders are immutable apart from `status`. The order code comes from an
//! atomic counter record, so concurrent creations never collide.

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::{Order, OrderStatus};
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const ORDER_TABLE: &str = "pedido";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

#[derive(Debug, Deserialize)]
struct CounterRow {
    valor: i64,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Next order code from the store-level atomic counter
    ///
    /// A single UPSERT statement runs in its own transaction, so two
    /// concurrent creations always observe distinct values.
    pub async fn next_order_code(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("UPSERT contador:pedido SET valor += 1 RETURN AFTER")
            .await?;
        let rows: Vec<CounterRow> = result.take(0)?;
        rows.into_iter()
            .next()
            .map(|r| r.valor)
            .ok_or_else(|| RepoError::Database("Failed to advance order counter".to_string()))
    }

    /// Persist a fully-built order
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Find all orders, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM pedido ORDER BY codigo_pedido DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let record_id = parse_id(ORDER_TABLE, id)?;
        let order: Option<Order> = self.base.db().select(record_id).await?;
        Ok(order)
    }

    /// Conditionally set the status of an order
    ///
    /// The write only happens when the stored status still equals
    /// `expected`; returns None when the condition did not hold (either the
    /// order vanished or a concurrent update won).
    pub async fn update_status(
        &self,
        id: &str,
        expected: OrderStatus,
        target: OrderStatus,
    ) -> RepoResult<Option<Order>> {
        let record_id = parse_id(ORDER_TABLE, id)?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET status = $target WHERE status = $expected RETURN AFTER")
            .bind(("thing", record_id))
            .bind(("target", target))
            .bind(("expected", expected))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        Ok(orders.into_iter().next())
    }
}
