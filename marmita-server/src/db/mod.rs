//! Database Module
//!
//! Embedded SurrealDB storage. Four independent collections (`usuario`,
//! `produto`, `componente`, `pedido`) plus a counter record for order codes.

pub mod models;
pub mod repository;

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "marmita";
const DATABASE: &str = "marmita";

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database at the given path
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(path = %db_path, "Database connection established (SurrealDB/RocksDB)");

        Ok(Self { db })
    }

    /// Open an in-memory database (tests)
    pub async fn new_in_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        Ok(Self { db })
    }
}
