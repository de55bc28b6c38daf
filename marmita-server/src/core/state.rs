use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::orders::OrderService;
use shared::AppError;

/// Shared server state - holds singleton handles for all services
///
/// `ServerState` is injected into every handler through axum's `State`
/// extractor. Cloning is cheap: the database handle and the JWT service are
/// reference-counted internally.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | configuration (immutable) |
/// | db | Surreal<Db> | embedded database |
/// | jwt_service | Arc<JwtService> | JWT token service |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT token service
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Create server state from already-initialized parts
    ///
    /// Most callers should use [`ServerState::initialize`] instead.
    pub fn new(config: Config, db: Surreal<Db>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// Initialize the server state
    ///
    /// Creates the working directory structure and opens the embedded
    /// database at `work_dir/database/marmita.db`.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_dir = config.database_dir();
        std::fs::create_dir_all(&db_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = db_dir.join("marmita.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self::new(config.clone(), db_service.db, jwt_service))
    }

    /// Initialize the server state against an in-memory database
    ///
    /// Used by integration tests; no files are touched.
    pub async fn initialize_in_memory(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::new_in_memory().await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Ok(Self::new(config.clone(), db_service.db, jwt_service))
    }

    /// Get the database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// Get the JWT service
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// Build the order service (pricing + composition + lifecycle)
    pub fn order_service(&self) -> OrderService {
        OrderService::new(self.db.clone(), self.config.delivery_fee_cents)
    }
}
