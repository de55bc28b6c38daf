//! Repository Module
//!
//! Provides CRUD operations over the SurrealDB collections. Each repository
//! owns the query strings for its table; handlers never touch the database
//! directly.

pub mod component;
pub mod order;
pub mod product;
pub mod user;

// Re-exports
pub use component::ComponentRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use user::UserRepository;

use shared::{AppError, ErrorCode};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Parse a path identifier into a RecordId for the given table
///
/// Accepts both the bare key and the full "table:key" form; a prefix naming
/// a different table is rejected.
pub fn parse_id(table: &str, id: &str) -> Result<RecordId, RepoError> {
    if id.contains(':') {
        let record_id: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        if record_id.table() != table {
            return Err(RepoError::Validation(format!("Invalid ID: {}", id)));
        }
        Ok(record_id)
    } else if id.is_empty() {
        Err(RepoError::Validation("Invalid ID: empty".to_string()))
    } else {
        Ok(RecordId::from_table_key(table, id))
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
