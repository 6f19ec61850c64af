//! Database layer - connection pool, schema and the PostgreSQL store
//!
//! - Connection pool, no Arc<Mutex<Connection>>
//! - Each mutation is a single statement; no multi-step transactions

pub mod migrations;
pub mod pool;
pub mod store;

use trivia_core::TriviaError;

pub use pool::{create_pool, create_pool_with_options};
pub use store::PgStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl From<DbError> for TriviaError {
    fn from(e: DbError) -> Self {
        // Clients only ever see a generic 500; keep the cause in the logs
        tracing::error!("Database error: {}", e);
        TriviaError::internal(e.to_string())
    }
}
