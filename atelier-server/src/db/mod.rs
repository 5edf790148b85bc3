//! Database Module
//!
//! Embedded SurrealDB storage. The service owns the connection handle,
//! selects the namespace/database, and defines the uniqueness indexes the
//! workflows rely on. The handle is acquired once at startup and passed
//! explicitly into every component that needs it.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the on-disk database (RocksDB engine)
    pub async fn open(data_dir: &str, namespace: &str, database: &str) -> Result<Self, AppError> {
        std::fs::create_dir_all(data_dir)
            .map_err(|e| AppError::internal(format!("Failed to create data dir: {e}")))?;

        let db = Surreal::new::<RocksDb>(data_dir)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        Self::init(db, namespace, database).await
    }

    /// Open an in-memory database (used by tests)
    pub async fn memory(namespace: &str, database: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        Self::init(db, namespace, database).await
    }

    async fn init(db: Surreal<Db>, namespace: &str, database: &str) -> Result<Self, AppError> {
        db.use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;

        define_indexes(&db).await?;

        tracing::info!(namespace, database, "Database connection established");
        Ok(Self { db })
    }
}

/// Uniqueness constraints the workflows depend on:
/// - one account per email
/// - at most one payment per order (concurrent intent creation: one wins,
///   the loser surfaces as a duplicate)
async fn define_indexes(db: &Surreal<Db>) -> Result<(), AppError> {
    // Statement errors only surface through check(), not through await
    db.query("DEFINE INDEX IF NOT EXISTS users_email_idx ON TABLE users COLUMNS email UNIQUE")
        .await
        .and_then(|r| r.check())
        .map_err(|e| AppError::database(format!("Failed to define users index: {e}")))?;

    db.query(
        "DEFINE INDEX IF NOT EXISTS payments_order_idx ON TABLE payments COLUMNS order_id UNIQUE",
    )
    .await
    .and_then(|r| r.check())
    .map_err(|e| AppError::database(format!("Failed to define payments index: {e}")))?;

    Ok(())
}
