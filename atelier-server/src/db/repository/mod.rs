//! Repository Module
//!
//! Typed CRUD operations over the store collections. Each repository wraps
//! a [`BaseRepository`] holding the shared database handle; construction is
//! cheap and request-scoped.

pub mod order;
pub mod payment;
pub mod product;
pub mod user;

pub use order::OrderRepository;
pub use payment::PaymentRepository;
pub use product::ProductRepository;
pub use user::UserRepository;

use surrealdb::Surreal;
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

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Whether a store error is a unique-index violation.
///
/// SurrealDB reports these as plain query errors; message inspection is the
/// only signal available.
pub(crate) fn is_duplicate(err: &surrealdb::Error) -> bool {
    let msg = err.to_string().to_lowercase();
    msg.contains("already contains")
        || msg.contains("already exists")
        || msg.contains("unique")
        || msg.contains("duplicate")
}

/// Strip the "table:" prefix from an id string.
///
/// API callers hand ids around in the opaque "table:key" form; the select
/// and delete calls need the bare key.
pub(crate) fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    match id.split_once(':') {
        Some((t, key)) if t == table => key,
        _ => id,
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
