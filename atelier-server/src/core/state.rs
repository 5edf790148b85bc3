use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared server state
///
/// Holds the long-lived resources acquired once at startup: the store
/// handle and the token service, plus the immutable configuration. Cloning
/// is shallow (`Arc` / SurrealDB's internal handle), so every request gets
/// its own cheap copy and workflow components receive the handle through
/// their constructors rather than through globals.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Initialize state from configuration: open the store, define
    /// indexes, build the token service.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service =
            DbService::open(&config.data_dir, &config.db_namespace, &config.db_name).await?;

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            jwt_service: Arc::new(JwtService::with_config(config.jwt.clone())),
        })
    }

    /// In-memory state for tests: same wiring, ephemeral store.
    pub async fn initialize_in_memory(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::memory(&config.db_namespace, &config.db_name).await?;

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            jwt_service: Arc::new(JwtService::with_config(config.jwt.clone())),
        })
    }
}
