//! Atelier Server — e-commerce backend for made-to-order custom products
//!
//! # Architecture
//!
//! - **HTTP API** (`api`): axum routers per resource, JSON in/out
//! - **Auth** (`auth`): JWT bearer tokens + argon2 credentials, with the
//!   ownership/role policy as standalone predicates
//! - **Store** (`db`): embedded SurrealDB with typed repositories
//! - **Orders** (`orders`): order lifecycle manager and money arithmetic
//! - **Payments** (`payments`): payment intents and signed provider
//!   callbacks (HMAC-SHA256)
//!
//! # Module structure
//!
//! ```text
//! atelier-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── auth/          # JWT, middleware, authorization policy
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # database layer: models + repositories
//! ├── orders/        # order lifecycle manager
//! ├── payments/      # payment workflow manager
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod payments;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use orders::OrderManager;
pub use payments::PaymentWorkflow;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
