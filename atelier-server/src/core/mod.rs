//! Core module: configuration, shared state, server lifecycle.

pub mod config;
pub mod server;
pub mod state;

pub use config::{Config, PaymentProviderConfig};
pub use server::Server;
pub use state::ServerState;
