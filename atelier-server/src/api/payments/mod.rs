//! Payment API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/payments", payment_routes())
}

fn payment_routes() -> Router<ServerState> {
    Router::new()
        .route("/create", post(handler::create_intent))
        .route("/verify", post(handler::verify))
        .route("/order/{order_id}", get(handler::get_by_order))
}
