//! API route modules
//!
//! # Structure
//!
//! - [`health`] — health check (public)
//! - [`auth`] — registration, login, current user
//! - [`products`] — catalog (public reads, admin writes)
//! - [`orders`] — order creation, retrieval, admin updates
//! - [`payments`] — payment intents and provider callbacks

pub mod auth;
pub mod health;
pub mod orders;
pub mod payments;
pub mod products;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(payments::router())
}

/// Build a fully configured application with all middleware and state
pub fn build_app(state: &ServerState) -> Router {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // JWT authentication - injects CurrentUser on protected routes
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_auth,
        ))
        .with_state(state.clone())
}

/// Common skip/limit pagination query parameters
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub skip: u64,
    pub limit: Option<u64>,
}

impl PageParams {
    /// Effective limit, clamped to 1..=100 (default 100)
    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(100).clamp(1, 100)
    }
}
