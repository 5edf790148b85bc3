//! Order API Handlers
//!
//! Authorization checks happen here at the boundary (`auth::policy`); the
//! lifecycle manager below assumes its caller is entitled.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::PageParams;
use crate::auth::{CurrentUser, policy};
use crate::core::ServerState;
use crate::db::models::{Order, OrderAdminUpdate, OrderCreate};
use crate::orders::OrderManager;
use crate::utils::{AppError, AppResult};

/// POST /api/orders - place a new order
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let manager = OrderManager::new(state.db.clone());
    let order = manager.create(payload, &user.email).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/orders - current user's orders
pub async fn list_mine(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Query(page): Query<PageParams>,
) -> AppResult<Json<Vec<Order>>> {
    let manager = OrderManager::new(state.db.clone());
    let orders = manager
        .list_for_owner(&user.email, page.skip, page.limit())
        .await?;
    Ok(Json(orders))
}

/// GET /api/orders/{id} - owner or admin only
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let manager = OrderManager::new(state.db.clone());
    let order = manager.get(&id).await?;

    if !policy::can_read_order(&user, &order) {
        tracing::warn!(order_id = %id, email = %user.email, "Order access denied");
        return Err(AppError::forbidden("Not authorized to access this order"));
    }

    Ok(Json(order))
}

/// PUT /api/orders/{id} - status/tracking patch (admin only)
pub async fn admin_update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(patch): Json<OrderAdminUpdate>,
) -> AppResult<Json<Order>> {
    if !policy::can_administer(&user) {
        return Err(AppError::forbidden("Admin role required"));
    }

    let manager = OrderManager::new(state.db.clone());
    let order = manager.apply_admin_update(&id, patch).await?;
    Ok(Json(order))
}
