//! Product API Handlers
//!
//! Catalog reads are public; creation, update and deletion are admin-only.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::api::PageParams;
use crate::auth::{CurrentUser, policy};
use crate::core::ServerState;
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use crate::db::repository::ProductRepository;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, now_millis};

/// Category filter for the catalog listing
#[derive(Debug, Deserialize)]
pub struct CategoryFilter {
    pub category: Option<String>,
}

/// GET /api/products - list catalog, optional category filter
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<CategoryFilter>,
    Query(page): Query<PageParams>,
) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo
        .find_many(filter.category.as_deref(), page.skip, page.limit())
        .await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {}", id)))?;
    Ok(Json(product))
}

/// POST /api/products - create product (admin only)
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    if !policy::can_administer(&user) {
        return Err(AppError::forbidden("Admin role required"));
    }

    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.category, "category", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&payload.model_url, "model_url", MAX_URL_LEN)?;
    if payload.price <= 0.0 {
        return Err(AppError::validation("price must be positive"));
    }

    let product = Product {
        id: None,
        name: payload.name,
        category: payload.category,
        price: payload.price,
        description: payload.description,
        model_url: payload.model_url,
        templates: payload.templates,
        created_at: now_millis(),
    };

    let repo = ProductRepository::new(state.db.clone());
    let created = repo.create(product).await?;

    tracing::info!(
        product_id = %created.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
        name = %created.name,
        "Product created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/products/{id} - partial update (admin only)
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    if !policy::can_administer(&user) {
        return Err(AppError::forbidden("Admin role required"));
    }

    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(price) = payload.price
        && price <= 0.0
    {
        return Err(AppError::validation("price must be positive"));
    }

    let repo = ProductRepository::new(state.db.clone());
    let updated = repo.update(&id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/products/{id} (admin only)
pub async fn delete(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !policy::can_administer(&user) {
        return Err(AppError::forbidden("Admin role required"));
    }

    let repo = ProductRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Product {}", id)));
    }

    tracing::info!(product_id = %id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
