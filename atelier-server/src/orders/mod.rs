//! Order lifecycle
//!
//! [`OrderManager`] owns every order state transition. Orders are created
//! `pending`, administered by staff (status/tracking patches), and
//! confirmed exclusively through the payment workflow's callback path.
//! Authorization is a caller-side precondition (`auth::policy`), not a
//! concern of the manager itself.

pub mod money;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{Order, OrderAdminUpdate, OrderCreate, OrderStatus};
use crate::db::repository::OrderRepository;
use crate::utils::validation::{MAX_ADDRESS_LEN, MAX_CONTACT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, now_millis};

/// Initial payment status carried by every new order
pub const PAYMENT_STATUS_PENDING: &str = "pending";

/// Order lifecycle manager
#[derive(Clone)]
pub struct OrderManager {
    repo: OrderRepository,
}

impl OrderManager {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            repo: OrderRepository::new(db),
        }
    }

    /// Create an order for `owner`. Status and payment status are forced to
    /// their initial values regardless of anything the caller supplied, and
    /// the declared total must equal the decimal sum of the line items.
    pub async fn create(&self, input: OrderCreate, owner: &str) -> AppResult<Order> {
        if input.items.is_empty() {
            return Err(AppError::validation("Order must contain at least one item"));
        }
        for item in &input.items {
            if item.quantity == 0 {
                return Err(AppError::validation("Item quantity must be at least 1"));
            }
        }
        validate_required_text(&input.shipping_address, "shipping_address", MAX_ADDRESS_LEN)?;
        validate_required_text(&input.contact_number, "contact_number", MAX_CONTACT_LEN)?;

        if !money::totals_match(input.total_amount, &input.items) {
            return Err(AppError::validation(format!(
                "total_amount {} does not match the sum of line items {}",
                input.total_amount,
                money::to_f64(money::items_total(&input.items))
            )));
        }

        let now = now_millis();
        let order = Order {
            id: None,
            user_id: owner.to_string(),
            items: input.items,
            total_amount: input.total_amount,
            shipping_address: input.shipping_address,
            contact_number: input.contact_number,
            status: OrderStatus::Pending,
            payment_status: PAYMENT_STATUS_PENDING.to_string(),
            tracking_number: None,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.create(order).await?;
        tracing::info!(
            order_id = %created.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            owner,
            total = created.total_amount,
            "Order created"
        );
        Ok(created)
    }

    pub async fn get(&self, order_id: &str) -> AppResult<Order> {
        self.repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {}", order_id)))
    }

    pub async fn list_for_owner(
        &self,
        owner: &str,
        skip: u64,
        limit: u64,
    ) -> AppResult<Vec<Order>> {
        Ok(self.repo.find_by_owner(owner, skip, limit).await?)
    }

    /// Staff patch: status and/or tracking number. Unset fields stay
    /// untouched; `updated_at` always advances, even for an empty patch.
    pub async fn apply_admin_update(
        &self,
        order_id: &str,
        patch: OrderAdminUpdate,
    ) -> AppResult<Order> {
        let updated = self
            .repo
            .apply_admin_update(order_id, patch, now_millis())
            .await?;
        tracing::info!(
            order_id,
            status = ?updated.status,
            tracking = updated.tracking_number.as_deref().unwrap_or("-"),
            "Order updated by admin"
        );
        Ok(updated)
    }

    /// Payment-confirmed transition, invoked only by the payment workflow.
    ///
    /// Conditional on the order still being `pending`: a duplicate callback
    /// finds nothing to update and gets the current order back unchanged.
    pub async fn mark_payment_completed(&self, order_id: &str) -> AppResult<Order> {
        if let Some(updated) = self
            .repo
            .mark_payment_completed(order_id, now_millis())
            .await?
        {
            tracing::info!(order_id, "Order confirmed, payment completed");
            return Ok(updated);
        }

        // Nothing matched: either the order is gone (404) or it already
        // left pending (idempotent no-op)
        self.get(order_id).await
    }
}
