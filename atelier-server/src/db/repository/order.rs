//! Order Repository

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::{Order, OrderAdminUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const ORDER_TABLE: &str = "orders";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let key = strip_table_prefix(ORDER_TABLE, id);
        let order: Option<Order> = self.base.db().select((ORDER_TABLE, key)).await?;
        Ok(order)
    }

    /// Orders belonging to one owner, newest first, with skip/limit.
    pub async fn find_by_owner(
        &self,
        user_id: &str,
        skip: u64,
        limit: u64,
    ) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(
                "SELECT * FROM orders WHERE user_id = $user_id \
                 ORDER BY created_at DESC LIMIT $limit START $skip",
            )
            .bind(("user_id", user_id.to_string()))
            .bind(("limit", limit))
            .bind(("skip", skip))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Admin patch: optional status and tracking number. `updated_at` is
    /// always refreshed, even when the patch is otherwise empty.
    pub async fn apply_admin_update(
        &self,
        id: &str,
        data: OrderAdminUpdate,
        now: i64,
    ) -> RepoResult<Order> {
        let key = strip_table_prefix(ORDER_TABLE, id);
        let thing = surrealdb::RecordId::from_table_key(ORDER_TABLE, key);

        let mut set_parts: Vec<&str> = vec!["updated_at = $updated_at"];
        if data.status.is_some() {
            set_parts.push("status = $status");
        }
        if data.tracking_number.is_some() {
            set_parts.push("tracking_number = $tracking_number");
        }

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self
            .base
            .db()
            .query(query_str)
            .bind(("thing", thing))
            .bind(("updated_at", now));
        if let Some(v) = data.status {
            query = query.bind(("status", v));
        }
        if let Some(v) = data.tracking_number {
            query = query.bind(("tracking_number", v));
        }

        let mut result = query.await?;
        let orders: Vec<Order> = result.take(0)?;

        orders
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Conditional payment transition: only an order still `pending` is
    /// moved to confirmed/completed. Returns `None` when the condition did
    /// not match (absent record or already past pending) — the caller
    /// distinguishes the two.
    pub async fn mark_payment_completed(&self, id: &str, now: i64) -> RepoResult<Option<Order>> {
        let key = strip_table_prefix(ORDER_TABLE, id);
        let thing = surrealdb::RecordId::from_table_key(ORDER_TABLE, key);

        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $thing SET payment_status = 'completed', status = 'confirmed', \
                 updated_at = $updated_at WHERE status = 'pending' RETURN AFTER",
            )
            .bind(("thing", thing))
            .bind(("updated_at", now))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        Ok(orders.into_iter().next())
    }
}
