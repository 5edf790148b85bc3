//! Payment Repository
//!
//! The unique index on `order_id` keeps payments 1:1 with orders: a
//! concurrent second intent loses the race and surfaces as a duplicate.

use super::{BaseRepository, RepoError, RepoResult, is_duplicate};
use crate::db::models::Payment;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const PAYMENT_TABLE: &str = "payments";

#[derive(Clone)]
pub struct PaymentRepository {
    base: BaseRepository,
}

impl PaymentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, payment: Payment) -> RepoResult<Payment> {
        let order_id = payment.order_id.clone();
        let created: Option<Payment> = self
            .base
            .db()
            .create(PAYMENT_TABLE)
            .content(payment)
            .await
            .map_err(|e| {
                if is_duplicate(&e) {
                    RepoError::Duplicate(format!("Payment for order {} already exists", order_id))
                } else {
                    RepoError::from(e)
                }
            })?;

        created.ok_or_else(|| RepoError::Database("Failed to create payment".to_string()))
    }

    pub async fn find_by_order(&self, order_id: &str) -> RepoResult<Option<Payment>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM payments WHERE order_id = $order_id LIMIT 1")
            .bind(("order_id", order_id.to_string()))
            .await?;
        let payments: Vec<Payment> = result.take(0)?;
        Ok(payments.into_iter().next())
    }

    /// Move the order's payment to its terminal `completed` status.
    /// Re-applying is harmless.
    pub async fn mark_completed(&self, order_id: &str) -> RepoResult<Option<Payment>> {
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE payments SET status = 'completed' \
                 WHERE order_id = $order_id RETURN AFTER",
            )
            .bind(("order_id", order_id.to_string()))
            .await?;
        let payments: Vec<Payment> = result.take(0)?;
        Ok(payments.into_iter().next())
    }
}
