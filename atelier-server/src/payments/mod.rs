//! Payment workflow
//!
//! [`PaymentWorkflow`] creates provider payment intents, verifies signed
//! callbacks, and drives the order's payment transition. The provider
//! integration is a placeholder: the order reference is derived from the
//! order id rather than issued by a real gateway.

pub mod signature;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::PaymentProviderConfig;
use crate::db::models::{
    Payment, PaymentCallback, PaymentIntentRequest, PaymentIntentResponse, PaymentStatus,
};
use crate::db::repository::PaymentRepository;
use crate::orders::OrderManager;
use crate::utils::{AppError, AppResult, now_millis};

/// Fixed prefix used to derive the provider order reference from an order
/// id, and to recover the order id from a callback.
pub const ORDER_REF_PREFIX: &str = "order_";

/// Payment workflow manager
#[derive(Clone)]
pub struct PaymentWorkflow {
    payments: PaymentRepository,
    orders: OrderManager,
    config: PaymentProviderConfig,
}

impl PaymentWorkflow {
    pub fn new(db: Surreal<Db>, config: PaymentProviderConfig) -> Self {
        Self {
            payments: PaymentRepository::new(db.clone()),
            orders: OrderManager::new(db),
            config,
        }
    }

    /// Create a payment intent for an existing order.
    ///
    /// The unique payment-per-order index makes a second intent fail with
    /// Conflict, so concurrent calls cannot both record a payment.
    pub async fn create_intent(
        &self,
        req: PaymentIntentRequest,
    ) -> AppResult<PaymentIntentResponse> {
        if req.amount <= 0.0 {
            return Err(AppError::validation("Payment amount must be positive"));
        }

        // The order must exist before money is attached to it
        let order = self.orders.get(&req.order_id).await?;
        let order_id = order
            .id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or(req.order_id.clone());

        let provider_order_ref = format!("{ORDER_REF_PREFIX}{order_id}");
        let payment = Payment {
            id: None,
            order_id: order_id.clone(),
            amount: req.amount,
            currency: req.currency,
            status: PaymentStatus::Created,
            provider_order_ref: provider_order_ref.clone(),
            created_at: now_millis(),
        };

        let created = self.payments.create(payment).await?;
        tracing::info!(
            order_id = %order_id,
            provider_order_ref = %provider_order_ref,
            amount = created.amount,
            "Payment intent created"
        );

        Ok(PaymentIntentResponse {
            id: created.id.map(|id| id.to_string()),
            provider_order_ref,
            amount: created.amount,
            currency: created.currency,
            key_id: self.config.key_id.clone(),
        })
    }

    /// Verify a signed provider callback and confirm the referenced order.
    ///
    /// Signature check first, constant-time; only then is anything touched.
    /// Replayed callbacks re-verify fine and no-op on the order transition.
    pub async fn verify_callback(&self, cb: PaymentCallback) -> AppResult<()> {
        let valid = signature::verify(
            &self.config.key_secret,
            &cb.provider_order_ref,
            &cb.provider_payment_ref,
            &cb.signature,
        );
        if !valid {
            tracing::warn!(
                provider_order_ref = %cb.provider_order_ref,
                "Payment callback with invalid signature rejected"
            );
            return Err(AppError::InvalidSignature);
        }

        let order_id = cb
            .provider_order_ref
            .strip_prefix(ORDER_REF_PREFIX)
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Malformed provider order reference: {}",
                    cb.provider_order_ref
                ))
            })?;

        self.payments.mark_completed(order_id).await?;
        self.orders.mark_payment_completed(order_id).await?;

        tracing::info!(
            order_id,
            provider_payment_ref = %cb.provider_payment_ref,
            "Payment verified"
        );
        Ok(())
    }

    pub async fn get_by_order(&self, order_id: &str) -> AppResult<Payment> {
        self.payments
            .find_by_order(order_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Payment for order {}", order_id)))
    }
}
