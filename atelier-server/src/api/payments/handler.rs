//! Payment API Handlers
//!
//! `/verify` is the provider's signed callback and carries no bearer
//! token; its authentication is the HMAC signature itself.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{
    Payment, PaymentCallback, PaymentIntentRequest, PaymentIntentResponse, PaymentVerified,
};
use crate::payments::PaymentWorkflow;
use crate::utils::AppResult;

/// POST /api/payments/create - create a payment intent for an order
pub async fn create_intent(
    State(state): State<ServerState>,
    Json(payload): Json<PaymentIntentRequest>,
) -> AppResult<Json<PaymentIntentResponse>> {
    let workflow = PaymentWorkflow::new(state.db.clone(), state.config.payment.clone());
    let intent = workflow.create_intent(payload).await?;
    Ok(Json(intent))
}

/// POST /api/payments/verify - signed provider callback
pub async fn verify(
    State(state): State<ServerState>,
    Json(payload): Json<PaymentCallback>,
) -> AppResult<Json<PaymentVerified>> {
    let workflow = PaymentWorkflow::new(state.db.clone(), state.config.payment.clone());
    workflow.verify_callback(payload).await?;

    Ok(Json(PaymentVerified {
        success: true,
        message: "Payment verified successfully".to_string(),
    }))
}

/// GET /api/payments/order/{order_id} - payment details for an order
pub async fn get_by_order(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<Payment>> {
    let workflow = PaymentWorkflow::new(state.db.clone(), state.config.payment.clone());
    let payment = workflow.get_by_order(&order_id).await?;
    Ok(Json(payment))
}
