//! Payment Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Payment status: `Created` on intent, `Completed` after a verified
/// callback. Completed is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Created,
    Completed,
}

/// Payment record, tied 1:1 to an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Referenced order id in its opaque "table:key" string form
    pub order_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    /// Provider-assigned order reference returned by the intent call
    pub provider_order_ref: String,
    pub created_at: i64,
}

/// Create payment intent payload
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntentRequest {
    pub order_id: String,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

/// Intent response consumed by the client-side redirect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntentResponse {
    pub id: Option<String>,
    pub provider_order_ref: String,
    pub amount: f64,
    pub currency: String,
    /// Provider public key id for the checkout widget
    pub key_id: String,
}

/// Signed provider callback payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCallback {
    pub provider_order_ref: String,
    pub provider_payment_ref: String,
    pub signature: String,
}

/// Callback acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentVerified {
    pub success: bool,
    pub message: String,
}
