//! Order Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Order lifecycle status
///
/// `Cancelled` is reachable from any non-terminal state; the others form
/// the fulfilment sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    InProduction,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Terminal states admit no further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// Customization applied to a single line item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customization {
    pub text: Option<String>,
    pub font: Option<String>,
    pub color: Option<String>,
}

/// One order line: product reference, quantity, customization, unit price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub customization: Option<Customization>,
    pub price: f64,
}

fn default_quantity() -> u32 {
    1
}

/// Order record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Owner identifier — the email claim of the user who placed the order
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub shipping_address: String,
    pub contact_number: String,
    pub status: OrderStatus,
    pub payment_status: String,
    pub tracking_number: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create order payload — status and payment status are server-assigned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub shipping_address: String,
    pub contact_number: String,
}

/// Admin update payload — unset fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderAdminUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}
