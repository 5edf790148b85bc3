//! Money arithmetic for order totals
//!
//! All money math goes through `Decimal`; `f64` exists only at the
//! storage/API boundary.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::db::models::OrderItem;

/// Convert an f64 amount to Decimal, rounded to 2 decimal places
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp(2)
}

/// Convert a Decimal back to f64 for storage/serialization
pub fn to_f64(value: Decimal) -> f64 {
    value.round_dp(2).to_f64().unwrap_or(0.0)
}

/// Sum of line totals: unit price × quantity per item
pub fn items_total(items: &[OrderItem]) -> Decimal {
    items
        .iter()
        .map(|item| to_decimal(item.price) * Decimal::from(item.quantity))
        .sum::<Decimal>()
        .round_dp(2)
}

/// Whether the declared order total matches the computed item sum
pub fn totals_match(declared: f64, items: &[OrderItem]) -> bool {
    to_decimal(declared) == items_total(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, quantity: u32) -> OrderItem {
        OrderItem {
            product_id: "products:sample".to_string(),
            quantity,
            customization: None,
            price,
        }
    }

    #[test]
    fn decimal_roundtrip_avoids_float_drift() {
        // 0.1 + 0.2 != 0.3 in f64; Decimal does not drift
        let sum = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum), 0.3);
    }

    #[test]
    fn items_total_sums_price_times_quantity() {
        let items = vec![item(10.99, 3), item(5.0, 2)];
        assert_eq!(to_f64(items_total(&items)), 42.97);
    }

    #[test]
    fn totals_match_accepts_exact_sum() {
        let items = vec![item(250.0, 2)];
        assert!(totals_match(500.0, &items));
        assert!(!totals_match(499.99, &items));
    }

    #[test]
    fn totals_match_handles_fractional_prices() {
        // 3 × 0.10 must equal 0.30 exactly
        let items = vec![item(0.10, 3)];
        assert!(totals_match(0.30, &items));
    }

    #[test]
    fn empty_items_sum_to_zero() {
        assert_eq!(items_total(&[]), Decimal::ZERO);
    }
}
