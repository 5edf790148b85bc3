//! Authorization policy
//!
//! The ownership and role checks live here as plain predicates so the
//! policy is testable without any HTTP plumbing. Handlers call these at
//! the boundary; the managers themselves stay authorization-free.

use crate::auth::CurrentUser;
use crate::db::models::Order;

/// Admin-only operations: order administration, catalog mutation.
pub fn can_administer(user: &CurrentUser) -> bool {
    user.is_admin()
}

/// An order may be read by its owner or by an admin.
pub fn can_read_order(user: &CurrentUser, order: &Order) -> bool {
    can_administer(user) || order.user_id == user.email
}
