//! Database models
//!
//! Record structs matching the store schema plus the request/response
//! payloads that travel with them.

pub mod serde_helpers;

pub mod order;
pub mod payment;
pub mod product;
pub mod user;

pub use order::{Customization, Order, OrderAdminUpdate, OrderCreate, OrderItem, OrderStatus};
pub use payment::{
    Payment, PaymentCallback, PaymentIntentRequest, PaymentIntentResponse, PaymentStatus,
    PaymentVerified,
};
pub use product::{Product, ProductCreate, ProductTemplate, ProductUpdate};
pub use user::{LoginRequest, LoginResponse, User, UserCreate, UserPublic, UserRole};
