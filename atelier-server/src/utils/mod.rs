//! Common utilities: error types, logging, input validation.

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult};

/// Current time as Unix milliseconds.
///
/// Repositories and models store timestamps as `i64` millis; conversion
/// to/from calendar types happens at the edges.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
