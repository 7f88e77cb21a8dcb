//! Shared types for the storefront ordering core
//!
//! Domain models, unified error type, and small utilities used by both the
//! customer-facing cart/checkout flow and the admin orders view.

pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult};
pub use serde::{Deserialize, Serialize};
