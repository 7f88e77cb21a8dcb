//! External collaborator contracts
//!
//! Persistence, receipt hosting, and catalog access live in a backend
//! service; this core consumes them through these traits and never owns
//! their implementation.

mod catalog;
mod orders;
mod receipts;

pub use catalog::CatalogProvider;
pub use orders::{CreatedOrder, OrderService};
pub use receipts::ReceiptUploader;

use thiserror::Error;

/// Failure reported by a remote collaborator.
///
/// The message is inspected by the checkout flow to tell stock exhaustion
/// and rate limiting apart from generic failures, so implementations must
/// pass the backend's message through rather than replace it.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ServiceError {
    pub message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
