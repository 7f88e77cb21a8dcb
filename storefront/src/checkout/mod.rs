//! Checkout: order assembly and submission
//!
//! [`build_order_request`] validates the customer form against the cart and
//! produces the normalized creation payload. [`place_order`] runs the
//! submission flow (receipt upload first, order creation second) and
//! classifies remote failures into user-facing outcomes.

mod assembler;
mod submit;

pub use assembler::{CheckoutForm, build_order_request};
pub use submit::{PlacedOrder, place_order};

use thiserror::Error;

use crate::services::ServiceError;

/// Customer-entered field, named for validation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CustomerName,
    ContactNumber,
    Address,
    Landmark,
    PickupTime,
    PartySize,
    DineInTime,
    TableNumber,
    Notes,
}

impl Field {
    pub fn display_name(&self) -> &'static str {
        match self {
            Field::CustomerName => "name",
            Field::ContactNumber => "contact number",
            Field::Address => "delivery address",
            Field::Landmark => "landmark",
            Field::PickupTime => "pickup time",
            Field::PartySize => "party size",
            Field::DineInTime => "preferred dining time",
            Field::TableNumber => "table number",
            Field::Notes => "notes",
        }
    }
}

/// Local validation failure. Reported immediately; nothing is sent to the
/// persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Distinct from any missing-field failure
    #[error("Your cart is empty")]
    EmptyCart,

    #[error("Please provide your {}", .0.display_name())]
    MissingField(Field),

    #[error("{} is too long ({len} chars, max {max})", .field.display_name())]
    FieldTooLong {
        field: Field,
        len: usize,
        max: usize,
    },

    #[error("Party size must be between 1 and {max}, got {got}")]
    InvalidPartySize { got: i32, max: i32 },
}

/// Checkout failure taxonomy. Every variant resolves to a user-visible
/// message and a retry path; none is fatal.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Rejected locally before any remote call
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Receipt upload failed; order creation was not attempted
    #[error("Receipt upload failed: {0}")]
    UploadFailed(ServiceError),

    /// A line item ran out of stock; the backend message is surfaced verbatim
    #[error("{0}")]
    OutOfStock(String),

    /// Backend rate limit; the customer must wait before retrying
    #[error("Too many orders: Please wait 1 minute before placing another order.")]
    RateLimited,

    /// Any other remote failure; the customer is told to retry
    #[error("Failed to place order. Please try again.")]
    OrderCreationFailed(#[source] ServiceError),
}

impl CheckoutError {
    /// Classify a persistence failure by its message. The backend's
    /// "missing identifiers" failure mode is produced by its rate limiter,
    /// so it maps to the rate-limit outcome as well.
    pub(crate) fn classify_remote(error: ServiceError) -> Self {
        let lower = error.message.to_lowercase();
        if lower.contains("insufficient stock") {
            return CheckoutError::OutOfStock(error.message);
        }
        if lower.contains("rate limit") || lower.contains("missing identifiers") {
            return CheckoutError::RateLimited;
        }
        CheckoutError::OrderCreationFailed(error)
    }
}
