//! Input validation helpers
//!
//! Centralized length limits and validators for customer-entered text.
//! Applied at the order-assembly boundary before anything reaches the
//! persistence collaborator.

use crate::checkout::{Field, ValidationError};

// ── Text length limits ──────────────────────────────────────────────

/// Customer names
pub const MAX_NAME_LEN: usize = 200;

/// Phone numbers and table identifiers
pub const MAX_CONTACT_LEN: usize = 100;

/// Free-text notes, landmarks, special instructions
pub const MAX_NOTE_LEN: usize = 500;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Largest bookable party
pub const MAX_PARTY_SIZE: i32 = 20;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required field is non-blank and within the length limit.
pub fn validate_required_text(
    value: &str,
    field: Field,
    max_len: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    validate_max_len(value, field, max_len)
}

/// Validate an optional field against its length limit.
pub fn validate_max_len(value: &str, field: Field, max_len: usize) -> Result<(), ValidationError> {
    if value.len() > max_len {
        return Err(ValidationError::FieldTooLong {
            field,
            len: value.len(),
            max: max_len,
        });
    }
    Ok(())
}
