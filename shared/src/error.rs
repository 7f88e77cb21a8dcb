//! Unified error handling
//!
//! Application-level error enum shared by the storefront and admin layers.
//! Remote collaborator failures keep their own message-bearing error type
//! (`ServiceError` in the storefront crate) so the checkout flow can classify
//! them; everything local resolves to an [`AppError`].

use thiserror::Error;

/// Application error enum
///
/// | Category | Meaning |
/// |----------|---------|
/// | Validation | Caller-supplied data rejected before any remote call |
/// | NotFound | Lookup target does not exist |
/// | BusinessRule | Operation conflicts with a domain rule |
/// | Internal | Unexpected local failure |
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

// ========== Helper Constructors ==========

impl AppError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Create a BusinessRule error
    pub fn business_rule(message: impl Into<String>) -> Self {
        Self::BusinessRule(message.into())
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;
