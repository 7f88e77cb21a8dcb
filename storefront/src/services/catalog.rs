//! Catalog/config collaborator

use async_trait::async_trait;
use shared::models::{Category, MenuItem, PaymentMethod, StoreInfo};

use super::ServiceError;

/// Read-only provider of categories, menu items, payment methods, and site
/// branding. Consumed as simple fetch-once collections, never mutated here.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>, ServiceError>;

    async fn menu_items(&self) -> Result<Vec<MenuItem>, ServiceError>;

    async fn payment_methods(&self) -> Result<Vec<PaymentMethod>, ServiceError>;

    async fn store_info(&self) -> Result<StoreInfo, ServiceError>;
}
