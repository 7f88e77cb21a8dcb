//! Order persistence collaborator

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::models::{Order, OrderStatus};
use shared::order::OrderRequest;

use super::ServiceError;

/// Identifier assigned by the persistence collaborator on creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub id: String,
}

/// Order persistence service.
///
/// Stock exhaustion must surface with a message containing
/// "insufficient stock" and rate limiting with "rate limit", so the
/// checkout flow can classify the failure for the customer.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Persist a new order and return its id
    async fn create_order(&self, request: &OrderRequest) -> Result<CreatedOrder, ServiceError>;

    /// Update the status of a persisted order
    async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<(), ServiceError>;

    /// Delete a persisted order
    async fn delete_order(&self, order_id: &str) -> Result<(), ServiceError>;

    /// All persisted orders for the admin view
    async fn list_orders(&self) -> Result<Vec<Order>, ServiceError>;

    /// Lookup by full id or short order code
    async fn find_order(&self, code: &str) -> Result<Option<Order>, ServiceError>;

    /// Orders for a contact number, newest first
    async fn find_orders_by_phone(&self, phone: &str) -> Result<Vec<Order>, ServiceError>;
}
