//! Staff-facing orders layer
//!
//! Derived list views, view-scoped sales aggregates, tracking lookups,
//! status updates, and the completed-orders export.

mod export;
mod query;

pub use export::{export_completed_csv, export_filename};
pub use query::{
    SortDir, SortKey, SortState, StatusFilter, ViewFilter, ViewTotals, derive_view, find_by_code,
    find_by_phone, view_totals,
};

use shared::models::{Order, OrderStatus};
use shared::{AppError, AppResult};

use crate::services::OrderService;

/// Move an order to a new status after checking the lifecycle allows it:
/// forward along the progression, or cancellation of a non-terminal order.
pub async fn update_status(
    service: &dyn OrderService,
    order: &Order,
    target: OrderStatus,
) -> AppResult<()> {
    if !order.status.can_transition_to(target) {
        return Err(AppError::business_rule(format!(
            "Order #{} cannot move from {} to {}",
            order.code(),
            order.status,
            target
        )));
    }
    service
        .update_order_status(&order.id, target)
        .await
        .map_err(|error| AppError::internal(format!("Status update failed: {error}")))
}
