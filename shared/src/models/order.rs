//! Persisted Order Model (admin view)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::menu_item::Variation;
use crate::order::{SelectedAddOn, ServiceType};
use crate::util::order_code;

/// Order status. Linear progression pending → confirmed → preparing → ready
/// → completed; cancellation is reachable from any non-terminal state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Display label for lists and exports
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Customer-facing progress message for the tracking view
    pub fn customer_message(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Your order is pending confirmation.",
            OrderStatus::Confirmed => "Your order has been confirmed!",
            OrderStatus::Preparing => "Your order is being prepared.",
            OrderStatus::Ready => "Your order is ready for pickup/delivery!",
            OrderStatus::Completed => "Your order has been completed. Thank you!",
            OrderStatus::Cancelled => "Your order has been cancelled.",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Next step along the linear progression, `None` for terminal states.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Completed),
            OrderStatus::Completed | OrderStatus::Cancelled => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Confirmed => 1,
            OrderStatus::Preparing => 2,
            OrderStatus::Ready => 3,
            OrderStatus::Completed => 4,
            OrderStatus::Cancelled => 5,
        }
    }

    /// Whether a transition to `target` is allowed: any forward move along
    /// the progression, or cancellation of a non-terminal order.
    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        if self.is_terminal() || target == *self {
            return false;
        }
        if target == OrderStatus::Cancelled {
            return true;
        }
        target.rank() > self.rank()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(AppError::validation(format!("Unknown order status: {other}"))),
        }
    }
}

/// Persisted order line, flattened for the admin view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRecord {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<Variation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_ons: Vec<SelectedAddOn>,
    pub unit_price: f64,
    pub quantity: i32,
    pub subtotal: f64,
}

/// Order entity as returned by the persistence collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub contact_number: String,
    pub service_type: ServiceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dine_in_time: Option<DateTime<Utc>>,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub total: f64,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub order_items: Vec<OrderItemRecord>,
}

impl Order {
    /// Short display code derived from the persisted id
    pub fn code(&self) -> String {
        order_code(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_progression() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::Confirmed));
        assert_eq!(OrderStatus::Ready.next(), Some(OrderStatus::Completed));
        assert_eq!(OrderStatus::Completed.next(), None);
        assert_eq!(OrderStatus::Cancelled.next(), None);
    }

    #[test]
    fn test_cancellation_reachable_from_non_terminal() {
        for status in OrderStatus::ALL {
            let expected = !status.is_terminal();
            assert_eq!(status.can_transition_to(OrderStatus::Cancelled), expected);
        }
    }

    #[test]
    fn test_no_backward_transition() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Ready));
        assert!(!OrderStatus::Ready.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Confirmed));
    }

    #[test]
    fn test_status_parse_case_insensitive() {
        assert_eq!("Preparing".parse::<OrderStatus>().unwrap(), OrderStatus::Preparing);
        assert_eq!("COMPLETED".parse::<OrderStatus>().unwrap(), OrderStatus::Completed);
        assert!("shipped".parse::<OrderStatus>().is_err());
    }
}
