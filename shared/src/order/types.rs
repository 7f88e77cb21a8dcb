//! Shared types for cart state and order creation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::menu_item::{AddOn, Variation};

// ============================================================================
// Service Type
// ============================================================================

/// Fulfillment mode; governs which additional order fields are required
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    #[default]
    DineIn,
    Pickup,
    Delivery,
    Counter,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::DineIn => "dine-in",
            ServiceType::Pickup => "pickup",
            ServiceType::Delivery => "delivery",
            ServiceType::Counter => "counter",
        }
    }

    /// Display label ("Dine in", "Pickup", ...)
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::DineIn => "Dine in",
            ServiceType::Pickup => "Pickup",
            ServiceType::Delivery => "Delivery",
            ServiceType::Counter => "Counter",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Pickup Time
// ============================================================================

/// Pickup slot: a preset window or a free-text custom time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PickupTime {
    /// Preset window in minutes (e.g. "5-10"), rendered as "5-10 minutes"
    Window(String),
    /// Free-text time ("45 minutes", "2:30 PM")
    Custom(String),
}

impl PickupTime {
    /// Human-readable form stored on the order request
    pub fn display(&self) -> String {
        match self {
            PickupTime::Window(window) => format!("{window} minutes"),
            PickupTime::Custom(text) => text.clone(),
        }
    }
}

// ============================================================================
// Cart Types
// ============================================================================

/// Add-on selection with resolved quantity. Absence from the selection set
/// means quantity 0; a stored selection always has quantity ≥ 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectedAddOn {
    pub id: String,
    pub name: String,
    /// Per-unit price
    pub price: f64,
    pub quantity: i32,
}

impl SelectedAddOn {
    pub fn from_add_on(add_on: &AddOn, quantity: i32) -> Self {
        Self {
            id: add_on.id.clone(),
            name: add_on.name.clone(),
            price: add_on.price,
            quantity,
        }
    }
}

/// One customized product selection with a quantity, distinct from other
/// selections of the same base product.
///
/// `unit_price` is fixed when the line is created; it is not recomputed if
/// the underlying menu item's price changes later in the same session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Content-addressed line id, unique per (item, variation, add-on set)
    pub id: String,
    pub item_id: String,
    pub name: String,
    /// At most one selected variation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<Variation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_ons: Vec<SelectedAddOn>,
    pub quantity: i32,
    /// Unit price for this specific customization
    pub unit_price: f64,
}

// ============================================================================
// Order Request
// ============================================================================

/// Normalized order-creation request handed to the persistence collaborator.
///
/// Exactly one of the service-specific field groups (`address`,
/// `pickup_time`, `party_size`+`dine_in_time`) is populated, matching
/// `service_type`; the others serialize as absent. Counter orders populate
/// none of them; the table number travels in `contact_number` and `notes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
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
    /// Authoritative total, equal to the cart total at assembly time
    pub total: f64,
    pub items: Vec<CartLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
}
