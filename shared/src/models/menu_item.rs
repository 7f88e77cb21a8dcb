//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Serving variation (size, cup, portion). `price` is a signed delta applied
/// to the item's effective price; a smaller option may carry a negative delta.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variation {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Optional extra, priced per unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Grouping label for the customization dialog ("sauces", "extras", ...)
    pub category: String,
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category reference (String ID)
    pub category: String,
    pub base_price: f64,
    /// Explicit sale price, active while `is_on_discount` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub is_on_discount: bool,
    /// Server-computed price; an implicit discount when lower than `base_price`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_price: Option<f64>,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<Variation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_ons: Vec<AddOn>,
    #[serde(default)]
    pub track_inventory: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i32>,
    #[serde(default)]
    pub low_stock_threshold: i32,
}

/// Stock badge classification for inventory-tracked items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    InStock,
    LowStock,
    OutOfStock,
}

impl MenuItem {
    /// Classify remaining stock. `None` when the item does not track
    /// inventory or has no recorded quantity.
    pub fn stock_level(&self) -> Option<StockLevel> {
        if !self.track_inventory {
            return None;
        }
        let qty = self.stock_quantity?;
        let level = if qty <= 0 {
            StockLevel::OutOfStock
        } else if qty <= self.low_stock_threshold {
            StockLevel::LowStock
        } else {
            StockLevel::InStock
        };
        Some(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(track: bool, qty: Option<i32>, threshold: i32) -> MenuItem {
        MenuItem {
            id: "item-1".to_string(),
            name: "Iced Latte".to_string(),
            description: None,
            category: "drinks".to_string(),
            base_price: 120.0,
            discount_price: None,
            is_on_discount: false,
            effective_price: None,
            available: true,
            image: None,
            variations: vec![],
            add_ons: vec![],
            track_inventory: track,
            stock_quantity: qty,
            low_stock_threshold: threshold,
        }
    }

    #[test]
    fn test_stock_level_untracked() {
        assert_eq!(item(false, Some(3), 5).stock_level(), None);
        assert_eq!(item(true, None, 5).stock_level(), None);
    }

    #[test]
    fn test_stock_level_classification() {
        assert_eq!(item(true, Some(12), 5).stock_level(), Some(StockLevel::InStock));
        assert_eq!(item(true, Some(5), 5).stock_level(), Some(StockLevel::LowStock));
        assert_eq!(item(true, Some(0), 5).stock_level(), Some(StockLevel::OutOfStock));
    }
}
