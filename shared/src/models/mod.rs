//! Domain models

pub mod catalog;
pub mod menu_item;
pub mod order;

pub use catalog::{Category, PaymentMethod, StoreInfo};
pub use menu_item::{AddOn, MenuItem, StockLevel, Variation};
pub use order::{Order, OrderItemRecord, OrderStatus};
