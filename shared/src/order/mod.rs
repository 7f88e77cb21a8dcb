//! Cart and order-request types

mod types;

pub use types::{CartLine, OrderRequest, PickupTime, SelectedAddOn, ServiceType};
