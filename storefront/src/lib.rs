//! Storefront ordering core
//!
//! Customer-facing cart and checkout flow plus the staff-facing orders view
//! for a café storefront. Persistence, authentication, and media hosting are
//! external collaborators consumed through the traits in [`services`].

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod core;
pub mod pricing;
pub mod services;
pub mod utils;
