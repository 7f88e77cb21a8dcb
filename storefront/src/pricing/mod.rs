//! Pricing Engine
//!
//! Pure line-price computation: effective price after discounts, variation
//! delta, add-on extras. All arithmetic runs on `rust_decimal` internally
//! and rounds to 2 decimal places on the way out.

mod calculator;

pub use calculator::{
    compute_line_price, discount_percent, effective_unit_price, to_decimal, to_f64,
};
