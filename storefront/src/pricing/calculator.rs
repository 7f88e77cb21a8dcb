//! Line Price Calculator
//!
//! Computes the unit price of a customized menu selection:
//! - Effective base price (explicit sale price wins over the server-computed
//!   effective price, which wins over the base price when it undercuts it)
//! - Signed variation delta
//! - Add-on price × quantity per selected add-on
//!
//! Uses rust_decimal for precision calculations.

use rust_decimal::prelude::*;
use shared::models::MenuItem;
use shared::models::menu_item::Variation;
use shared::order::SelectedAddOn;
use tracing::warn;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

// ==================== Conversion Helpers ====================

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

// ==================== Effective Price ====================

/// Unit base price after whichever discount mechanism takes precedence.
///
/// The explicit sale price applies while `is_on_discount` is set; otherwise
/// the server-computed effective price applies when it is lower than the
/// base price (implicit discount); otherwise the base price stands.
pub fn effective_unit_price(item: &MenuItem) -> f64 {
    if item.is_on_discount
        && let Some(discount) = item.discount_price
    {
        return discount;
    }
    match item.effective_price {
        Some(effective) if effective < item.base_price => effective,
        _ => item.base_price,
    }
}

/// Discounted unit price when a discount is active, `None` otherwise
fn discounted_price(item: &MenuItem) -> Option<f64> {
    if item.is_on_discount && item.discount_price.is_some() {
        return item.discount_price;
    }
    match item.effective_price {
        Some(effective) if effective < item.base_price => Some(effective),
        _ => None,
    }
}

/// Rounded percentage for the sale badge, with `base_price` as the
/// denominator. `None` when no discount is active or when the base price is
/// zero (the division guard reports no discount rather than dividing).
pub fn discount_percent(item: &MenuItem) -> Option<u32> {
    let discounted = discounted_price(item)?;
    if item.base_price <= 0.0 {
        return None;
    }
    let base = to_decimal(item.base_price);
    let percent = (base - to_decimal(discounted)) / base * Decimal::ONE_HUNDRED;
    percent
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
}

// ==================== Line Price ====================

/// Compute the unit price for one cart line.
///
/// The result is not clamped at zero: a negative value means a variation
/// delta slipped past upstream validation, and hiding it here would bury the
/// bug. A warning is logged when that happens.
pub fn compute_line_price(
    item: &MenuItem,
    variation: Option<&Variation>,
    add_ons: &[SelectedAddOn],
) -> f64 {
    let mut price = to_decimal(effective_unit_price(item));

    if let Some(variation) = variation {
        price += to_decimal(variation.price);
    }

    for add_on in add_ons {
        price += to_decimal(add_on.price) * Decimal::from(add_on.quantity);
    }

    if price < Decimal::ZERO {
        warn!(item_id = %item.id, price = %price, "computed negative line price");
    }

    to_f64(price)
}

// ==================== Tests ====================
