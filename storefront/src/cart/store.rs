//! In-memory cart state

use rust_decimal::Decimal;
use shared::models::MenuItem;
use shared::models::menu_item::Variation;
use shared::order::{CartLine, SelectedAddOn};
use tracing::warn;

use super::key::line_key;
use crate::pricing::{compute_line_price, to_decimal, to_f64};

/// Ordered collection of cart lines.
///
/// Single-writer: mutated only by direct user-triggered calls, never by
/// background timers. The total is always derived from the lines, so no
/// cached value can go stale relative to a mutation.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of units across all lines (cart badge)
    pub fn total_quantity(&self) -> i32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Add a selection to the cart and return its line id.
    ///
    /// When a line with the identical (item, variation, add-on multiset)
    /// combination already exists, its quantity is incremented instead of a
    /// duplicate line being created. The line's unit price is computed once,
    /// here, and kept even if the menu item's price changes later in the
    /// session.
    ///
    /// Availability is checked by the caller; an unavailable or out-of-stock
    /// item is still enqueued, since stock is enforced by the persistence
    /// collaborator at order-creation time.
    pub fn add_item(
        &mut self,
        item: &MenuItem,
        quantity: i32,
        variation: Option<Variation>,
        add_ons: Vec<SelectedAddOn>,
    ) -> String {
        let quantity = quantity.max(1);
        if !item.available {
            warn!(item_id = %item.id, "adding unavailable item to cart");
        }

        let id = line_key(&item.id, variation.as_ref(), &add_ons);
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity += quantity;
            return id;
        }

        let unit_price = compute_line_price(item, variation.as_ref(), &add_ons);
        self.lines.push(CartLine {
            id: id.clone(),
            item_id: item.id.clone(),
            name: item.name.clone(),
            variation,
            add_ons,
            quantity,
            unit_price,
        });
        id
    }

    /// Set a line's quantity exactly (not a delta); a quantity ≤ 0 removes
    /// the line. Unknown line ids are ignored.
    pub fn update_quantity(&mut self, line_id: &str, quantity: i32) {
        if quantity <= 0 {
            self.remove_line(line_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == line_id) {
            line.quantity = quantity;
        }
    }

    /// Remove a line unconditionally; no-op when the id is unknown.
    pub fn remove_line(&mut self, line_id: &str) {
        self.lines.retain(|line| line.id != line_id);
    }

    /// Empty the cart
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Σ(unit_price × quantity) over all lines; 0 for an empty cart.
    pub fn total_price(&self) -> f64 {
        let total = self.lines.iter().fold(Decimal::ZERO, |acc, line| {
            acc + to_decimal(line.unit_price) * Decimal::from(line.quantity)
        });
        to_f64(total)
    }
}
