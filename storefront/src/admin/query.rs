//! Orders Query/Filter Layer
//!
//! Derives the displayable admin view from the flat persisted list: status
//! filter, inclusive date range, free-text search, stable sort. Sales
//! aggregates are scoped to the derived view, not the full list, and are
//! recomputed from it on every change.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{Order, OrderStatus};
use shared::util::order_code;

use crate::pricing::{to_decimal, to_f64};

// ============================================================================
// Filter State
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    CreatedAt,
    Total,
    CustomerName,
    Status,
}

impl SortKey {
    /// Direction a freshly selected key starts with: newest-first for
    /// creation time, ascending for everything else.
    fn default_dir(&self) -> SortDir {
        match self {
            SortKey::CreatedAt => SortDir::Desc,
            _ => SortDir::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

/// Active sort key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub dir: SortDir,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::CreatedAt,
            dir: SortDir::Desc,
        }
    }
}

impl SortState {
    /// Re-selecting the active key flips its direction; switching to a new
    /// key resets to that key's default direction.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.dir = match self.dir {
                SortDir::Asc => SortDir::Desc,
                SortDir::Desc => SortDir::Asc,
            };
        } else {
            self.key = key;
            self.dir = key.default_dir();
        }
    }
}

/// Admin list filter state
#[derive(Debug, Clone, Default)]
pub struct ViewFilter {
    /// Free-text search over customer name, phone, order id, and address
    pub query: String,
    pub status: StatusFilter,
    /// Inclusive; normalized to 00:00:00.000 of the day
    pub date_from: Option<NaiveDate>,
    /// Inclusive; normalized to 23:59:59.999 of the day
    pub date_to: Option<NaiveDate>,
    pub sort: SortState,
}

// ============================================================================
// View Derivation
// ============================================================================

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
}

fn day_end(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_milli_opt(23, 59, 59, 999).unwrap())
}

fn matches_query(order: &Order, needle: &str) -> bool {
    order.customer_name.to_lowercase().contains(needle)
        || order.contact_number.to_lowercase().contains(needle)
        || order.id.to_lowercase().contains(needle)
        || order
            .address
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(needle)
}

/// Apply search, status and date filters, then sort. The sort is stable, so
/// equal keys keep their incoming relative order.
pub fn derive_view<'a>(orders: &'a [Order], filter: &ViewFilter) -> Vec<&'a Order> {
    let needle = filter.query.trim().to_lowercase();

    let mut view: Vec<&Order> = orders
        .iter()
        .filter(|order| match filter.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => order.status == status,
        })
        .filter(|order| {
            filter
                .date_from
                .is_none_or(|date| order.created_at >= day_start(date))
        })
        .filter(|order| {
            filter
                .date_to
                .is_none_or(|date| order.created_at <= day_end(date))
        })
        .filter(|order| needle.is_empty() || matches_query(order, &needle))
        .collect();

    view.sort_by(|a, b| {
        let ordering = match filter.sort.key {
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::Total => a
                .total
                .partial_cmp(&b.total)
                .unwrap_or(std::cmp::Ordering::Equal),
            SortKey::CustomerName => a
                .customer_name
                .to_lowercase()
                .cmp(&b.customer_name.to_lowercase()),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
        };
        match filter.sort.dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    });

    view
}

// ============================================================================
// Aggregates
// ============================================================================

/// Sales summary over the completed orders of the current view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewTotals {
    pub total_sales: f64,
    pub completed_orders: usize,
    /// Average completed order value; 0 when nothing is completed
    pub average_order: f64,
}

/// Compute the sales aggregates for an already-filtered view.
pub fn view_totals(view: &[&Order]) -> ViewTotals {
    let completed: Vec<&&Order> = view
        .iter()
        .filter(|order| order.status == OrderStatus::Completed)
        .collect();

    let total = completed
        .iter()
        .fold(Decimal::ZERO, |acc, order| acc + to_decimal(order.total));
    let count = completed.len();
    let average = if count > 0 {
        total / Decimal::from(count)
    } else {
        Decimal::ZERO
    };

    ViewTotals {
        total_sales: to_f64(total),
        completed_orders: count,
        average_order: to_f64(average),
    }
}

// ============================================================================
// Tracking Lookups
// ============================================================================

/// Client-side tracking lookup: match the short order code or any fragment
/// of the full id, case-insensitively.
pub fn find_by_code<'a>(orders: &'a [Order], term: &str) -> Option<&'a Order> {
    let needle = term.trim().to_uppercase();
    if needle.is_empty() {
        return None;
    }
    orders.iter().find(|order| {
        order_code(&order.id).contains(&needle) || order.id.to_uppercase().contains(&needle)
    })
}

/// Orders for an exact contact number, newest first.
pub fn find_by_phone<'a>(orders: &'a [Order], phone: &str) -> Vec<&'a Order> {
    let needle = phone.trim();
    if needle.is_empty() {
        return vec![];
    }
    let mut matches: Vec<&Order> = orders
        .iter()
        .filter(|order| order.contact_number == needle)
        .collect();
    matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    matches
}

// ============================================================================
// Tests
// ============================================================================
