//! Cart line identity
//!
//! A line id is a hash of the selection's identity-defining parts:
//! - item id
//! - selected variation id (or absent)
//! - add-on id:quantity multiset, order-independent
//!
//! Lines with the same id can be merged (quantities added together).

use sha2::{Digest, Sha256};
use shared::models::menu_item::Variation;
use shared::order::SelectedAddOn;

/// Derive the structural key for a cart line.
pub fn line_key(item_id: &str, variation: Option<&Variation>, add_ons: &[SelectedAddOn]) -> String {
    let mut hasher = Sha256::new();

    hasher.update(item_id.as_bytes());
    hasher.update([0u8]);

    if let Some(variation) = variation {
        hasher.update(variation.id.as_bytes());
    }
    hasher.update([0u8]);

    // Sort the pairs so selection order cannot split identical combinations
    let mut pairs: Vec<(&str, i32)> = add_ons
        .iter()
        .map(|a| (a.id.as_str(), a.quantity))
        .collect();
    pairs.sort_unstable();
    for (id, quantity) in pairs {
        hasher.update(id.as_bytes());
        hasher.update(quantity.to_be_bytes());
        hasher.update([0u8]);
    }

    let digest = hasher.finalize();
    hex::encode(&digest[..16]) // first 16 bytes for a shorter id
}
