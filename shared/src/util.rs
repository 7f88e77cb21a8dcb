/// Short customer-facing order code: the last 8 characters of the persisted
/// order id, uppercased. Shown on receipts, exports, and tracking lookups.
pub fn order_code(id: &str) -> String {
    let start = id
        .char_indices()
        .rev()
        .nth(7)
        .map(|(i, _)| i)
        .unwrap_or(0);
    id[start..].to_uppercase()
}
