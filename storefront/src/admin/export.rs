//! Completed-orders CSV export
//!
//! Exports the completed orders of an already-filtered view for the sales
//! spreadsheet. Timestamps are rendered comma-free so rows survive naive
//! spreadsheet imports regardless of quoting.

use chrono::{DateTime, NaiveDate, Utc};
use shared::models::{Order, OrderStatus};
use shared::{AppError, AppResult};

/// Export columns, in fixed order
const HEADERS: [&str; 8] = [
    "OrderID",
    "CustName",
    "ContactNum",
    "Email",
    "TotalSpent",
    "OrderDateandTime",
    "ServiceType",
    "remarks",
];

/// Comma-free timestamp (`03/02/2025 09:30 AM`)
fn format_csv_datetime(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%m/%d/%Y %I:%M %p").to_string()
}

/// Quote a field when it carries separators, quotes, or line breaks.
fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Download name for an export generated on `date`
pub fn export_filename(date: NaiveDate) -> String {
    format!("completed_orders_{}.csv", date.format("%Y-%m-%d"))
}

/// Render the completed orders of the given view as CSV. Fails when the
/// view holds no completed order.
pub fn export_completed_csv(view: &[&Order]) -> AppResult<String> {
    let completed: Vec<&&Order> = view
        .iter()
        .filter(|order| order.status == OrderStatus::Completed)
        .collect();

    if completed.is_empty() {
        return Err(AppError::business_rule("No completed orders to export"));
    }

    let mut rows = Vec::with_capacity(completed.len() + 1);
    rows.push(HEADERS.join(","));

    for order in completed {
        let remarks = order
            .notes
            .as_deref()
            .filter(|notes| !notes.is_empty())
            .unwrap_or("N/A");
        let row = [
            order.code(),
            escape_field(&order.customer_name),
            escape_field(&order.contact_number),
            // Email is not collected at checkout
            "N/A".to_string(),
            format!("{:.2}", order.total),
            format_csv_datetime(order.created_at),
            order.service_type.label().to_string(),
            escape_field(remarks),
        ];
        rows.push(row.join(","));
    }

    Ok(rows.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::order::ServiceType;

    fn completed_order(id: &str, name: &str, notes: Option<&str>) -> Order {
        Order {
            id: id.to_string(),
            customer_name: name.to_string(),
            contact_number: "0917 000 1111".to_string(),
            service_type: ServiceType::DineIn,
            address: None,
            pickup_time: None,
            party_size: Some(2),
            dine_in_time: None,
            payment_method: "gcash".to_string(),
            reference_number: None,
            notes: notes.map(str::to_string),
            total: 335.5,
            status: OrderStatus::Completed,
            receipt_url: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, 2, 9, 30, 0).unwrap(),
            order_items: vec![],
        }
    }

    #[test]
    fn test_header_row_shape() {
        let order = completed_order("ord-aaaa0001", "Ana", None);
        let view = [&order];
        let csv = export_completed_csv(&view).unwrap();
        assert_eq!(
            csv.lines().next().unwrap(),
            "OrderID,CustName,ContactNum,Email,TotalSpent,OrderDateandTime,ServiceType,remarks"
        );
    }

    #[test]
    fn test_row_values() {
        let order = completed_order("ord-aaaa0001", "Ana", Some("Window seat"));
        let view = [&order];
        let csv = export_completed_csv(&view).unwrap();
        assert_eq!(
            csv.lines().nth(1).unwrap(),
            "AAAA0001,Ana,0917 000 1111,N/A,335.50,03/02/2025 09:30 AM,Dine in,Window seat"
        );
    }

    #[test]
    fn test_empty_notes_become_na() {
        let order = completed_order("ord-aaaa0001", "Ana", Some(""));
        let view = [&order];
        let csv = export_completed_csv(&view).unwrap();
        assert!(csv.lines().nth(1).unwrap().ends_with(",N/A"));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let order = completed_order("ord-aaaa0001", "Reyes, Ana", Some("no nuts, please"));
        let view = [&order];
        let csv = export_completed_csv(&view).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"Reyes, Ana\""));
        assert!(row.contains("\"no nuts, please\""));
    }

    #[test]
    fn test_non_completed_orders_are_skipped() {
        let mut pending = completed_order("ord-bbbb0002", "Ben", None);
        pending.status = OrderStatus::Pending;
        let completed = completed_order("ord-aaaa0001", "Ana", None);

        let view = [&pending, &completed];
        let csv = export_completed_csv(&view).unwrap();
        assert_eq!(csv.lines().count(), 2); // header + one row
    }

    #[test]
    fn test_export_with_nothing_completed_fails() {
        let mut pending = completed_order("ord-bbbb0002", "Ben", None);
        pending.status = OrderStatus::Pending;
        let view = [&pending];
        assert!(export_completed_csv(&view).is_err());
        assert!(export_completed_csv(&[]).is_err());
    }

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        assert_eq!(export_filename(date), "completed_orders_2025-03-02.csv");
    }
}
