//! Order request assembly
//!
//! Converts cart state plus customer-entered fields into the normalized
//! creation request, enforcing the field requirements of the chosen service
//! type. Exactly one service-specific field group ends up populated; the
//! cart total at assembly time is the authoritative order total.

use chrono::{DateTime, Utc};
use shared::order::{OrderRequest, PickupTime, ServiceType};

use super::{Field, ValidationError};
use crate::cart::CartStore;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_CONTACT_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_PARTY_SIZE,
    validate_max_len, validate_required_text,
};

/// Customer-entered checkout state.
///
/// Service-specific fields are all optional here; [`build_order_request`]
/// enforces the ones the chosen service type requires and drops the rest.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub customer_name: String,
    pub contact_number: String,
    pub service_type: ServiceType,
    pub address: Option<String>,
    pub landmark: Option<String>,
    pub pickup_time: Option<PickupTime>,
    pub party_size: Option<i32>,
    pub dine_in_time: Option<DateTime<Utc>>,
    pub table_number: Option<String>,
    pub payment_method: String,
    pub reference_number: Option<String>,
    pub notes: String,
}

/// Merge free-text notes with a labeled structured field: primary notes
/// first, then " | ", then the labeled value; no separator when the notes
/// are empty.
fn merge_notes(notes: &str, label: &str, value: &str) -> String {
    if notes.is_empty() {
        format!("{label}: {value}")
    } else {
        format!("{notes} | {label}: {value}")
    }
}

/// Validate the form against the cart and assemble the creation request.
///
/// Field checks run in fixed precedence: empty cart, then name, then
/// contact, then the service-specific field(s). The first failure is
/// returned.
pub fn build_order_request(
    cart: &CartStore,
    form: &CheckoutForm,
) -> Result<OrderRequest, ValidationError> {
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart);
    }

    let customer_name = form.customer_name.trim();
    validate_required_text(customer_name, Field::CustomerName, MAX_NAME_LEN)?;

    // Counter orders identify the customer by table rather than phone; the
    // table number doubles as the contact number below.
    let mut contact_number = form.contact_number.trim().to_string();
    if form.service_type != ServiceType::Counter {
        validate_required_text(&contact_number, Field::ContactNumber, MAX_CONTACT_LEN)?;
    }

    let mut notes = form.notes.trim().to_string();
    let mut address = None;
    let mut pickup_time = None;
    let mut party_size = None;
    let mut dine_in_time = None;

    match form.service_type {
        ServiceType::Delivery => {
            let value = form.address.as_deref().unwrap_or("").trim();
            validate_required_text(value, Field::Address, MAX_ADDRESS_LEN)?;
            address = Some(value.to_string());

            if let Some(landmark) = form
                .landmark
                .as_deref()
                .map(str::trim)
                .filter(|landmark| !landmark.is_empty())
            {
                validate_max_len(landmark, Field::Landmark, MAX_NOTE_LEN)?;
                notes = merge_notes(&notes, "Landmark", landmark);
            }
        }
        ServiceType::Pickup => {
            let choice = form
                .pickup_time
                .as_ref()
                .ok_or(ValidationError::MissingField(Field::PickupTime))?;
            if let PickupTime::Custom(text) = choice
                && text.trim().is_empty()
            {
                return Err(ValidationError::MissingField(Field::PickupTime));
            }
            pickup_time = Some(choice.display());
        }
        ServiceType::DineIn => {
            let size = form
                .party_size
                .ok_or(ValidationError::MissingField(Field::PartySize))?;
            if !(1..=MAX_PARTY_SIZE).contains(&size) {
                return Err(ValidationError::InvalidPartySize {
                    got: size,
                    max: MAX_PARTY_SIZE,
                });
            }
            let time = form
                .dine_in_time
                .ok_or(ValidationError::MissingField(Field::DineInTime))?;
            party_size = Some(size);
            dine_in_time = Some(time);
        }
        ServiceType::Counter => {
            let table = form.table_number.as_deref().unwrap_or("").trim();
            validate_required_text(table, Field::TableNumber, MAX_CONTACT_LEN)?;
            contact_number = table.to_string();
            notes = merge_notes(&notes, "Table", table);
        }
    }

    validate_max_len(&notes, Field::Notes, MAX_NOTE_LEN)?;

    Ok(OrderRequest {
        customer_name: customer_name.to_string(),
        contact_number,
        service_type: form.service_type,
        address,
        pickup_time,
        party_size,
        dine_in_time,
        payment_method: form.payment_method.clone(),
        reference_number: form
            .reference_number
            .clone()
            .filter(|reference| !reference.is_empty()),
        notes: (!notes.is_empty()).then_some(notes),
        total: cart.total_price(),
        items: cart.lines().to_vec(),
        receipt_url: None,
    })
}
