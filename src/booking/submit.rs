use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog::Catalog;

use super::forms::{mask_card_number, GuestInfo, PaymentInfo};
use super::pricing;

pub const INVALID_BOOKING_DATA: &str = "Invalid booking data provided.";
pub const PAYMENT_FAILED: &str = "Payment processing failed.";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred while creating the booking.";

/// The complete submission payload: draft, guest, payment and the display
/// names the confirmation view needs.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub destination_id: String,
    pub hotel_id: String,
    pub room_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[validate(range(min = 1, max = 10, message = "Guests must be between 1 and 10"))]
    pub guests: u32,
    #[validate(range(min = 1, max = 5, message = "Rooms must be between 1 and 5"))]
    pub rooms: u32,
    pub total_price: f64,
    pub hotel_name: String,
    pub room_name: String,
    #[validate(nested)]
    pub guest_info: GuestInfo,
    #[validate(nested)]
    pub payment_info: PaymentInfo,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BookingResult {
    pub(crate) fn confirmed(booking_id: String) -> Self {
        Self {
            success: true,
            booking_id: Some(booking_id),
            error: None,
        }
    }

    pub(crate) fn failed(error: &str) -> Self {
        Self {
            success: false,
            booking_id: None,
            error: Some(error.to_string()),
        }
    }
}

struct PaymentOutcome {
    success: bool,
    payment_id: String,
}

// Stand-in for the gateway authorization call. Always succeeds.
fn authorize_payment(_payment: &PaymentInfo, _amount: f64) -> PaymentOutcome {
    let reference: u64 = rand::thread_rng().gen_range(100_000_000..1_000_000_000);
    PaymentOutcome {
        success: true,
        payment_id: format!("pi_{reference}"),
    }
}

/// Mock submission entry point. Re-validates the whole payload against the
/// catalog (defense in depth), simulates payment authorization, fabricates a
/// booking identifier and logs a summary. Raw card number, expiry and CVV
/// must never reach the log; only the masked form does.
pub fn create_booking(catalog: &Catalog, payload: &BookingRequest) -> BookingResult {
    if let Err(errors) = payload.validate() {
        tracing::warn!(?errors, "booking payload failed validation");
        return BookingResult::failed(INVALID_BOOKING_DATA);
    }

    let nights = match pricing::validate_criteria(
        payload.check_in_date,
        payload.check_out_date,
        payload.guests,
        payload.rooms,
    ) {
        Ok(nights) => nights,
        Err(err) => {
            tracing::warn!(%err, "booking criteria invalid");
            return BookingResult::failed(INVALID_BOOKING_DATA);
        }
    };

    let Some(hotel) = catalog.hotel(&payload.hotel_id) else {
        tracing::warn!(hotel_id = %payload.hotel_id, "unknown hotel in booking payload");
        return BookingResult::failed(INVALID_BOOKING_DATA);
    };
    if hotel.destination_id != payload.destination_id {
        tracing::warn!(
            hotel_id = %payload.hotel_id,
            destination_id = %payload.destination_id,
            "hotel does not belong to the claimed destination"
        );
        return BookingResult::failed(INVALID_BOOKING_DATA);
    }
    let Some(room) = catalog.room(&payload.hotel_id, &payload.room_id) else {
        tracing::warn!(room_id = %payload.room_id, "unknown room in booking payload");
        return BookingResult::failed(INVALID_BOOKING_DATA);
    };

    let expected_total = pricing::total_price(nights, room.price_per_night, payload.rooms);
    if (expected_total - payload.total_price).abs() > 0.01 {
        tracing::warn!(
            expected = expected_total,
            claimed = payload.total_price,
            "booking total does not match the room rate"
        );
        return BookingResult::failed(INVALID_BOOKING_DATA);
    }

    let payment = authorize_payment(&payload.payment_info, expected_total);
    if !payment.success {
        return BookingResult::failed(PAYMENT_FAILED);
    }

    let booking_id = format!("bk_{}", Utc::now().timestamp_millis());
    tracing::info!(
        booking_id = %booking_id,
        payment_id = %payment.payment_id,
        hotel = %payload.hotel_name,
        room = %payload.room_name,
        check_in = %payload.check_in_date,
        check_out = %payload.check_out_date,
        guests = payload.guests,
        rooms = payload.rooms,
        nights,
        total_price = payload.total_price,
        guest_name = %format!(
            "{} {}",
            payload.guest_info.first_name, payload.guest_info.last_name
        ),
        guest_email = %payload.guest_info.email,
        masked_card = %mask_card_number(&payload.payment_info.card_number),
        "booking created (simulated)"
    );

    BookingResult::confirmed(booking_id)
}
