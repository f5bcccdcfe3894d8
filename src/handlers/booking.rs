use std::time::Duration;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::booking::forms::GuestInfo;
use crate::booking::pricing::{self, validate_criteria};
use crate::booking::submit::{self, BookingRequest, BookingResult};
use crate::booking::wizard::{self, BookingStep, TransitionError, WizardEvent};
use crate::error::{AppError, AppResult};
use crate::AppState;

const MISSING_BOOKING_INFO: &str = "Missing booking information. Please select a room again.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraftQuery {
    pub hotel_id: Option<String>,
    pub room_id: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Option<u32>,
    pub rooms: Option<u32>,
}

/// The client-side representation of a prospective reservation, priced from
/// the catalog rather than trusting a rate passed in the query string.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub destination_id: String,
    pub hotel_id: String,
    pub room_id: String,
    pub hotel_name: String,
    pub room_name: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guests: u32,
    pub rooms: u32,
    pub price_per_night: f64,
    pub nights: i64,
    pub total_price: f64,
}

/// Resolve navigation parameters against the catalog into a priced draft.
pub async fn booking_draft(
    State(state): State<AppState>,
    Query(params): Query<BookingDraftQuery>,
) -> AppResult<Json<BookingDraft>> {
    let hotel_id = params
        .hotel_id
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(MISSING_BOOKING_INFO.to_string()))?;
    let room_id = params
        .room_id
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(MISSING_BOOKING_INFO.to_string()))?;
    let check_in = params
        .check_in
        .ok_or_else(|| AppError::BadRequest(MISSING_BOOKING_INFO.to_string()))?;
    let check_out = params
        .check_out
        .ok_or_else(|| AppError::BadRequest(MISSING_BOOKING_INFO.to_string()))?;
    let guests = params
        .guests
        .ok_or_else(|| AppError::BadRequest(MISSING_BOOKING_INFO.to_string()))?;
    let rooms = params
        .rooms
        .ok_or_else(|| AppError::BadRequest(MISSING_BOOKING_INFO.to_string()))?;

    let nights = validate_criteria(check_in, check_out, guests, rooms)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let hotel = state
        .catalog
        .hotel(hotel_id)
        .ok_or_else(|| AppError::NotFound(MISSING_BOOKING_INFO.to_string()))?;
    let room = state
        .catalog
        .room(hotel_id, room_id)
        .ok_or_else(|| AppError::NotFound(MISSING_BOOKING_INFO.to_string()))?;

    Ok(Json(BookingDraft {
        destination_id: hotel.destination_id.clone(),
        hotel_id: hotel.id.clone(),
        room_id: room.id.clone(),
        hotel_name: hotel.name.clone(),
        room_name: room.name.clone(),
        check_in_date: check_in,
        check_out_date: check_out,
        guests,
        rooms,
        price_per_night: room.price_per_night,
        nights,
        total_price: pricing::total_price(nights, room.price_per_night, rooms),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardAdvanceRequest {
    pub step: BookingStep,
    pub event: WizardEvent,
    pub guest_info: Option<GuestInfo>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardAdvanceResponse {
    pub step: BookingStep,
}

/// Drive the wizard one transition. Invalid moves are rejected and the
/// client keeps its current step; guest-info failures come back as per-field
/// errors.
pub async fn advance_wizard(
    Json(payload): Json<WizardAdvanceRequest>,
) -> AppResult<Json<WizardAdvanceResponse>> {
    let step = wizard::transition(payload.step, payload.event, payload.guest_info.as_ref())
        .map_err(|err| match err {
            TransitionError::InvalidGuestInfo(errors) => AppError::Validation(errors),
            other => AppError::BadRequest(other.to_string()),
        })?;
    Ok(Json(WizardAdvanceResponse { step }))
}

/// Mock submission entry point. Validation failures and the (unreachable)
/// simulated payment failure come back as `success: false` rather than HTTP
/// errors; a panicking submission task degrades to the generic failure.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<BookingRequest>,
) -> AppResult<Json<BookingResult>> {
    // The mock backend keeps the original's artificial processing delay.
    sleep(Duration::from_millis(state.config.simulated_latency_ms)).await;

    let catalog = state.catalog.clone();
    let result = tokio::task::spawn_blocking(move || submit::create_booking(&catalog, &payload))
        .await
        .unwrap_or_else(|err| {
            tracing::error!(%err, "booking submission task failed");
            BookingResult::failed(submit::UNEXPECTED_ERROR)
        });

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::forms::tests::{valid_guest, valid_payment};
    use crate::test_support::test_state;

    fn draft_query() -> BookingDraftQuery {
        BookingDraftQuery {
            hotel_id: Some("hotel-paris-1".to_string()),
            room_id: Some("room-paris-1-std".to_string()),
            check_in: NaiveDate::from_ymd_opt(2025, 1, 10),
            check_out: NaiveDate::from_ymd_opt(2025, 1, 13),
            guests: Some(2),
            rooms: Some(1),
        }
    }

    #[tokio::test]
    async fn draft_resolves_nights_and_total() {
        let state = test_state();
        let Json(draft) = booking_draft(State(state), Query(draft_query()))
            .await
            .unwrap();

        assert_eq!(draft.destination_id, "paris");
        assert_eq!(draft.nights, 3);
        assert_eq!(draft.price_per_night, 350.0);
        assert_eq!(draft.total_price, 1050.0);
        assert_eq!(draft.hotel_name, "Grand Parisian Hotel");
    }

    #[tokio::test]
    async fn draft_rejects_missing_or_unknown_parameters() {
        let state = test_state();

        let mut query = draft_query();
        query.room_id = None;
        assert!(matches!(
            booking_draft(State(state.clone()), Query(query)).await,
            Err(AppError::BadRequest(_))
        ));

        let mut query = draft_query();
        query.room_id = Some("room-nowhere".to_string());
        assert!(matches!(
            booking_draft(State(state.clone()), Query(query)).await,
            Err(AppError::NotFound(_))
        ));

        // Same-day check-out resolves to zero nights.
        let mut query = draft_query();
        query.check_out = query.check_in;
        assert!(matches!(
            booking_draft(State(state), Query(query)).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn wizard_endpoint_gates_details_on_guest_info() {
        let advanced = advance_wizard(Json(WizardAdvanceRequest {
            step: BookingStep::Details,
            event: WizardEvent::Next,
            guest_info: Some(valid_guest()),
        }))
        .await
        .unwrap();
        assert_eq!(advanced.0.step, BookingStep::Review);

        let mut guest = valid_guest();
        guest.email = "nope".to_string();
        let result = advance_wizard(Json(WizardAdvanceRequest {
            step: BookingStep::Details,
            event: WizardEvent::Next,
            guest_info: Some(guest),
        }))
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn end_to_end_paris_booking() {
        let state = test_state();

        // Resolve the draft the wizard would be seeded with.
        let Json(draft) = booking_draft(State(state.clone()), Query(draft_query()))
            .await
            .unwrap();

        // Walk the wizard: Details -> Review -> Payment.
        let step = advance_wizard(Json(WizardAdvanceRequest {
            step: BookingStep::Details,
            event: WizardEvent::Next,
            guest_info: Some(valid_guest()),
        }))
        .await
        .unwrap()
        .0
        .step;
        let step = advance_wizard(Json(WizardAdvanceRequest {
            step,
            event: WizardEvent::Next,
            guest_info: None,
        }))
        .await
        .unwrap()
        .0
        .step;
        assert_eq!(step, BookingStep::Payment);

        let Json(result) = create_booking(
            State(state),
            Json(BookingRequest {
                destination_id: draft.destination_id,
                hotel_id: draft.hotel_id,
                room_id: draft.room_id,
                check_in_date: draft.check_in_date,
                check_out_date: draft.check_out_date,
                guests: draft.guests,
                rooms: draft.rooms,
                total_price: draft.total_price,
                hotel_name: draft.hotel_name,
                room_name: draft.room_name,
                guest_info: valid_guest(),
                payment_info: valid_payment(),
            }),
        )
        .await
        .unwrap();

        assert!(result.success);
        assert!(result.booking_id.unwrap().starts_with("bk_"));
    }
}
