use chrono::NaiveDate;
use thiserror::Error;

use crate::catalog::{MAX_GUESTS, MAX_ROOMS};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("Check-out must be at least one night after check-in")]
    InvalidStay,
    #[error("Guests must be between 1 and 10")]
    GuestsOutOfRange,
    #[error("Rooms must be between 1 and 5")]
    RoomsOutOfRange,
}

/// Whole nights between check-in and check-out.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// nights x pricePerNight x roomCount. No taxes or fees modeled.
pub fn total_price(nights: i64, price_per_night: f64, rooms: u32) -> f64 {
    nights as f64 * price_per_night * f64::from(rooms)
}

/// Stay invariants shared by hotel search and booking resolution. Out-of-range
/// values are rejected, never clamped. Returns the resolved night count.
pub fn validate_criteria(
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
    rooms: u32,
) -> Result<i64, CriteriaError> {
    let nights = nights_between(check_in, check_out);
    if nights < 1 {
        return Err(CriteriaError::InvalidStay);
    }
    if !(1..=MAX_GUESTS).contains(&guests) {
        return Err(CriteriaError::GuestsOutOfRange);
    }
    if !(1..=MAX_ROOMS).contains(&rooms) {
        return Err(CriteriaError::RoomsOutOfRange);
    }
    Ok(nights)
}
