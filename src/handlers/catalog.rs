use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::booking::pricing::validate_criteria;
use crate::catalog::{self, HotelFilters, SortBy, SortOrder, PAGE_SIZE};
use crate::entities::destination::Destination;
use crate::entities::hotel::Hotel;
use crate::error::{AppError, AppResult};
use crate::AppState;

const MISSING_SEARCH_INFO: &str = "Missing search information. Please start a new search.";

#[derive(Debug, Deserialize)]
pub struct DestinationQuery {
    pub query: Option<String>,
}

/// Destination catalog, optionally narrowed by an autocomplete query.
pub async fn list_destinations(
    State(state): State<AppState>,
    Query(params): Query<DestinationQuery>,
) -> AppResult<Json<Vec<Destination>>> {
    let destinations = match params.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        Some(query) => state
            .catalog
            .search_destinations(query)
            .into_iter()
            .cloned()
            .collect(),
        None => state.catalog.destinations().to_vec(),
    };
    Ok(Json(destinations))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchQuery {
    pub destination_id: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Option<u32>,
    pub rooms: Option<u32>,
    /// Comma-separated star ratings, e.g. `stars=4,5`.
    pub stars: Option<String>,
    pub guest_rating_min: Option<f64>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
    pub page: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchResponse {
    pub hotels: Vec<Hotel>,
    pub total_count: usize,
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
}

/// Hotel search: resolve the stay criteria, then filter, sort and paginate
/// the destination's hotels.
pub async fn search_hotels(
    State(state): State<AppState>,
    Query(params): Query<HotelSearchQuery>,
) -> AppResult<Json<HotelSearchResponse>> {
    let destination_id = params
        .destination_id
        .as_deref()
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::BadRequest(MISSING_SEARCH_INFO.to_string()))?;
    let check_in = params
        .check_in
        .ok_or_else(|| AppError::BadRequest(MISSING_SEARCH_INFO.to_string()))?;
    let check_out = params
        .check_out
        .ok_or_else(|| AppError::BadRequest(MISSING_SEARCH_INFO.to_string()))?;
    let guests = params
        .guests
        .ok_or_else(|| AppError::BadRequest(MISSING_SEARCH_INFO.to_string()))?;
    let rooms = params
        .rooms
        .ok_or_else(|| AppError::BadRequest(MISSING_SEARCH_INFO.to_string()))?;

    validate_criteria(check_in, check_out, guests, rooms)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    // The mock catalog fetch keeps the original's artificial network delay.
    sleep(Duration::from_millis(state.config.simulated_latency_ms)).await;

    let mut hotels = state.catalog.hotels_in(destination_id);
    let filters = HotelFilters {
        star_ratings: parse_star_filter(params.stars.as_deref())?,
        guest_rating_min: params.guest_rating_min.unwrap_or(0.0),
        price_min: params.price_min,
        price_max: params.price_max,
    };
    hotels.retain(|h| filters.matches(h));
    catalog::sort_hotels(&mut hotels, params.sort_by, params.sort_order);

    let total_count = hotels.len();
    let page = params.page.unwrap_or(1).max(1);
    let (hotels, total_pages) = catalog::paginate(hotels, page);

    Ok(Json(HotelSearchResponse {
        hotels,
        total_count,
        page,
        total_pages,
        page_size: PAGE_SIZE,
    }))
}

fn parse_star_filter(raw: Option<&str>) -> AppResult<Vec<u8>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(|s| {
            s.trim()
                .parse::<u8>()
                .map_err(|_| AppError::BadRequest(format!("Invalid star rating filter: {}", s)))
        })
        .collect()
}

/// Hotel detail with its rooms and reviews.
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<String>,
) -> AppResult<Json<Hotel>> {
    let hotel = state
        .catalog
        .hotel(&hotel_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))?;
    Ok(Json(hotel))
}
