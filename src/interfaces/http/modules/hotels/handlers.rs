//! Hotel HTTP handlers

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::services::HotelService;
use crate::interfaces::http::common::{error_status, ApiResponse};

use super::dto::*;

/// Application state for hotel handlers.
#[derive(Clone)]
pub struct HotelAppState {
    pub hotels: Arc<HotelService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/hotels/search",
    tag = "Hotels",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching hotels, possibly empty", body = ApiResponse<Vec<HotelDto>>),
        (status = 400, description = "Name missing or too short")
    )
)]
pub async fn search_hotels(
    State(state): State<HotelAppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<HotelDto>>>, (StatusCode, Json<ApiResponse<Vec<HotelDto>>>)> {
    let hotels = state
        .hotels
        .get_hotel_by_name(&query.name)
        .await
        .map_err(|e| (error_status(&e), Json(ApiResponse::error(e.to_string()))))?;

    let dtos = hotels.iter().map(HotelDto::from_domain).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/v1/hotels/availability",
    tag = "Hotels",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Hotels able to host the guests over the range", body = ApiResponse<Vec<HotelDto>>),
        (status = 400, description = "Invalid date range")
    )
)]
pub async fn available_hotel_rooms(
    State(state): State<HotelAppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ApiResponse<Vec<HotelDto>>>, (StatusCode, Json<ApiResponse<Vec<HotelDto>>>)> {
    let hotels = state
        .hotels
        .get_available_hotel_rooms(query.start_date, query.end_date, query.number_of_guests)
        .await
        .map_err(|e| (error_status(&e), Json(ApiResponse::error(e.to_string()))))?;

    let dtos = hotels.iter().map(HotelDto::from_domain).collect();
    Ok(Json(ApiResponse::success(dtos)))
}
