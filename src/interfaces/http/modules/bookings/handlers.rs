//! Booking HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::services::BookingService;
use crate::interfaces::http::common::{error_status, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for booking handlers.
#[derive(Clone)]
pub struct BookingAppState {
    pub bookings: Arc<BookingService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    request_body = BookingRequestDto,
    responses(
        (status = 200, description = "Booking created", body = ApiResponse<BookingResponseDto>),
        (status = 404, description = "Hotel or room missing, or room unavailable"),
        (status = 400, description = "Invalid request"),
        (status = 422, description = "Field validation failed")
    )
)]
pub async fn create_booking(
    State(state): State<BookingAppState>,
    ValidatedJson(request): ValidatedJson<BookingRequestDto>,
) -> Result<
    Json<ApiResponse<BookingResponseDto>>,
    (StatusCode, Json<ApiResponse<BookingResponseDto>>),
> {
    let (response, message) = state
        .bookings
        .create_booking(request.into())
        .await
        .map_err(|e| (error_status(&e), Json(ApiResponse::error(e.to_string()))))?;

    // Business failures come back as a reference-less response
    if response.reference.is_empty() {
        return Err((StatusCode::NOT_FOUND, Json(ApiResponse::error(message))));
    }

    Ok(Json(ApiResponse::success(response.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{reference}",
    tag = "Bookings",
    params(("reference" = String, Path, description = "Public booking reference")),
    responses(
        (status = 200, description = "Booking details", body = ApiResponse<BookingResponseDto>),
        (status = 404, description = "No booking with this reference")
    )
)]
pub async fn get_booking(
    State(state): State<BookingAppState>,
    Path(reference): Path<String>,
) -> Result<
    Json<ApiResponse<BookingResponseDto>>,
    (StatusCode, Json<ApiResponse<BookingResponseDto>>),
> {
    let response = state
        .bookings
        .get_booking_by_reference(&reference)
        .await
        .map_err(|e| (error_status(&e), Json(ApiResponse::error(e.to_string()))))?;

    Ok(Json(ApiResponse::success(response.into())))
}
