//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::services::{BookingService, HotelService};
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::bookings::dto::{
    BookingRequestDto, BookingResponseDto, CustomerDto, HotelRefDto, RoomLineDto, RoomStayDto,
};
use crate::interfaces::http::modules::bookings::handlers::{self as bookings, BookingAppState};
use crate::interfaces::http::modules::health::handlers::{self as health, HealthState};
use crate::interfaces::http::modules::hotels::dto::{HotelDto, RoomDto};
use crate::interfaces::http::modules::hotels::handlers::{self as hotels, HotelAppState};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Hotels
        hotels::search_hotels,
        hotels::available_hotel_rooms,
        // Bookings
        bookings::create_booking,
        bookings::get_booking,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
            // Hotels
            HotelDto,
            RoomDto,
            // Bookings
            BookingRequestDto,
            CustomerDto,
            HotelRefDto,
            RoomLineDto,
            BookingResponseDto,
            RoomStayDto,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Hotels", description = "Hotel search and room availability"),
        (name = "Bookings", description = "Booking creation and retrieval by reference"),
    ),
    info(
        title = "Highdon Hotels API",
        version = "1.0.0",
        description = "REST API for hotel room availability and reservations",
        license(name = "MIT"),
        contact(name = "Highdon", email = "support@highdon.com")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    db: DatabaseConnection,
    hotel_service: Arc<HotelService>,
    booking_service: Arc<BookingService>,
) -> Router {
    let health_state = HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };
    let hotel_state = HotelAppState {
        hotels: hotel_service,
    };
    let booking_state = BookingAppState {
        bookings: booking_service,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let hotel_routes = Router::new()
        .route("/search", get(hotels::search_hotels))
        .route("/availability", get(hotels::available_hotel_rooms))
        .with_state(hotel_state);

    let booking_routes = Router::new()
        .route("/", post(bookings::create_booking))
        .route("/{reference}", get(bookings::get_booking))
        .with_state(booking_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check).with_state(health_state))
        // Hotels
        .nest("/api/v1/hotels", hotel_routes)
        // Bookings
        .nest("/api/v1/bookings", booking_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
