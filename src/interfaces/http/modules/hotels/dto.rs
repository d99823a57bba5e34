//! Hotel DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::hotel::{Hotel, Room};

/// Room details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomDto {
    pub hotel_name: String,
    pub room_type: String,
    pub room_number: i32,
    pub price_per_night: f64,
    pub capacity: i32,
}

/// Hotel with its (possibly availability-filtered) rooms
#[derive(Debug, Serialize, ToSchema)]
pub struct HotelDto {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub rooms: Vec<RoomDto>,
}

impl HotelDto {
    pub fn from_domain(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name.clone(),
            address: hotel.address.clone(),
            phone: hotel.phone.clone(),
            rooms: hotel
                .rooms
                .iter()
                .map(|room| room_to_dto(&hotel.name, room))
                .collect(),
        }
    }
}

fn room_to_dto(hotel_name: &str, room: &Room) -> RoomDto {
    RoomDto {
        hotel_name: hotel_name.to_string(),
        room_type: room.room_type.to_string(),
        room_number: room.room_number,
        price_per_night: room.price_per_night,
        capacity: room.capacity,
    }
}

/// Query parameters for name search
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Hotel name, at least 3 characters
    pub name: String,
}

/// Query parameters for availability search
#[derive(Debug, Deserialize, IntoParams)]
pub struct AvailabilityQuery {
    /// First night of the stay (ISO 8601 date)
    pub start_date: NaiveDate,
    /// Last night of the stay
    pub end_date: NaiveDate,
    pub number_of_guests: i32,
}
