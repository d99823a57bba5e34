//! Booking DTOs and request validation rules

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::services::{
    BookingRequest, BookingResponse, CustomerDetails, RoomLine,
};
use crate::domain::StayPeriod;

/// Customer fields on a booking request (booker or guest)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CustomerDto {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[validate(email(message = "Invalid email address."))]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
}

/// Hotel reference on a booking request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct HotelRefDto {
    pub name: String,
}

/// One requested room with its guests
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_guest_capacity"))]
pub struct RoomLineDto {
    pub hotel_name: String,
    #[serde(default)]
    pub room_type: String,
    pub room_number: i32,
    #[serde(default)]
    pub price_per_night: f64,
    #[serde(default)]
    pub capacity: i32,
    #[validate(nested)]
    pub guests: Vec<CustomerDto>,
}

/// Booking creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_date_order"))]
pub struct BookingRequestDto {
    #[validate(nested)]
    pub customer: CustomerDto,
    #[validate(nested)]
    pub hotel: HotelRefDto,
    #[validate(nested)]
    pub rooms: Vec<RoomLineDto>,
    /// First night of the stay
    pub start_date: NaiveDate,
    /// Last night of the stay; checkout is the following morning
    pub end_date: NaiveDate,
}

/// Matches `^\+?[0-9\s\-\(\)]{7,}$`
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    let well_formed = digits.len() >= 7
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_whitespace() || matches!(c, '-' | '(' | ')'));
    if well_formed {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone");
        err.message = Some("Invalid phone number format.".into());
        Err(err)
    }
}

fn validate_guest_capacity(line: &RoomLineDto) -> Result<(), ValidationError> {
    if line.guests.len() as i32 > line.capacity {
        let mut err = ValidationError::new("guest_capacity");
        err.message = Some("Guest number cannot exceed room capacity".into());
        return Err(err);
    }
    Ok(())
}

fn validate_date_order(request: &BookingRequestDto) -> Result<(), ValidationError> {
    if request.end_date < request.start_date {
        let mut err = ValidationError::new("date_order");
        err.message = Some("End date must be later than or equal to start date".into());
        return Err(err);
    }
    Ok(())
}

// ── Conversions into the application layer ──────────────────────

impl From<CustomerDto> for CustomerDetails {
    fn from(dto: CustomerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            address: dto.address,
            email: dto.email,
            phone: dto.phone,
        }
    }
}

impl From<BookingRequestDto> for BookingRequest {
    fn from(dto: BookingRequestDto) -> Self {
        Self {
            customer: dto.customer.into(),
            hotel_name: dto.hotel.name,
            rooms: dto
                .rooms
                .into_iter()
                .map(|line| RoomLine {
                    hotel_name: line.hotel_name,
                    room_number: line.room_number,
                    guests: line.guests.into_iter().map(Into::into).collect(),
                })
                .collect(),
            period: StayPeriod::new(dto.start_date, dto.end_date),
        }
    }
}

// ── Response DTOs ───────────────────────────────────────────────

/// One created or stored room stay
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomStayDto {
    pub hotel_name: String,
    pub room_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guests: Vec<String>,
}

/// Booking details returned by creation and lookup
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingResponseDto {
    pub customer_name: String,
    pub booking_reference: String,
    pub total_price: f64,
    pub room_stays: Vec<RoomStayDto>,
}

impl From<BookingResponse> for BookingResponseDto {
    fn from(response: BookingResponse) -> Self {
        Self {
            customer_name: response.customer_name,
            booking_reference: response.reference,
            total_price: response.total_price,
            room_stays: response
                .room_stays
                .into_iter()
                .map(|stay| RoomStayDto {
                    hotel_name: stay.hotel_name,
                    room_number: stay.room_number,
                    start_date: stay.period.start_date,
                    end_date: stay.period.end_date,
                    guests: stay.guests,
                })
                .collect(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(email: &str, phone: &str) -> CustomerDto {
        CustomerDto {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            address: String::new(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    fn line(capacity: i32, guests: Vec<CustomerDto>) -> RoomLineDto {
        RoomLineDto {
            hotel_name: "Grand Plaza".to_string(),
            room_type: "Double".to_string(),
            room_number: 2,
            price_per_night: 155.0,
            capacity,
            guests,
        }
    }

    #[test]
    fn valid_phone_formats_pass() {
        for phone in ["+44 1294 567890", "01294567890", "(0129) 456-7890"] {
            assert!(customer("jdoe@highdon.com", phone).validate().is_ok(), "{}", phone);
        }
    }

    #[test]
    fn bad_phone_formats_fail() {
        for phone in ["12345", "not a phone", "+44_1294"] {
            assert!(customer("jdoe@highdon.com", phone).validate().is_err(), "{}", phone);
        }
    }

    #[test]
    fn bad_email_fails() {
        assert!(customer("not-an-email", "+44 1294 567890").validate().is_err());
    }

    #[test]
    fn guest_count_above_capacity_fails() {
        let guests = vec![
            customer("a@highdon.com", "+44 1294 567890"),
            customer("b@highdon.com", "+44 1294 567890"),
            customer("c@highdon.com", "+44 1294 567890"),
        ];
        assert!(line(2, guests).validate().is_err());
    }

    #[test]
    fn guest_count_at_capacity_passes() {
        let guests = vec![
            customer("a@highdon.com", "+44 1294 567890"),
            customer("b@highdon.com", "+44 1294 567890"),
        ];
        assert!(line(2, guests).validate().is_ok());
    }

    #[test]
    fn inverted_dates_fail_validation() {
        let request = BookingRequestDto {
            customer: customer("jdoe@highdon.com", "+44 1294 567890"),
            hotel: HotelRefDto {
                name: "Grand Plaza".to_string(),
            },
            rooms: vec![],
            start_date: "2026-07-05".parse().unwrap(),
            end_date: "2026-07-01".parse().unwrap(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn equal_dates_pass_validation() {
        let request = BookingRequestDto {
            customer: customer("jdoe@highdon.com", "+44 1294 567890"),
            hotel: HotelRefDto {
                name: "Grand Plaza".to_string(),
            },
            rooms: vec![],
            start_date: "2026-07-01".parse().unwrap(),
            end_date: "2026-07-01".parse().unwrap(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn nested_guest_emails_are_validated() {
        let guests = vec![customer("broken", "+44 1294 567890")];
        assert!(line(2, guests).validate().is_err());
    }
}
