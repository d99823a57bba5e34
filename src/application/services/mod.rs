//! Application services

pub mod booking;
pub mod hotel;
pub mod stay;

pub use booking::{
    BookingRequest, BookingResponse, BookingService, CustomerDetails, RoomLine, RoomStaySummary,
};
pub use hotel::HotelService;
pub use stay::RoomStayService;
